//! # Tanebi API Types
//!
//! Value shapes returned by the Tanebi `/api/v1/ideas` endpoints.
//!
//! All types are request-scoped: deserialized once from a response,
//! formatted, and dropped. None of them is mutated locally.

use serde::{Deserialize, Serialize};

// =============================================================================
// USERS
// =============================================================================

/// Author or reactor reference embedded in ideas and reactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedUser {
    pub id: u64,
    pub display_name: String,
    pub avatar_path: Option<String>,
}

// =============================================================================
// IDEAS
// =============================================================================

/// Visibility of an idea, lowercase on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[schemars(description = "Who can see the idea: 'public' (everyone) or 'private' (only the author)")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// One row of an idea listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaSummary {
    pub id: u64,
    pub title: String,
    pub visibility: String,
    pub current_stage: String,
    pub reactions_count: u64,
    pub comments_count: u64,
    #[serde(default)]
    pub is_bookmarked: bool,
    pub created_at: String,
    pub updated_at: String,
    pub user: SimplifiedUser,
}

/// One paragraph- or heading-level unit of an idea's body.
///
/// `position` defines display order; the API does not guarantee the
/// array arrives sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaLine {
    pub id: u64,
    pub line_type: String,
    pub content: String,
    pub position: i64,
    #[serde(default)]
    pub comments_count: u64,
    pub created_at: String,
    pub updated_at: String,
}

impl IdeaLine {
    /// Line type the API uses for section headings.
    pub const HEADING: &'static str = "heading";

    /// Whether this line renders as a heading.
    pub fn is_heading(&self) -> bool {
        self.line_type == Self::HEADING
    }
}

/// A reaction left on an idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: u64,
    pub reaction_type: String,
    pub created_at: String,
    pub user: SimplifiedUser,
}

/// Full idea record with its body lines and reactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaDetail {
    pub id: u64,
    pub title: String,
    pub visibility: String,
    pub current_stage: String,
    pub reactions_count: u64,
    #[serde(default)]
    pub is_bookmarked: bool,
    pub created_at: String,
    pub updated_at: String,
    pub user: SimplifiedUser,
    #[serde(default)]
    pub lines: Vec<IdeaLine>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

// =============================================================================
// RESPONSE ENVELOPES
// =============================================================================

/// Single-idea response body.
///
/// The detail and create endpoints answer either with the idea object
/// itself or with `{ "idea": { ... } }`. Both shapes are accepted here so
/// the rest of the crate only ever sees an [`IdeaDetail`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdeaEnvelope {
    Wrapped { idea: IdeaDetail },
    Bare(IdeaDetail),
}

impl IdeaEnvelope {
    /// Unwrap to the idea regardless of envelope shape.
    pub fn into_idea(self) -> IdeaDetail {
        match self {
            Self::Wrapped { idea } | Self::Bare(idea) => idea,
        }
    }
}

/// Pagination block of a listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
}

/// `GET /api/v1/ideas` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaListResponse {
    pub ideas: Vec<IdeaSummary>,
    pub meta: PaginationMeta,
}
