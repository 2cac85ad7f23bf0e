//! # Validated Tool Inputs
//!
//! Each tool argument set is checked here before a request is built.
//! The constructors are the only way to obtain these values, so a
//! `ListQuery`, `IdeaId` or `NewIdea` in hand is always within bounds.

use crate::types::Visibility;
use serde::Serialize;
use thiserror::Error;

/// First page of a listing.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not pick one.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Largest page size the listing tool accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Rejected tool input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("page must be a positive integer (got {0})")]
    InvalidPage(u32),

    #[error("per_page must be between 1 and 100 (got {0})")]
    InvalidPerPage(u32),

    #[error("idea_id must be a positive integer (got {0})")]
    InvalidIdeaId(u64),

    #[error("title must not be empty")]
    EmptyTitle,
}

// =============================================================================
// LIST
// =============================================================================

/// Page selection for `GET /api/v1/ideas`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    page: u32,
    per_page: u32,
}

impl ListQuery {
    /// Validate `page >= 1` and `1 <= per_page <= MAX_PER_PAGE`.
    pub fn new(page: u32, per_page: u32) -> Result<Self, ValidationError> {
        if page == 0 {
            return Err(ValidationError::InvalidPage(page));
        }
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(ValidationError::InvalidPerPage(per_page));
        }
        Ok(Self { page, per_page })
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn per_page(&self) -> u32 {
        self.per_page
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

// =============================================================================
// GET
// =============================================================================

/// Identifier of an existing idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdeaId(u64);

impl IdeaId {
    pub fn new(id: u64) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::InvalidIdeaId(id));
        }
        Ok(Self(id))
    }
}

impl std::fmt::Display for IdeaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// CREATE
// =============================================================================

/// Request body for `POST /api/v1/ideas`.
///
/// `content` is left out of the JSON entirely when there is none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIdea {
    title: String,
    visibility: Visibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl NewIdea {
    pub fn new(
        title: String,
        content: Option<String>,
        visibility: Visibility,
    ) -> Result<Self, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self {
            title,
            visibility,
            content: content.filter(|c| !c.is_empty()),
        })
    }
}
