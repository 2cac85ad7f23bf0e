//! # tanebi-core
//!
//! The logic behind the Tanebi MCP bridge.
//!
//! This crate knows the shapes the Tanebi API returns and how to render
//! them as Markdown-like text for an AI agent. It also owns the validated
//! input types each tool accepts, so bounds are checked before any request
//! is built.
//!
//! ## Architectural Constraints
//!
//! - NO async, NO network dependencies (pure Rust)
//! - Formatters are pure: identical input produces identical text
//! - Nothing is persisted; every value is request-scoped

// =============================================================================
// MODULES
// =============================================================================

pub mod format;
pub mod params;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use format::{
    NO_CONTENT_PLACEHOLDER, format_idea_created, format_idea_detail, format_idea_list,
    format_idea_summary,
};
pub use params::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, IdeaId, ListQuery, MAX_PER_PAGE, NewIdea, ValidationError,
};
pub use types::{
    IdeaDetail, IdeaEnvelope, IdeaLine, IdeaListResponse, IdeaSummary, PaginationMeta, Reaction,
    SimplifiedUser, Visibility,
};
