//! # Tanebi MCP Server
//!
//! Implements `ServerHandler` with 3 MCP tools that proxy to the Tanebi HTTP API.
//!
//! Arguments are checked against `tanebi_core::params` before the client is
//! touched, so a rejected call never reaches the network.

use crate::client::{ClientError, TanebiClient};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router,
};
use serde::Deserialize;
use tanebi_core::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, IdeaId, ListQuery, NewIdea, ValidationError, Visibility,
    format_idea_created, format_idea_detail, format_idea_list,
};

// =============================================================================
// MCP SERVER
// =============================================================================

/// MCP server that bridges to the Tanebi HTTP API.
#[derive(Clone)]
pub struct TanebiMcp {
    client: TanebiClient,
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

// =============================================================================
// TOOL PARAMETER STRUCTS
// =============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListIdeasParams {
    /// Page number (default: 1).
    #[serde(default = "default_page")]
    #[schemars(description = "Page number, starting at 1")]
    #[schemars(range(min = 1))]
    pub page: u32,
    /// Ideas per page (default: 20, max: 100).
    #[serde(default = "default_per_page")]
    #[schemars(description = "Number of ideas per page, at most 100")]
    #[schemars(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl Default for ListIdeasParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetIdeaParams {
    /// The idea ID.
    #[schemars(description = "The ID of the idea to fetch")]
    #[schemars(range(min = 1))]
    pub idea_id: u64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateIdeaParams {
    /// Idea title.
    #[schemars(description = "Title of the new idea")]
    #[schemars(length(min = 1))]
    pub title: String,
    /// Optional body text.
    #[schemars(description = "Body text of the idea (optional)")]
    pub content: Option<String>,
    /// Who can see the new idea.
    #[serde(default)]
    pub visibility: Visibility,
}

// =============================================================================
// TOOL IMPLEMENTATIONS
// =============================================================================

#[tool_router]
impl TanebiMcp {
    pub fn new(client: TanebiClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "List ideas on Tanebi, newest first, one page at a time")]
    async fn list_ideas(
        &self,
        params: Parameters<ListIdeasParams>,
    ) -> Result<CallToolResult, McpError> {
        let ListIdeasParams { page, per_page } = params.0;
        let query = ListQuery::new(page, per_page).map_err(invalid_params)?;
        match self.client.list_ideas(&query).await {
            Ok(list) => Ok(CallToolResult::success(vec![Content::text(
                format_idea_list(&list),
            )])),
            Err(e) => Ok(tool_failure("list_ideas", e)),
        }
    }

    #[tool(description = "Get an idea with its full content and reactions")]
    async fn get_idea(
        &self,
        params: Parameters<GetIdeaParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = IdeaId::new(params.0.idea_id).map_err(invalid_params)?;
        match self.client.get_idea(id).await {
            Ok(idea) => Ok(CallToolResult::success(vec![Content::text(
                format_idea_detail(&idea),
            )])),
            Err(e) => Ok(tool_failure("get_idea", e)),
        }
    }

    #[tool(description = "Create a new idea on Tanebi")]
    async fn create_idea(
        &self,
        params: Parameters<CreateIdeaParams>,
    ) -> Result<CallToolResult, McpError> {
        let CreateIdeaParams {
            title,
            content,
            visibility,
        } = params.0;
        let new_idea = NewIdea::new(title, content, visibility).map_err(invalid_params)?;
        match self.client.create_idea(&new_idea).await {
            Ok(idea) => Ok(CallToolResult::success(vec![Content::text(
                format_idea_created(&idea),
            )])),
            Err(e) => Ok(tool_failure("create_idea", e)),
        }
    }
}

// =============================================================================
// SERVER HANDLER
// =============================================================================

#[tool_handler]
impl ServerHandler for TanebiMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Tanebi idea server. Use list_ideas to browse, get_idea to read an \
                 idea with its content and reactions, and create_idea to post a new one."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

fn invalid_params(e: ValidationError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

/// API and network failures are reported as a tool result with
/// `isError: true` so the host hands the message to the model.
fn tool_failure(tool: &str, e: ClientError) -> CallToolResult {
    tracing::warn!(tool, error = %e, "Tool call failed");
    CallToolResult::error(vec![Content::text(e.to_string())])
}
