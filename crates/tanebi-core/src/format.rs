//! # Response Formatting
//!
//! Renders API responses as Markdown-like text for an AI agent.
//!
//! Every function here is pure. Body lines are ordered by `position`
//! with a stable sort, so ties keep the order the API sent them in.

use crate::types::{IdeaDetail, IdeaLine, IdeaListResponse, IdeaSummary, PaginationMeta};

/// Shown in place of the content section when an idea has no lines.
pub const NO_CONTENT_PLACEHOLDER: &str = "_No content yet._";

/// Prefix on the text returned by `create_idea`.
const CREATED_PREFIX: &str = "Idea created successfully!";

/// Five-line block describing one listing row.
pub fn format_idea_summary(idea: &IdeaSummary) -> String {
    format!(
        "## [{id}] {title}\n\
         Stage: {stage} | Visibility: {visibility}\n\
         Author: {author}\n\
         Reactions: {reactions} | Comments: {comments}\n\
         Created: {created}",
        id = idea.id,
        title = idea.title,
        stage = idea.current_stage,
        visibility = idea.visibility,
        author = idea.user.display_name,
        reactions = idea.reactions_count,
        comments = idea.comments_count,
        created = idea.created_at,
    )
}

/// Full idea: header block, content section, and reactions when present.
pub fn format_idea_detail(idea: &IdeaDetail) -> String {
    let mut sections = vec![format!(
        "# {title}\n\
         ID: {id}\n\
         Stage: {stage} | Visibility: {visibility}\n\
         Author: {author}\n\
         Reactions: {reactions}\n\
         Created: {created} | Updated: {updated}",
        title = idea.title,
        id = idea.id,
        stage = idea.current_stage,
        visibility = idea.visibility,
        author = idea.user.display_name,
        reactions = idea.reactions_count,
        created = idea.created_at,
        updated = idea.updated_at,
    )];

    if idea.lines.is_empty() {
        sections.push(NO_CONTENT_PLACEHOLDER.to_string());
    } else {
        let mut lines: Vec<&IdeaLine> = idea.lines.iter().collect();
        lines.sort_by_key(|line| line.position);
        let body: Vec<String> = lines.into_iter().map(format_line).collect();
        sections.push(format!("## Content\n\n{}", body.join("\n\n")));
    }

    if !idea.reactions.is_empty() {
        let bullets: Vec<String> = idea
            .reactions
            .iter()
            .map(|r| format!("- {} by {}", r.reaction_type, r.user.display_name))
            .collect();
        sections.push(format!("## Reactions\n\n{}", bullets.join("\n")));
    }

    sections.join("\n\n")
}

/// Listing page: summaries separated by blank lines plus a pagination footer.
pub fn format_idea_list(list: &IdeaListResponse) -> String {
    let body = if list.ideas.is_empty() {
        "No ideas found.".to_string()
    } else {
        list.ideas
            .iter()
            .map(format_idea_summary)
            .collect::<Vec<_>>()
            .join("\n\n")
    };
    format!("{body}\n\n---\n{}", pagination_footer(&list.meta))
}

/// Confirmation text for a freshly created idea.
pub fn format_idea_created(idea: &IdeaDetail) -> String {
    format!("{CREATED_PREFIX}\n\n{}", format_idea_detail(idea))
}

fn format_line(line: &IdeaLine) -> String {
    let mut text = if line.is_heading() {
        format!("### {}", line.content)
    } else {
        line.content.clone()
    };
    match line.comments_count {
        0 => {}
        1 => text.push_str(" _(1 comment)_"),
        n => text.push_str(&format!(" _({n} comments)_")),
    }
    text
}

fn pagination_footer(meta: &PaginationMeta) -> String {
    format!(
        "Page {} of {} ({} total ideas)",
        meta.current_page, meta.total_pages, meta.total_count
    )
}
