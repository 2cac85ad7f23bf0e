//! # Property-Based Tests
//!
//! Ordering and determinism invariants of the idea formatters.

use proptest::collection::vec;
use proptest::prelude::*;
use tanebi_core::{
    IdeaDetail, IdeaLine, NO_CONTENT_PLACEHOLDER, SimplifiedUser, format_idea_detail,
};

// =============================================================================
// HELPERS
// =============================================================================

fn idea_with_lines(lines: Vec<IdeaLine>) -> IdeaDetail {
    IdeaDetail {
        id: 1,
        title: "Prop".to_string(),
        visibility: "public".to_string(),
        current_stage: "seed".to_string(),
        reactions_count: 0,
        is_bookmarked: false,
        created_at: "c".to_string(),
        updated_at: "u".to_string(),
        user: SimplifiedUser {
            id: 1,
            display_name: "Tester".to_string(),
            avatar_path: None,
        },
        lines,
        reactions: vec![],
    }
}

/// Lines with unique positions; content encodes the position so the
/// rendered order can be checked directly.
fn lines_from_positions(positions: &[i64]) -> Vec<IdeaLine> {
    positions
        .iter()
        .enumerate()
        .map(|(i, &pos)| IdeaLine {
            id: i as u64,
            line_type: "paragraph".to_string(),
            content: format!("line-at-{pos}"),
            position: pos,
            comments_count: 0,
            created_at: String::new(),
            updated_at: String::new(),
        })
        .collect()
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Content renders in ascending position order regardless of input order.
    #[test]
    fn lines_render_in_position_order(
        positions in proptest::sample::subsequence((0i64..200).collect::<Vec<_>>(), 1..30)
            .prop_shuffle()
    ) {
        let text = format_idea_detail(&idea_with_lines(lines_from_positions(&positions)));

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        let expected: Vec<String> = sorted.iter().map(|p| format!("line-at-{p}")).collect();
        let expected_section = format!("## Content\n\n{}", expected.join("\n\n"));
        prop_assert!(text.contains(&expected_section));
    }

    /// Rendering is independent of the order lines arrive in.
    #[test]
    fn permutations_render_identically(
        positions in proptest::sample::subsequence((0i64..100).collect::<Vec<_>>(), 0..20),
        seed in any::<u64>(),
    ) {
        let forward = lines_from_positions(&positions);
        let mut rotated = forward.clone();
        if !rotated.is_empty() {
            let by = (seed % rotated.len() as u64) as usize;
            rotated.rotate_left(by);
        }
        rotated.reverse();

        prop_assert_eq!(
            format_idea_detail(&idea_with_lines(forward)),
            format_idea_detail(&idea_with_lines(rotated))
        );
    }

    /// Same input always produces identical text.
    #[test]
    fn formatting_is_deterministic(
        contents in vec("[a-z ]{0,12}", 0..10),
        heading_mask in any::<u16>(),
    ) {
        let lines: Vec<IdeaLine> = contents
            .iter()
            .enumerate()
            .map(|(i, c)| IdeaLine {
                id: i as u64,
                line_type: if heading_mask & (1 << (i % 16)) != 0 { "heading" } else { "paragraph" }
                    .to_string(),
                content: c.clone(),
                position: (contents.len() - i) as i64,
                comments_count: i as u64,
                created_at: String::new(),
                updated_at: String::new(),
            })
            .collect();
        let idea = idea_with_lines(lines);
        prop_assert_eq!(format_idea_detail(&idea), format_idea_detail(&idea.clone()));
    }

    /// Empty bodies always get the placeholder and never a content heading.
    #[test]
    fn empty_body_uses_placeholder(title in "[A-Za-z]{1,20}") {
        let mut idea = idea_with_lines(vec![]);
        idea.title = title;
        let text = format_idea_detail(&idea);
        prop_assert!(text.contains(NO_CONTENT_PLACEHOLDER));
        prop_assert!(!text.contains("## Content"));
    }
}
