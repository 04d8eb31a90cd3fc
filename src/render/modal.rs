use super::node::{Action, DisplayNode, NodeKind};
use super::palette::score_color;
use crate::rating::{RatingDraft, RUBRIC};

/// Renders the rating form for an open draft.
pub fn render_rating_modal(draft: &RatingDraft) -> DisplayNode {
    let sliders = DisplayNode::new(NodeKind::Section)
        .child(DisplayNode::new(NodeKind::Title).text("Rate Attributes (1-100)"))
        .children(RUBRIC.iter().map(|attr| {
            let score = draft.score(attr.code).unwrap_or_default();
            DisplayNode::new(NodeKind::Slider)
                .text(attr.code)
                .width(score)
                .color(score_color(score))
                .action(Action::SetScore { code: attr.code })
                .child(DisplayNode::new(NodeKind::Label).text(attr.name))
                .child(DisplayNode::new(NodeKind::Description).text(attr.description))
                .child(
                    DisplayNode::new(NodeKind::Score)
                        .text(score.to_string())
                        .color(score_color(score)),
                )
        }));

    let review = DisplayNode::new(NodeKind::Section)
        .child(DisplayNode::new(NodeKind::Title).text("Write a Review (Optional)"))
        .child(DisplayNode::new(NodeKind::Description).text(draft.review()))
        .child(DisplayNode::new(NodeKind::CharCount).text(char_count(draft)));

    let actions = DisplayNode::new(NodeKind::Actions)
        .child(DisplayNode::new(NodeKind::Button).text("Cancel").action(Action::Cancel))
        .child(DisplayNode::new(NodeKind::Button).text("Submit Rating").action(Action::Submit));

    DisplayNode::new(NodeKind::Modal)
        .child(DisplayNode::new(NodeKind::Title).text(format!("Rate {}", draft.model_name())))
        .child(sliders)
        .child(review)
        .child(actions)
}

/// `"<len>/<max> characters"` for the review box.
pub fn char_count(draft: &RatingDraft) -> String {
    format!("{}/{} characters", draft.review_len(), draft.review_max_chars())
}
