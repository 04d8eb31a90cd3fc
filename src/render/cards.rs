use super::node::{Action, DisplayNode, NodeKind};
use super::palette::{company_color, score_color, MUTED};
use crate::catalog::ModelRecord;
use crate::filter::{Category, FILTER_OPTIONS};

/// Cards show at most this many attribute bars
pub const CARD_ATTRIBUTES: usize = 4;
/// Descriptions longer than this are cut on cards
pub const DESCRIPTION_MAX_CHARS: usize = 120;
pub const NO_RESULTS: &str = "No results found.";
pub const DETAILS_NOT_IMPLEMENTED: &str = "Details view is not implemented yet.";

/// Renders the card grid for already-filtered models.
///
/// The returned region replaces whatever was shown before. An empty
/// slice renders a single placeholder.
pub fn render_cards(models: &[&ModelRecord]) -> DisplayNode {
    let region = DisplayNode::new(NodeKind::Region);
    if models.is_empty() {
        return region.child(DisplayNode::new(NodeKind::Placeholder).text(NO_RESULTS).color(MUTED));
    }
    region.children(models.iter().map(|model| render_card(model)))
}

/// Renders one model card.
pub fn render_card(model: &ModelRecord) -> DisplayNode {
    let header = DisplayNode::new(NodeKind::Header)
        .child(DisplayNode::new(NodeKind::Name).text(&model.name))
        .child(
            DisplayNode::new(NodeKind::Company)
                .text(&model.company)
                .color(company_color(&model.company)),
        )
        .child(
            DisplayNode::new(NodeKind::Overall)
                .text(model.overall.to_string())
                .color(score_color(model.overall))
                .child(DisplayNode::new(NodeKind::Label).text("overall")),
        );

    let bars = DisplayNode::new(NodeKind::AttributeBars).children(
        model.attributes.iter().take(CARD_ATTRIBUTES).map(|attr| {
            DisplayNode::new(NodeKind::AttributeBar)
                .text(&attr.code)
                .width(attr.score)
                .child(DisplayNode::new(NodeKind::Label).text(&attr.name))
                .child(DisplayNode::new(NodeKind::Score).text(attr.score.to_string()))
        }),
    );

    let tags = DisplayNode::new(NodeKind::Tags)
        .children(model.tags.iter().map(|tag| DisplayNode::new(NodeKind::Tag).text(tag)));

    let actions = DisplayNode::new(NodeKind::Actions)
        .child(
            DisplayNode::new(NodeKind::Button)
                .text("Rate Model")
                .action(Action::Rate { model_id: model.id }),
        )
        .child(
            DisplayNode::new(NodeKind::Button)
                .text("View Details")
                .action(Action::Details { model_id: model.id }),
        );

    DisplayNode::new(NodeKind::Card)
        .child(header)
        .child(
            DisplayNode::new(NodeKind::Description)
                .text(truncate_description(&model.description)),
        )
        .child(bars)
        .child(tags)
        .child(actions)
}

/// Renders the filter bar with the button for `active` highlighted.
pub fn render_filter_bar(active: &Category) -> DisplayNode {
    DisplayNode::new(NodeKind::FilterBar).children(FILTER_OPTIONS.iter().map(|option| {
        DisplayNode::new(NodeKind::FilterButton)
            .text(option.label)
            .action(Action::Filter {
                category: option.id.to_string(),
            })
            .active(option.is_active(active))
    }))
}

/// Cuts `text` to `DESCRIPTION_MAX_CHARS` characters, appending an ellipsis when cut.
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_MAX_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(DESCRIPTION_MAX_CHARS - 1).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::render::palette::{GREEN, PURPLE};

    #[test]
    fn test_card_structure() {
        let catalog = Catalog::embedded().unwrap();
        let card = render_card(catalog.get(2).unwrap());

        let header = card.first(NodeKind::Header).unwrap();
        assert_eq!(header.first(NodeKind::Name).unwrap().text_or_empty(), "Claude 4 Sonnet");
        let company = header.first(NodeKind::Company).unwrap();
        assert_eq!(company.color, Some(PURPLE));
        let overall = header.first(NodeKind::Overall).unwrap();
        assert_eq!(overall.text_or_empty(), "89");
        assert_eq!(overall.color, Some(GREEN));

        let bars = card.find_all(NodeKind::AttributeBar);
        assert_eq!(bars.len(), CARD_ATTRIBUTES);
        let codes: Vec<&str> = bars.iter().map(|b| b.text_or_empty()).collect();
        assert_eq!(codes, vec!["RL", "CG", "KI", "AL"]);
        assert_eq!(bars[0].width, Some(93));

        let tags: Vec<&str> = card
            .find_all(NodeKind::Tag)
            .iter()
            .map(|t| t.text_or_empty())
            .collect();
        assert_eq!(tags, vec!["General Assistant", "Academic"]);

        let actions: Vec<_> = card
            .find_all(NodeKind::Button)
            .iter()
            .filter_map(|b| b.action.clone())
            .collect();
        assert_eq!(
            actions,
            vec![Action::Rate { model_id: 2 }, Action::Details { model_id: 2 }]
        );
    }

    #[test]
    fn test_empty_selection_renders_placeholder() {
        let region = render_cards(&[]);
        assert_eq!(region.children.len(), 1);
        assert_eq!(region.children[0].kind, NodeKind::Placeholder);
        assert_eq!(region.children[0].text_or_empty(), NO_RESULTS);
    }

    #[test]
    fn test_unknown_company_uses_fallback_color() {
        let mut model = Catalog::embedded().unwrap().get(6).unwrap().clone();
        model.company = "Acme".into();
        let card = render_card(&model);
        assert_eq!(card.find_all(NodeKind::Company)[0].color, Some(MUTED));
    }

    #[test]
    fn test_long_description_is_truncated() {
        let long = "x".repeat(DESCRIPTION_MAX_CHARS + 10);
        let cut = truncate_description(&long);
        assert_eq!(cut.chars().count(), DESCRIPTION_MAX_CHARS);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_description("short"), "short");
    }

    #[test]
    fn test_filter_bar_marks_active() {
        let bar = render_filter_bar(&Category::parse("anthropic"));
        let active: Vec<&str> = bar
            .children
            .iter()
            .filter(|b| b.active)
            .map(|b| b.text_or_empty())
            .collect();
        assert_eq!(active, vec!["Anthropic"]);
        assert_eq!(bar.children.len(), 8);
    }
}
