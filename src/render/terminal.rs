use colored::*;

use super::node::{Action, DisplayNode, NodeKind};
use super::palette::HexColor;

/// Cells used by a full (100) bar
const BAR_CELLS: usize = 20;

/// Paints a display tree as coloured terminal text.
pub fn paint(node: &DisplayNode) -> String {
    let mut out = String::new();
    paint_into(node, &mut out);
    out
}

fn paint_into(node: &DisplayNode, out: &mut String) {
    match node.kind {
        NodeKind::Region => {
            for child in &node.children {
                paint_into(child, out);
                out.push('\n');
            }
        }
        NodeKind::Placeholder => {
            out.push_str(&format!("{}\n", tint(node.text_or_empty(), node.color).italic()));
        }
        NodeKind::FilterBar => {
            let buttons: Vec<String> = node.children.iter().map(paint_filter_button).collect();
            out.push_str(&format!("{}\n", buttons.join(" ")));
        }
        NodeKind::Card => paint_card(node, out),
        NodeKind::Modal => paint_modal(node, out),
        _ => {
            out.push_str(node.text_or_empty());
            out.push('\n');
        }
    }
}

fn paint_filter_button(button: &DisplayNode) -> String {
    let label = format!("[{}]", button.text_or_empty());
    if button.active {
        label.black().on_bright_green().bold().to_string()
    } else {
        label.bright_black().to_string()
    }
}

fn paint_card(card: &DisplayNode, out: &mut String) {
    out.push_str(&format!("{}\n", "─".repeat(60).bright_black()));
    for part in &card.children {
        match part.kind {
            NodeKind::Header => {
                let name = part.first(NodeKind::Name).map(|n| n.text_or_empty()).unwrap_or("");
                let company = part
                    .first(NodeKind::Company)
                    .map(|c| tint(c.text_or_empty(), c.color).to_string())
                    .unwrap_or_default();
                let overall = part
                    .first(NodeKind::Overall)
                    .map(|o| {
                        let label = o
                            .first(NodeKind::Label)
                            .map(|l| l.text_or_empty())
                            .unwrap_or("");
                        format!(
                            "{} {}",
                            tint(o.text_or_empty(), o.color).bold(),
                            label.bright_black()
                        )
                    })
                    .unwrap_or_default();
                out.push_str(&format!("{}  {}  {}\n", name.bold(), company, overall));
            }
            NodeKind::Description => {
                out.push_str(&format!("  {}\n", part.text_or_empty()));
            }
            NodeKind::AttributeBars => {
                for bar in &part.children {
                    let score = bar.first(NodeKind::Score).map(|s| s.text_or_empty()).unwrap_or("");
                    out.push_str(&format!(
                        "  {:<3} {} {:>3}\n",
                        bar.text_or_empty().cyan(),
                        bar_cells(bar.width.unwrap_or(0), None),
                        score
                    ));
                }
            }
            NodeKind::Tags => {
                let tags: Vec<String> = part
                    .children
                    .iter()
                    .map(|t| format!("#{}", t.text_or_empty()).yellow().to_string())
                    .collect();
                out.push_str(&format!("  {}\n", tags.join(" ")));
            }
            NodeKind::Actions => {
                let buttons: Vec<String> = part.children.iter().map(paint_button).collect();
                out.push_str(&format!("  {}\n", buttons.join("  ")));
            }
            _ => paint_into(part, out),
        }
    }
}

fn paint_modal(modal: &DisplayNode, out: &mut String) {
    out.push_str(&format!("{}\n", "═".repeat(60).bright_cyan()));
    for part in &modal.children {
        match part.kind {
            NodeKind::Title => {
                out.push_str(&format!("{}\n", part.text_or_empty().bold().bright_cyan()));
            }
            NodeKind::Section => {
                for row in &part.children {
                    match row.kind {
                        NodeKind::Title => {
                            out.push_str(&format!("\n{}\n", row.text_or_empty().underline()));
                        }
                        NodeKind::Slider => {
                            let name = row
                                .first(NodeKind::Label)
                                .map(|l| l.text_or_empty())
                                .unwrap_or("");
                            let score = row
                                .first(NodeKind::Score)
                                .map(|s| tint(s.text_or_empty(), s.color).bold().to_string())
                                .unwrap_or_default();
                            out.push_str(&format!(
                                "  {:<3} {:<24} {} {:>3}\n",
                                row.text_or_empty().cyan(),
                                name,
                                bar_cells(row.width.unwrap_or(0), row.color),
                                score
                            ));
                        }
                        NodeKind::Description if row.text_or_empty().is_empty() => {
                            out.push_str(&format!("  {}\n", "(no review yet)".bright_black()));
                        }
                        NodeKind::Description => {
                            out.push_str(&format!("  {}\n", row.text_or_empty()));
                        }
                        NodeKind::CharCount => {
                            out.push_str(&format!("{:>60}\n", row.text_or_empty().bright_black()));
                        }
                        _ => paint_into(row, out),
                    }
                }
            }
            NodeKind::Actions => {
                let buttons: Vec<String> = part.children.iter().map(paint_button).collect();
                out.push_str(&format!("\n  {}\n", buttons.join("  ")));
            }
            _ => paint_into(part, out),
        }
    }
    out.push_str(&format!("{}\n", "═".repeat(60).bright_cyan()));
}

/// Buttons show the shell command that triggers them.
fn paint_button(button: &DisplayNode) -> String {
    let hint = match &button.action {
        Some(Action::Rate { model_id }) => format!("rate {}", model_id),
        Some(Action::Details { model_id }) => format!("details {}", model_id),
        Some(Action::Filter { category }) => format!("filter {}", category),
        Some(Action::SetScore { code }) => format!("set {} <1-100>", code),
        Some(Action::Submit) => "submit".to_string(),
        Some(Action::Cancel) => "cancel".to_string(),
        None => String::new(),
    };
    format!("[{}: {}]", button.text_or_empty().bold(), hint.green())
}

fn bar_cells(width: u8, color: Option<HexColor>) -> String {
    let filled = (usize::from(width.min(100)) * BAR_CELLS + 50) / 100;
    let fill = "█".repeat(filled);
    let rest = "░".repeat(BAR_CELLS - filled);
    let fill = match color {
        Some(color) => tint(&fill, Some(color)).to_string(),
        None => fill.bright_magenta().to_string(),
    };
    format!("{}{}", fill, rest.bright_black())
}

fn tint(text: &str, color: Option<HexColor>) -> ColoredString {
    match color {
        Some(color) => {
            let (r, g, b) = color.rgb();
            text.truecolor(r, g, b)
        }
        None => text.normal(),
    }
}
