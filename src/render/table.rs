use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use super::palette::{company_color, score_color, HexColor};
use crate::catalog::ModelRecord;

/// Builds a compact one-row-per-model listing.
pub fn models_table(models: &[&ModelRecord]) -> Table {
    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("#").fg(Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("Name").fg(Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("Company").fg(Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("Version").fg(Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("Overall").fg(Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("Ratings").fg(Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("Tags").fg(Color::Cyan).add_attribute(Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for model in models {
        table.add_row(vec![
            Cell::new(model.id).fg(Color::White).set_alignment(CellAlignment::Center),
            Cell::new(&model.name).fg(Color::Green),
            Cell::new(&model.company).fg(rgb(company_color(&model.company))),
            Cell::new(&model.version).fg(Color::DarkGrey),
            Cell::new(model.overall)
                .fg(rgb(score_color(model.overall)))
                .set_alignment(CellAlignment::Right),
            Cell::new(model.ratings).fg(Color::White).set_alignment(CellAlignment::Right),
            Cell::new(model.tags.join(", ")).fg(Color::Yellow),
        ]);
    }
    table
}

fn rgb(color: HexColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_one_row_per_model() {
        let catalog = Catalog::embedded().unwrap();
        let models: Vec<_> = catalog.models().iter().collect();
        let table = models_table(&models);
        assert_eq!(table.row_iter().count(), 6);
        let rendered = table.to_string();
        assert!(rendered.contains("Perplexity 70B"));
        assert!(rendered.contains("Coder, Multimodal"));
    }
}
