use super::types::{Category, FilterState};
use crate::catalog::ModelRecord;

/// Tag fragment that puts a record into the `coding` category.
const CODING_TAG: &str = "coder";

/// Returns true if `model` belongs to `category`.
pub fn matches_category(model: &ModelRecord, category: &Category) -> bool {
    match category {
        Category::All => true,
        Category::Coding => model
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(CODING_TAG)),
        Category::Company(company) => model.company.to_lowercase() == company.to_lowercase(),
    }
}

/// Returns true if the search term occurs in the name, company,
/// description or any tag of `model`. An empty term matches everything.
pub fn matches_search(model: &ModelRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    model.name.to_lowercase().contains(&term)
        || model.company.to_lowercase().contains(&term)
        || model.description.to_lowercase().contains(&term)
        || model.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
}

/// Selects the records visible under `filter`, in catalog order.
///
/// An empty result is not an error; the renderer shows a placeholder.
pub fn select_visible<'a>(
    catalog: &'a [ModelRecord],
    filter: &FilterState,
) -> Vec<&'a ModelRecord> {
    catalog
        .iter()
        .filter(|model| {
            matches_category(model, &filter.category) && matches_search(model, &filter.search)
        })
        .collect()
}
