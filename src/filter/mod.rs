mod filter;
mod types;

pub use filter::{matches_category, matches_search, select_visible};
pub use types::{Category, FilterOption, FilterState, FILTER_OPTIONS};
