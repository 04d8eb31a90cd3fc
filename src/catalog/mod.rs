mod catalog;
mod types;

pub use catalog::Catalog;
pub use types::{AttributeScore, ModelRecord, MAX_SCORE};
