use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Upper bound of every score in the catalog and in ratings.
pub const MAX_SCORE: u8 = 100;

/// One scored attribute shown on a model card.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AttributeScore {
    /// Short code (e.g. "RL")
    pub code: String,
    /// Human-readable name (e.g. "Reasoning & Logic")
    pub name: String,
    /// Score on the 0-100 scale
    pub score: u8,
}

/// Represents one rated model in the catalog.
///
/// Records are created once when the catalog loads and never change
/// afterwards. The attribute list keeps the order of the source file,
/// cards show the first four entries.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ModelRecord {
    /// Unique identifier within the catalog
    pub id: u32,
    /// Display name of the model
    pub name: String,
    /// Company that publishes the model (e.g. "OpenAI", "Anthropic")
    pub company: String,
    /// Version label (a date or "Latest")
    pub version: String,
    /// Short description shown on the card
    pub description: String,
    /// Overall score on the 0-100 scale
    pub overall: u8,
    /// Number of ratings the overall score is based on
    pub ratings: u32,
    /// Opaque avatar reference
    pub avatar: String,
    /// Attribute scores in display order
    pub attributes: Vec<AttributeScore>,
    /// Tags in display order
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ModelRecord {
    /// Checks score bounds and that no attribute code appears twice.
    pub(crate) fn check_invariants(&self) -> Result<(), String> {
        if self.overall > MAX_SCORE {
            return Err(format!(
                "model {} has overall score {} (must be 0-{})",
                self.id, self.overall, MAX_SCORE
            ));
        }
        if let Some(attr) = self.attributes.iter().find(|a| a.score > MAX_SCORE) {
            return Err(format!(
                "model {} attribute {} has score {} (must be 0-{})",
                self.id, attr.code, attr.score, MAX_SCORE
            ));
        }
        let mut codes = HashSet::new();
        if let Some(attr) = self.attributes.iter().find(|a| !codes.insert(a.code.as_str())) {
            return Err(format!(
                "model {} has duplicate attribute code {}",
                self.id, attr.code
            ));
        }
        Ok(())
    }
}
