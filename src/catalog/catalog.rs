use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::types::ModelRecord;
use crate::error::{ArenaError, Result};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    models: Vec<ModelRecord>,
}

/// Read-only list of model records.
#[derive(Debug, Clone)]
pub struct Catalog {
    models: Vec<ModelRecord>,
}

impl Catalog {
    /// Builds a catalog from records, checking ids, score bounds and
    /// attribute codes.
    pub fn new(models: Vec<ModelRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for model in &models {
            if !seen.insert(model.id) {
                return Err(ArenaError::InvalidCatalog(format!(
                    "duplicate model id {}",
                    model.id
                )));
            }
            model.check_invariants().map_err(ArenaError::InvalidCatalog)?;
        }
        Ok(Self { models })
    }

    /// Parses a catalog from its JSON form (`{ "models": [...] }`).
    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: CatalogFile = serde_json::from_str(raw)?;
        Self::new(parsed.models)
    }

    /// The six-model catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Loads the catalog from `path` when given, otherwise the embedded one.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(path) => {
                info!("Loading catalog from {}", path.display());
                let content = fs::read_to_string(path)?;
                Self::from_json(&content)?
            }
            None => Self::embedded()?,
        };
        info!("Catalog loaded with {} models", catalog.len());
        Ok(catalog)
    }

    pub fn models(&self) -> &[ModelRecord] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Looks up a record by id.
    pub fn get(&self, id: u32) -> Result<&ModelRecord> {
        self.models
            .iter()
            .find(|m| m.id == id)
            .ok_or(ArenaError::ModelNotFound(id))
    }
}
