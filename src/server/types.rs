use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Query string accepted by the listing endpoints
#[derive(Debug, Deserialize, Default)]
pub struct FilterParams {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Body of a rating submission
#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    pub model_id: u32,
    /// Attribute code to score; missing codes keep the default score
    #[serde(default)]
    pub scores: HashMap<String, i64>,
    #[serde(default)]
    pub review: String,
}
