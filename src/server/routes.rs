use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use super::server::AppState;
use super::types::{ApiResponse, FilterParams, RatingRequest};
use crate::catalog::ModelRecord;
use crate::error::ArenaError;
use crate::filter::{select_visible, Category, FilterOption, FilterState, FILTER_OPTIONS};
use crate::rating::{find_attribute, RatingModal, RatingSubmission, RubricAttribute, RUBRIC};
use crate::render::{render_cards, DisplayNode};

type ApiResult<T> = (StatusCode, Json<ApiResponse<T>>);

impl From<FilterParams> for FilterState {
    fn from(params: FilterParams) -> Self {
        FilterState::new(
            Category::parse(params.category.as_deref().unwrap_or("all")),
            params.search.unwrap_or_default(),
        )
    }
}

fn ok<T>(data: T) -> ApiResult<T> {
    (StatusCode::OK, Json(ApiResponse::success(data)))
}

fn fail<T>(err: ArenaError) -> ApiResult<T> {
    let status = match err {
        ArenaError::ModelNotFound(_) => StatusCode::NOT_FOUND,
        ArenaError::UnknownAttribute(_) | ArenaError::DuplicateAttribute(_) => {
            StatusCode::BAD_REQUEST
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!("Request failed: {}", err);
    (status, Json(ApiResponse::error(err.to_string())))
}

/// Returns a health check response
pub async fn health_check() -> &'static str {
    info!("Health check endpoint called");
    "Model Arena is running!"
}

/// Returns the records visible under the query's category and search term.
pub async fn list_models(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> ApiResult<Vec<ModelRecord>> {
    let filter = FilterState::from(params);
    let models: Vec<ModelRecord> = select_visible(state.catalog.models(), &filter)
        .into_iter()
        .cloned()
        .collect();
    info!("Listing {} models for {:?}", models.len(), filter);
    ok(models)
}

pub async fn get_model(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<ModelRecord> {
    match state.catalog.get(id) {
        Ok(model) => ok(model.clone()),
        Err(e) => fail(e),
    }
}

/// Returns the rendered card region for the query's filter.
pub async fn get_cards(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> ApiResult<DisplayNode> {
    let filter = FilterState::from(params);
    ok(render_cards(&select_visible(state.catalog.models(), &filter)))
}

pub async fn list_filters() -> ApiResult<Vec<FilterOption>> {
    ok(FILTER_OPTIONS.to_vec())
}

pub async fn get_rubric() -> ApiResult<Vec<RubricAttribute>> {
    ok(RUBRIC.to_vec())
}

/// Accepts a finished rating and hands it to the submission sink.
///
/// Scores are clamped to 1-100 and the review is cut to the configured
/// maximum, the same way the interactive form does it.
pub async fn submit_rating(
    State(state): State<AppState>,
    Json(request): Json<RatingRequest>,
) -> ApiResult<RatingSubmission> {
    info!("Rating submission received for model {}", request.model_id);
    let model = match state.catalog.get(request.model_id) {
        Ok(model) => model,
        Err(e) => return fail(e),
    };

    let scores = match resolve_scores(&request.scores) {
        Ok(scores) => scores,
        Err(e) => return fail(e),
    };

    let mut modal = RatingModal::new(state.limits);
    modal.open(model);
    for (code, value) in scores {
        if let Err(e) = modal.set_score(code, value) {
            return fail(e);
        }
    }
    if let Err(e) = modal.set_review(&request.review) {
        return fail(e);
    }
    match modal.submit(state.sink.as_ref()) {
        Ok(submission) => (StatusCode::CREATED, Json(ApiResponse::success(submission))),
        Err(e) => fail(e),
    }
}

/// Maps request keys (codes or full names) to rubric codes.
///
/// Keys are visited in sorted order; a key that names an attribute
/// already given is rejected.
fn resolve_scores(
    scores: &HashMap<String, i64>,
) -> Result<Vec<(&'static str, i64)>, ArenaError> {
    let mut keys: Vec<&String> = scores.keys().collect();
    keys.sort();

    let mut resolved: Vec<(&'static str, i64)> = Vec::with_capacity(keys.len());
    for key in keys {
        let attr =
            find_attribute(key).ok_or_else(|| ArenaError::UnknownAttribute(key.clone()))?;
        if resolved.iter().any(|(code, _)| *code == attr.code) {
            return Err(ArenaError::DuplicateAttribute(attr.code.to_string()));
        }
        resolved.push((attr.code, scores[key]));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::rating::{MemorySink, RatingLimits, DEFAULT_REVIEW_MAX_CHARS};
    use crate::render::NodeKind;
    use std::sync::Arc;

    fn state(sink: Arc<MemorySink>) -> AppState {
        AppState {
            catalog: Arc::new(Catalog::embedded().unwrap()),
            sink,
            limits: RatingLimits::default(),
        }
    }

    fn params(category: Option<&str>, search: Option<&str>) -> Query<FilterParams> {
        Query(FilterParams {
            category: category.map(str::to_string),
            search: search.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_list_models_filters() {
        let state = state(Arc::new(MemorySink::new()));

        let (status, Json(all)) = list_models(State(state.clone()), params(None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.data.unwrap().len(), 6);

        let (_, Json(found)) = list_models(State(state), params(None, Some("CLAUDE"))).await;
        let found = found.data.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Claude 4 Sonnet");
    }

    #[tokio::test]
    async fn test_get_model_not_found() {
        let state = state(Arc::new(MemorySink::new()));
        let (status, Json(body)) = get_model(State(state), Path(77)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.status, "error");
        assert_eq!(body.message.unwrap(), "Model not found: 77");
    }

    #[tokio::test]
    async fn test_cards_placeholder() {
        let state = state(Arc::new(MemorySink::new()));
        let (_, Json(body)) = get_cards(State(state), params(Some("OpenAI"), Some("sonnet"))).await;
        let region = body.data.unwrap();
        assert_eq!(region.children.len(), 1);
        assert_eq!(region.children[0].kind, NodeKind::Placeholder);
    }

    #[tokio::test]
    async fn test_submit_rating_clamps_and_truncates() {
        let sink = Arc::new(MemorySink::new());
        let request = RatingRequest {
            model_id: 4,
            scores: HashMap::from([("RL".to_string(), 87), ("ES".to_string(), 400)]),
            review: "a".repeat(DEFAULT_REVIEW_MAX_CHARS + 1),
        };

        let (status, Json(body)) = submit_rating(State(state(sink.clone())), Json(request)).await;
        assert_eq!(status, StatusCode::CREATED);
        let submission = body.data.unwrap();
        assert_eq!(submission.score("RL"), Some(87));
        assert_eq!(submission.score("ES"), Some(100));
        assert_eq!(submission.score("CE"), Some(50));
        assert_eq!(submission.review.len(), DEFAULT_REVIEW_MAX_CHARS);
        assert_eq!(sink.submissions(), vec![submission]);
    }

    #[tokio::test]
    async fn test_submit_rating_rejects_unknown_attribute() {
        let sink = Arc::new(MemorySink::new());
        let request = RatingRequest {
            model_id: 1,
            scores: HashMap::from([("XX".to_string(), 10)]),
            review: String::new(),
        };
        let (status, _) = submit_rating(State(state(sink.clone())), Json(request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_submit_rating_rejects_same_attribute_twice() {
        let sink = Arc::new(MemorySink::new());
        let request = RatingRequest {
            model_id: 2,
            scores: HashMap::from([
                ("RL".to_string(), 10),
                ("Reasoning & Logic".to_string(), 90),
            ]),
            review: String::new(),
        };

        let (status, Json(body)) = submit_rating(State(state(sink.clone())), Json(request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message.unwrap(), "Rating attribute given more than once: RL");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_resolve_scores_accepts_codes_and_names() {
        let scores = HashMap::from([
            ("Safety & Alignment".to_string(), 70),
            ("cg".to_string(), 20),
        ]);
        let mut resolved = resolve_scores(&scores).unwrap();
        resolved.sort();
        assert_eq!(resolved, vec![("CG", 20), ("SA", 70)]);
    }
}
