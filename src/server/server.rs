use std::error::Error;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing::info;

use super::routes;
use crate::catalog::Catalog;
use crate::rating::{LogSink, RatingLimits, SubmissionSink};

/// State shared by every request. Nothing in it changes after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sink: Arc<dyn SubmissionSink>,
    pub limits: RatingLimits,
}

impl AppState {
    /// State whose submissions only go to the log. The server may share the
    /// terminal with the shell, so nothing is echoed to stdout.
    pub fn logging(catalog: Arc<Catalog>, limits: RatingLimits) -> Self {
        Self {
            catalog,
            sink: Arc::new(Self::log_sink()),
            limits,
        }
    }

    fn log_sink() -> LogSink {
        LogSink::new(false)
    }
}

/// JSON API over the catalog and the rating sink
pub struct ApiServer {
    state: AppState,
    host: String,
    port: u16,
}

impl ApiServer {
    pub fn new(state: AppState, host: String, port: u16) -> Self {
        info!("Creating new API server on {}:{}", host, port);
        Self { state, host, port }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(routes::health_check))
            .route("/api/v1/models", get(routes::list_models))
            .route("/api/v1/models/{id}", get(routes::get_model))
            .route("/api/v1/cards", get(routes::get_cards))
            .route("/api/v1/filters", get(routes::list_filters))
            .route("/api/v1/rubric", get(routes::get_rubric))
            .route("/api/v1/ratings", post(routes::submit_rating))
            .with_state(self.state.clone())
    }

    pub async fn start(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = self.router();

        info!("Starting server on {}:{}", self.host, self.port);
        let listener = TcpListener::bind((self.host.as_str(), self.port)).await?;

        info!("Server started successfully");
        axum::serve(listener, app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_sink_does_not_echo() {
        assert!(!AppState::log_sink().echo);
    }

    #[test]
    fn test_logging_state_keeps_catalog_and_limits() {
        let catalog = Arc::new(Catalog::embedded().unwrap());
        let limits = RatingLimits {
            review_max_chars: 10,
            default_score: 40,
        };
        let state = AppState::logging(Arc::clone(&catalog), limits);
        assert!(Arc::ptr_eq(&state.catalog, &catalog));
        assert_eq!(state.limits, limits);
    }
}
