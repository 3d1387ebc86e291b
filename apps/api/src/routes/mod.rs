pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::gaps::handlers as gaps;
use crate::recommendation::handlers as recommendation;
use crate::scoring::handlers as scoring;
use crate::state::AppState;
use crate::taxonomy::handlers as taxonomy;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching pipeline
        .route("/api/v1/score", post(scoring::handle_score))
        .route("/api/v1/gaps", post(gaps::handle_gaps))
        .route("/api/v1/recommend", post(recommendation::handle_recommend))
        .route("/api/v1/resources", get(recommendation::handle_resources))
        // Taxonomy
        .route("/api/v1/taxonomy/normalize", post(taxonomy::handle_normalize))
        .route("/api/v1/taxonomy/extract", post(taxonomy::handle_extract))
        .route("/api/v1/taxonomy/lookup", get(taxonomy::handle_lookup))
        .route("/api/v1/taxonomy/search", get(taxonomy::handle_search))
        .with_state(state)
}
