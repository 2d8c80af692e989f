use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde_json::json;

use crate::error::AppError;

use super::domain::{ApplicationDraft, RankTier};
use super::service::{CompletedSubmission, RecruitmentService};

/// Router builder exposing the recruitment HTTP endpoints.
pub fn recruitment_router(service: Arc<RecruitmentService>) -> Router {
    Router::new()
        .route("/api/v1/recruitment/applications", post(submit_handler))
        .route("/api/v1/recruitment/ranks", get(ranks_handler))
        .with_state(service)
}

pub(crate) async fn submit_handler(
    State(service): State<Arc<RecruitmentService>>,
    axum::Json(draft): axum::Json<ApplicationDraft>,
) -> Result<axum::Json<CompletedSubmission>, AppError> {
    let completed = service.submit(draft)?;
    Ok(axum::Json(completed))
}

/// Ordered closed tier set backing the form's rank select.
pub(crate) async fn ranks_handler() -> axum::Json<serde_json::Value> {
    let ranks: Vec<serde_json::Value> = RankTier::ALL
        .iter()
        .map(|tier| json!({ "slug": tier.slug(), "label": tier.label() }))
        .collect();
    axum::Json(json!({ "ranks": ranks }))
}
