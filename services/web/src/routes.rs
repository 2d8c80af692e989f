use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Extension;
use axum::Json;
use chrono::{Datelike, Local};
use sav_clan::recruitment::{recruitment_router, RecruitmentService};
use sav_clan::site;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_site_routes(service: Arc<RecruitmentService>) -> axum::Router {
    recruitment_router(service)
        .route("/", axum::routing::get(page_endpoint))
        .route("/assets/*asset", axum::routing::get(asset_endpoint))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn page_endpoint() -> Html<String> {
    Html(site::page::render_page(Local::now().year()))
}

pub(crate) async fn asset_endpoint(Path(asset): Path<String>) -> impl IntoResponse {
    match site::assets::lookup(&asset) {
        Some(bytes) => {
            let mime = mime_guess::from_path(&asset).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.to_string())],
                bytes,
            )
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
