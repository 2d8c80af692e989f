use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use tower::ServiceExt;

use crate::recruitment::router;

#[tokio::test]
async fn submit_route_returns_the_receipt() {
    let (service, clipboard) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/recruitment/applications")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&valid_draft()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;

    assert_eq!(
        payload["result"]["message"],
        json!("Your application is ready.")
    );
    assert_eq!(payload["handoff"]["notification"]["outcome"], json!("copied"));
    assert_eq!(
        payload["handoff"]["group_link"],
        json!(crate::recruitment::GROUP_CHAT_URL)
    );
    let message = payload["handoff"]["message"]
        .as_str()
        .expect("message is text");
    assert!(message.contains("NightReaper"));
    assert_eq!(clipboard.writes().len(), 1);
}

#[tokio::test]
async fn submit_route_reports_every_field_error() {
    let (service, clipboard) = build_service();
    let router = router_with_service(service);

    let mut draft = valid_draft();
    draft.level = "abc".to_string();
    draft.rank = None;

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/recruitment/applications")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&draft).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["errors"]["level"], json!("must be a number"));
    assert_eq!(payload["errors"]["rank"], json!("select your rank"));
    assert!(
        clipboard.writes().is_empty(),
        "rejected drafts must not reach the clipboard"
    );
}

#[tokio::test]
async fn submit_handler_accepts_direct_calls() {
    let (service, _clipboard) = build_service();

    let response = router::submit_handler(State(service), axum::Json(valid_draft()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn ranks_route_lists_the_closed_tier_set_in_order() {
    let (service, _clipboard) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/recruitment/ranks")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let ranks = payload["ranks"].as_array().expect("ranks array");
    assert_eq!(ranks.len(), 6);
    assert_eq!(ranks[0]["slug"], json!("pro"));
    assert_eq!(ranks[5]["slug"], json!("mitico-top-global"));
    assert_eq!(ranks[5]["label"], json!("Mítico Top Global"));
}
