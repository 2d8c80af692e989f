//! Integration specifications for the recruitment intake and hand-off flow.
//!
//! Scenarios drive the public session, service, and router surfaces end to
//! end, without reaching into private modules: a draft is edited, validated,
//! completed, formatted, and dispatched the way the web front-end does it.

mod common {
    use std::sync::{Arc, Mutex};

    use sav_clan::recruitment::{
        ApplicationDraft, ClipboardError, ClipboardGateway, RankTier, RecruitmentService,
        ValidationPolicy, GROUP_CHAT_URL,
    };

    pub(super) fn policy() -> ValidationPolicy {
        ValidationPolicy::default()
    }

    pub(super) fn draft() -> ApplicationDraft {
        ApplicationDraft {
            in_game_name: "ShadowVolt".to_string(),
            player_id: "90211345".to_string(),
            level: "71".to_string(),
            rank: Some(RankTier::GranMaestro),
            kd_battle_royale: "3.6".to_string(),
            kd_battle_escalation: "2.9".to_string(),
            age: "23".to_string(),
            has_whatsapp: true,
            is_available: true,
            accepts_content_terms: true,
            message: String::new(),
        }
    }

    #[derive(Debug, Default, Clone)]
    pub(super) struct MemoryClipboard {
        writes: Arc<Mutex<Vec<String>>>,
    }

    impl MemoryClipboard {
        pub(super) fn writes(&self) -> Vec<String> {
            self.writes.lock().expect("clipboard mutex poisoned").clone()
        }
    }

    impl ClipboardGateway for MemoryClipboard {
        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.writes
                .lock()
                .expect("clipboard mutex poisoned")
                .push(text.to_string());
            Ok(())
        }
    }

    #[derive(Debug, Clone, Copy)]
    pub(super) struct OfflineClipboard;

    impl ClipboardGateway for OfflineClipboard {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display server".to_string()))
        }
    }

    pub(super) fn service_with_memory_clipboard() -> (Arc<RecruitmentService>, MemoryClipboard) {
        let clipboard = MemoryClipboard::default();
        let service =
            RecruitmentService::new(Box::new(clipboard.clone()), policy(), GROUP_CHAT_URL);
        (Arc::new(service), clipboard)
    }
}

use common::*;
use sav_clan::recruitment::{
    handoff_message, recruitment_router, HandoffDispatcher, HandoffNotification,
    RecruitmentService, RecruitmentSession, SubmissionError, SubmissionState, GROUP_CHAT_URL,
};
use serde_json::json;
use tower::ServiceExt;

#[test]
fn session_walks_editing_to_completed_and_formats_once_per_field() {
    let mut session = RecruitmentSession::new(policy());
    assert_eq!(session.state(), &SubmissionState::Editing);

    session.edit(draft()).expect("session accepts the draft");
    let result = session.submit().expect("qualified draft completes");
    assert_eq!(session.state().label(), "completed");

    let message = handoff_message(&result.application);
    for value in ["ShadowVolt", "90211345", "71", "23", "3.6", "2.9"] {
        assert_eq!(message.matches(value).count(), 1);
    }
    assert!(message.contains("*Rank:* Gran Maestro"));
    assert!(message.contains("*Message:* N/A"));

    match session.submit() {
        Err(SubmissionError::AlreadyCompleted) => {}
        other => panic!("completed sessions must not retry, got {other:?}"),
    }
}

#[test]
fn rejected_draft_keeps_the_session_editable() {
    let mut rejected = draft();
    rejected.kd_battle_royale = "2.99".to_string();

    let mut session = RecruitmentSession::new(policy());
    session.edit(rejected).expect("session accepts the draft");
    assert!(session.submit().is_err());
    assert_eq!(session.state(), &SubmissionState::Editing);
    assert_eq!(session.errors().len(), 1);

    session.edit(draft()).expect("still editable after rejection");
    assert!(session.submit().is_ok());
}

#[test]
fn service_dispatch_places_the_message_on_the_clipboard() {
    let (service, clipboard) = service_with_memory_clipboard();

    let completed = service.submit(draft()).expect("submission completes");

    assert_eq!(completed.handoff.notification, HandoffNotification::Copied);
    assert_eq!(clipboard.writes(), vec![completed.handoff.message.clone()]);
}

#[test]
fn clipboard_outage_still_opens_the_group_channel() {
    let service =
        RecruitmentService::new(Box::new(OfflineClipboard), policy(), GROUP_CHAT_URL);

    let completed = service.submit(draft()).expect("submission completes");

    assert!(matches!(
        completed.handoff.notification,
        HandoffNotification::CopyFailed { .. }
    ));
    assert_eq!(completed.handoff.group_link, GROUP_CHAT_URL);

    let dispatcher = HandoffDispatcher::new(Box::new(OfflineClipboard), GROUP_CHAT_URL);
    let again = dispatcher.dispatch(&completed.result.application);
    assert_eq!(again.message, completed.handoff.message);
}

#[tokio::test]
async fn router_round_trip_matches_the_service_contract() {
    let (service, _clipboard) = service_with_memory_clipboard();
    let router = recruitment_router(service);

    let response = router
        .clone()
        .oneshot(
            axum::http::Request::post("/api/v1/recruitment/applications")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&draft()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let mut invalid = draft();
    invalid.age = "old enough".to_string();
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/recruitment/applications")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&invalid).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(
        response.status(),
        axum::http::StatusCode::UNPROCESSABLE_ENTITY
    );
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(payload["errors"]["age"], json!("must be a number"));
}
