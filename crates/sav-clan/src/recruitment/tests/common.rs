use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::recruitment::domain::{ApplicationDraft, RankTier, ValidatedApplication};
use crate::recruitment::handoff::{ClipboardError, ClipboardGateway, GROUP_CHAT_URL};
use crate::recruitment::router::recruitment_router;
use crate::recruitment::service::RecruitmentService;
use crate::recruitment::validation::{validate, ValidationPolicy};

pub(super) fn policy() -> ValidationPolicy {
    ValidationPolicy::default()
}

pub(super) fn valid_draft() -> ApplicationDraft {
    ApplicationDraft {
        in_game_name: "NightReaper".to_string(),
        player_id: "55667788".to_string(),
        level: "63".to_string(),
        rank: Some(RankTier::Mitico),
        kd_battle_royale: "3.4".to_string(),
        kd_battle_escalation: "2.8".to_string(),
        age: "21".to_string(),
        has_whatsapp: true,
        is_available: true,
        accepts_content_terms: true,
        message: "Flex IGL with tournament experience.".to_string(),
    }
}

pub(super) fn validated_application() -> ValidatedApplication {
    validate(&valid_draft(), &policy()).expect("draft passes validation")
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

#[derive(Debug, Default, Clone, Copy)]
pub(super) struct RejectingClipboard;

impl ClipboardGateway for RejectingClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Rejected("permission denied".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<RecruitmentService>, MemoryClipboard) {
    let clipboard = MemoryClipboard::default();
    let service = RecruitmentService::new(Box::new(clipboard.clone()), policy(), GROUP_CHAT_URL);
    (Arc::new(service), clipboard)
}

pub(super) fn router_with_service(
    service: Arc<RecruitmentService>,
) -> axum::Router {
    recruitment_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
