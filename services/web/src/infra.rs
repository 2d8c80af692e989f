use metrics_exporter_prometheus::PrometheusHandle;
use sav_clan::recruitment::{ClipboardError, ClipboardGateway, ValidationPolicy};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Clipboard that records every write. The server process has no user
/// clipboard; the browser re-runs the copy client-side, and the recorded
/// writes double as an audit trail for the demo and tests.
#[derive(Debug, Default, Clone)]
pub(crate) struct InMemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl InMemoryClipboard {
    pub(crate) fn writes(&self) -> Vec<String> {
        self.writes.lock().expect("clipboard mutex poisoned").clone()
    }
}

impl ClipboardGateway for InMemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes
            .lock()
            .expect("clipboard mutex poisoned")
            .push(text.to_string());
        Ok(())
    }
}

/// Clipboard that always refuses, for exercising the fallback path.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct RejectingClipboard;

impl ClipboardGateway for RejectingClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(
            "no clipboard in this environment".to_string(),
        ))
    }
}

pub(crate) fn default_validation_policy() -> ValidationPolicy {
    ValidationPolicy {
        min_name_chars: 3,
        min_player_id_chars: 5,
        minimum_level: 50,
        minimum_kd_battle_royale: 3.0,
        minimum_kd_battle_escalation: 2.5,
        minimum_age: 18,
        max_message_chars: 500,
    }
}
