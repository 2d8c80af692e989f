use std::fmt::Debug;
use std::fmt::Write as _;

use serde::Serialize;

use super::domain::ValidatedApplication;

/// Invite link for the clan's WhatsApp group, overridable through config.
pub const GROUP_CHAT_URL: &str = "https://chat.whatsapp.com/FbjnJW13u3IHSVj7XFQRiw";

const SEPARATOR: &str = "----------------------------------";

/// Render the hand-off block for a validated application.
///
/// The layout is fixed: a framed header, one labelled line per field, and a
/// confirmations block. The confirmations always read "Yes"; validation
/// guarantees them, and the group admins expect the affirmative lines. An
/// absent optional message renders as "N/A".
pub fn handoff_message(application: &ValidatedApplication) -> String {
    let mut text = String::new();
    writeln!(text, "*New Application for Sav Oficial*").expect("write header");
    writeln!(text, "{SEPARATOR}").expect("write separator");
    writeln!(text, "*In-Game Name:* {}", application.in_game_name()).expect("write name");
    writeln!(text, "*Player ID:* {}", application.player_id()).expect("write player id");
    writeln!(text, "*Age:* {}", application.age()).expect("write age");
    writeln!(text, "*Level:* {}", application.level()).expect("write level");
    writeln!(text, "*Rank:* {}", application.rank().label()).expect("write rank");
    writeln!(text, "*K/D (BR):* {}", application.kd_battle_royale()).expect("write kd br");
    writeln!(text, "*K/D (BE):* {}", application.kd_battle_escalation()).expect("write kd be");
    writeln!(
        text,
        "*Message:* {}",
        application.message().unwrap_or("N/A")
    )
    .expect("write message");
    writeln!(text, "{SEPARATOR}").expect("write separator");
    writeln!(text, "*Confirmations:*").expect("write confirmations header");
    writeln!(text, "- Has WhatsApp: Yes").expect("write whatsapp line");
    writeln!(text, "- Has availability: Yes").expect("write availability line");
    write!(text, "- Accepts content creation: Yes").expect("write content line");
    text
}

/// Clipboard abstraction so the hand-off flow can run without a display
/// server; the web front-end and the CLI provide their own implementations.
pub trait ClipboardGateway: Debug + Send + Sync {
    /// Place `text` on the clipboard. One attempt, no retries.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// User-facing outcome of the clipboard attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum HandoffNotification {
    Copied,
    CopyFailed { reason: String },
}

impl HandoffNotification {
    pub const fn title(&self) -> &'static str {
        match self {
            HandoffNotification::Copied => "Data copied!",
            HandoffNotification::CopyFailed { .. } => "Copy failed",
        }
    }

    pub const fn detail(&self) -> &'static str {
        match self {
            HandoffNotification::Copied => {
                "You will be redirected to WhatsApp. Paste the message in the group."
            }
            HandoffNotification::CopyFailed { .. } => {
                "Your data could not be copied. Please copy the message and paste it manually."
            }
        }
    }
}

/// Everything the caller needs after a dispatch.
///
/// The group link is present on both clipboard outcomes; the hand-off
/// channel stays reachable even when the copy fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandoffReceipt {
    pub message: String,
    pub notification: HandoffNotification,
    pub group_link: String,
}

/// Formats the hand-off message and drives the single clipboard attempt.
#[derive(Debug)]
pub struct HandoffDispatcher {
    clipboard: Box<dyn ClipboardGateway>,
    group_link: String,
}

impl HandoffDispatcher {
    pub fn new(clipboard: Box<dyn ClipboardGateway>, group_link: impl Into<String>) -> Self {
        Self {
            clipboard,
            group_link: group_link.into(),
        }
    }

    pub fn group_link(&self) -> &str {
        &self.group_link
    }

    /// Format the message, attempt the copy, and hand back the receipt.
    pub fn dispatch(&self, application: &ValidatedApplication) -> HandoffReceipt {
        let message = handoff_message(application);
        let notification = match self.clipboard.write_text(&message) {
            Ok(()) => HandoffNotification::Copied,
            Err(err) => HandoffNotification::CopyFailed {
                reason: err.to_string(),
            },
        };
        HandoffReceipt {
            message,
            notification,
            group_link: self.group_link.clone(),
        }
    }
}
