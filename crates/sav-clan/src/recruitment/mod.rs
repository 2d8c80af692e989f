//! Recruitment form intake: draft validation, the submission lifecycle, and
//! the WhatsApp hand-off for completed applications.

pub mod domain;
pub mod handoff;
pub mod router;
pub mod service;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{ApplicationDraft, RankTier, ValidatedApplication, APPLICATION_READY};
pub use handoff::{
    handoff_message, ClipboardError, ClipboardGateway, HandoffDispatcher, HandoffNotification,
    HandoffReceipt, GROUP_CHAT_URL,
};
pub use router::recruitment_router;
pub use service::{CompletedSubmission, RecruitmentService};
pub use session::{RecruitmentSession, SubmissionError, SubmissionResult, SubmissionState};
pub use validation::{validate, ConstraintViolation, Field, ValidationErrors, ValidationPolicy};
