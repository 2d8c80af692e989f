use serde::Serialize;

use super::domain::ApplicationDraft;
use super::handoff::{ClipboardGateway, HandoffDispatcher, HandoffReceipt};
use super::session::{RecruitmentSession, SubmissionError, SubmissionResult};
use super::validation::ValidationPolicy;

/// Facade used by the HTTP router: drives a fresh session per submission
/// and dispatches the hand-off for completed applications.
#[derive(Debug)]
pub struct RecruitmentService {
    policy: ValidationPolicy,
    dispatcher: HandoffDispatcher,
}

impl RecruitmentService {
    pub fn new(
        clipboard: Box<dyn ClipboardGateway>,
        policy: ValidationPolicy,
        group_link: impl Into<String>,
    ) -> Self {
        Self {
            policy,
            dispatcher: HandoffDispatcher::new(clipboard, group_link),
        }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn group_link(&self) -> &str {
        self.dispatcher.group_link()
    }

    /// Run one draft through the full flow: validate, complete, dispatch.
    pub fn submit(&self, draft: ApplicationDraft) -> Result<CompletedSubmission, SubmissionError> {
        let mut session = RecruitmentSession::new(self.policy.clone());
        session.edit(draft)?;
        let result = session.submit()?;
        let handoff = self.dispatcher.dispatch(&result.application);
        Ok(CompletedSubmission { result, handoff })
    }
}

/// Submission outcome returned to the HTTP layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletedSubmission {
    pub result: SubmissionResult,
    pub handoff: HandoffReceipt,
}
