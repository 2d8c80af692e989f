use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{ApplicationDraft, ValidatedApplication, APPLICATION_READY};
use super::validation::{validate, ConstraintViolation, Field, ValidationErrors, ValidationPolicy};

/// Lifecycle of a single recruitment form session.
///
/// `Completed` is terminal: it always carries the validated data and a
/// result message, and the session never returns to `Editing`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionState {
    Editing,
    Submitting,
    Completed { result: SubmissionResult },
}

impl SubmissionState {
    pub const fn label(&self) -> &'static str {
        match self {
            SubmissionState::Editing => "editing",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Completed { .. } => "completed",
        }
    }
}

/// Terminal payload carried by a completed session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionResult {
    pub message: String,
    pub application: ValidatedApplication,
}

/// Transition failures for a session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission already completed; no further edits or retries")]
    AlreadyCompleted,
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

/// Explicit session state: the working draft, the last validation failures,
/// and the machine state, mutated only through the named transitions below.
#[derive(Debug, Clone)]
pub struct RecruitmentSession {
    draft: ApplicationDraft,
    errors: BTreeMap<Field, ConstraintViolation>,
    state: SubmissionState,
    policy: ValidationPolicy,
}

impl Default for RecruitmentSession {
    fn default() -> Self {
        Self::new(ValidationPolicy::default())
    }
}

impl RecruitmentSession {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            draft: ApplicationDraft::default(),
            errors: BTreeMap::new(),
            state: SubmissionState::Editing,
            policy,
        }
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// Per-field failures recorded by the last rejected submit attempt.
    pub fn errors(&self) -> &BTreeMap<Field, ConstraintViolation> {
        &self.errors
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Replace the working draft. Rejected once the session has completed.
    pub fn edit(&mut self, draft: ApplicationDraft) -> Result<(), SubmissionError> {
        if matches!(self.state, SubmissionState::Completed { .. }) {
            return Err(SubmissionError::AlreadyCompleted);
        }
        self.draft = draft;
        Ok(())
    }

    /// Attempt submission.
    ///
    /// On a validation failure the per-field map is recorded and the session
    /// stays in `Editing`. On success the session passes through
    /// `Submitting` synchronously (no I/O occurs), the draft is discarded,
    /// and the session lands in terminal `Completed`.
    pub fn submit(&mut self) -> Result<SubmissionResult, SubmissionError> {
        if matches!(self.state, SubmissionState::Completed { .. }) {
            return Err(SubmissionError::AlreadyCompleted);
        }

        let application = match validate(&self.draft, &self.policy) {
            Ok(application) => application,
            Err(errors) => {
                self.errors = errors.violations.clone();
                return Err(errors.into());
            }
        };

        self.state = SubmissionState::Submitting;
        self.errors.clear();
        self.draft = ApplicationDraft::default();

        let result = SubmissionResult {
            message: APPLICATION_READY.to_string(),
            application,
        };
        self.state = SubmissionState::Completed {
            result: result.clone(),
        };
        Ok(result)
    }
}
