//! Terminal submission.
//!
//! A submission has a single pending → resolved lifecycle guarded by a busy
//! flag: [`begin_submission`](WizardController::begin_submission) hands out at
//! most one [`SubmissionTicket`] at a time and
//! [`finish_submission`](WizardController::finish_submission) resolves it.
//! Tickets issued before [`abandon_submission`](WizardController::abandon_submission)
//! are stale and their results are dropped.

use async_trait::async_trait;
use log::{info, warn};

use super::{navigation::AdvanceOutcome, WizardController};
use crate::{
    error::Result,
    models::{FormPayload, SubmissionResponse},
};

/// The backend that receives a finished form.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Submits the payload. `Err` covers transport failures; a backend that
    /// rejects the payload answers `Ok` with `success == false`.
    async fn submit(&self, payload: &FormPayload) -> Result<SubmissionResponse>;
}

/// Proof that a submission is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
}

impl WizardController {
    /// Whether a submission is pending. Submit controls should be disabled
    /// while this is `true`.
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Marks a submission as pending. Returns `None` if one already is.
    pub fn begin_submission(&mut self) -> Option<SubmissionTicket> {
        if self.pending.is_some() {
            return None;
        }
        self.generation += 1;
        let ticket = SubmissionTicket {
            generation: self.generation,
        };
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Forgets the pending submission, e.g. when the view unmounts. Its
    /// eventual result will be discarded.
    pub fn abandon_submission(&mut self) {
        if self.pending.take().is_some() {
            info!("Pending submission abandoned");
        }
    }

    /// Resolves a pending submission.
    ///
    /// On success the payload and completed set are reset and both stored
    /// keys cleared. On failure nothing changes and the wizard stays on the
    /// terminal step.
    pub fn finish_submission(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<SubmissionResponse>,
    ) -> AdvanceOutcome {
        if self.pending != Some(ticket) {
            info!("Ignoring result of stale submission #{}", ticket.generation);
            return AdvanceOutcome::Discarded;
        }
        self.pending = None;

        match result {
            Ok(response) if response.success => {
                info!(
                    "Submission accepted{}",
                    response
                        .submission_id
                        .as_deref()
                        .map(|id| format!(" as {id}"))
                        .unwrap_or_default()
                );
                self.reset();
                AdvanceOutcome::Submitted {
                    response,
                    destination: self.success_destination.clone(),
                }
            }
            Ok(response) => {
                let message = response.failure_message();
                warn!("Submission rejected: {message}");
                self.current = self.registry.last().id;
                AdvanceOutcome::SubmissionFailed(message)
            }
            Err(e) => {
                warn!("Submission failed: {e}");
                self.current = self.registry.last().id;
                AdvanceOutcome::SubmissionFailed(e.to_string())
            }
        }
    }

    /// Hands the payload to the configured submitter.
    pub(super) async fn submit(&mut self) -> AdvanceOutcome {
        let Some(submitter) = self.submitter.clone() else {
            return AdvanceOutcome::SubmissionFailed(
                "No submission service is configured".to_string(),
            );
        };
        let Some(ticket) = self.begin_submission() else {
            return AdvanceOutcome::Busy;
        };

        let payload = self.payload.clone();
        let result = submitter.submit(&payload).await;
        self.finish_submission(ticket, result)
    }
}
