//! Response returned by the submission collaborator.

use serde::{Deserialize, Serialize};

/// Outcome reported by the backend for a terminal submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    /// Whether the backend accepted the submission
    pub success: bool,

    /// Identifier assigned by the backend on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<String>,

    /// Error message to show verbatim on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Whether an account was created for the submitter's email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_created: Option<bool>,
}

impl SubmissionResponse {
    /// A successful response carrying the assigned id.
    pub fn accepted(submission_id: impl Into<String>) -> Self {
        Self {
            success: true,
            submission_id: Some(submission_id.into()),
            ..Self::default()
        }
    }

    /// A rejection carrying the message to surface.
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// The message to show when the submission did not succeed.
    pub fn failure_message(&self) -> String {
        self.error
            .clone()
            .unwrap_or_else(|| "Submission was not accepted".to_string())
    }
}
