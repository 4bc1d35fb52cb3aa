//! Local stand-in for the submission backend.
//!
//! Each accepted request is written as one JSON file into an outbox
//! directory, named after its request number.

use std::path::PathBuf;

use async_trait::async_trait;
use intake_core::{
    error::IoResultExt, pricing, pricing::Quote, FormPayload, IntakeError, Result,
    ServiceCatalog, SubmissionResponse, Submitter,
};
use jiff::Timestamp;
use log::info;
use serde::{Deserialize, Serialize};

/// Message returned for a request without any documents.
pub const NO_DOCUMENTS_MESSAGE: &str = "Please add at least one document before submitting";

/// One submitted request as stored in the outbox.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboxRecord {
    pub submission_id: String,
    pub submitted_at: Timestamp,
    pub payload: FormPayload,
    pub quote: Quote,
}

/// Submits requests by writing them into a directory.
pub struct OutboxSubmitter {
    directory: PathBuf,
    catalog: ServiceCatalog,
}

impl OutboxSubmitter {
    pub fn new(directory: impl Into<PathBuf>, catalog: ServiceCatalog) -> Self {
        Self {
            directory: directory.into(),
            catalog,
        }
    }

    /// `$XDG_DATA_HOME/notary-intake/outbox`
    pub fn default_directory() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("notary-intake")
            .place_data_file("outbox")
            .map_err(|e| IntakeError::XdgDirectory(e.to_string()))
    }
}

#[async_trait]
impl Submitter for OutboxSubmitter {
    async fn submit(&self, payload: &FormPayload) -> Result<SubmissionResponse> {
        if payload.documents.is_empty() {
            return Ok(SubmissionResponse::rejected(NO_DOCUMENTS_MESSAGE));
        }

        if self.directory.exists() && !self.directory.is_dir() {
            return Err(IntakeError::submission(format!(
                "outbox {} is not a directory",
                self.directory.display()
            )));
        }
        std::fs::create_dir_all(&self.directory).fs_context(&self.directory)?;

        let submitted_at = Timestamp::now();
        let submission_id = format!("NR-{}", submitted_at.as_millisecond());
        let record = OutboxRecord {
            submission_id: submission_id.clone(),
            submitted_at,
            payload: payload.clone(),
            quote: pricing::quote(&self.catalog, payload),
        };

        let path = self.directory.join(format!("{submission_id}.json"));
        let json = serde_json::to_string_pretty(&record)?;
        std::fs::write(&path, json).fs_context(&path)?;
        let applicant = payload.personal_info.full_name();
        if applicant.is_empty() {
            info!("Wrote request {submission_id} to {}", path.display());
        } else {
            info!("Wrote request {submission_id} for {applicant} to {}", path.display());
        }

        Ok(SubmissionResponse::accepted(submission_id))
    }
}
