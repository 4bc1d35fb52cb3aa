//! Profile prefetch from a JSON file.

use std::path::PathBuf;

use async_trait::async_trait;
use intake_core::{error::IoResultExt, PersonalInfo, ProfileSource, Result};
use log::debug;

/// Reads the current user's details from a JSON file in the personal info
/// wire format. A missing file means there is no signed-in user.
pub struct ProfileFile {
    path: PathBuf,
}

impl ProfileFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProfileSource for ProfileFile {
    async fn current_user_profile(&self) -> Result<Option<PersonalInfo>> {
        if !self.path.exists() {
            debug!("No profile at {}", self.path.display());
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path).fs_context(&self.path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }
}
