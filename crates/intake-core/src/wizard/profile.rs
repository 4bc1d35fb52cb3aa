//! Pre-populating personal info from an existing user profile.

use async_trait::async_trait;
use log::{debug, warn};

use super::WizardController;
use crate::{error::Result, models::PersonalInfo, store::PROFILE_APPLIED_KEY};

/// Source of the signed-in user's known details.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// The current user's profile, or `None` when there is no known user.
    async fn current_user_profile(&self) -> Result<Option<PersonalInfo>>;
}

/// How fetched profile data combines with what is already in the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrefetchPolicy {
    /// Every non-empty profile field replaces the form's value, including
    /// values the user already typed.
    #[default]
    Overwrite,

    /// Profile fields only fill form fields that are still empty.
    FillEmpty,
}

impl WizardController {
    /// Consults the profile source once per form. Once a profile has been
    /// applied it is not applied again, even by a controller restored from
    /// the same store, until the form is reset or submitted. Later calls,
    /// lookup failures and missing profiles leave the payload untouched.
    /// Returns whether the payload changed.
    pub async fn prefetch_profile(&mut self, source: &dyn ProfileSource) -> bool {
        if self.prefetched {
            return false;
        }
        self.prefetched = true;

        let profile = match source.current_user_profile().await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                debug!("No user profile to prefetch");
                return false;
            }
            Err(e) => {
                warn!("Profile prefetch failed: {e}");
                return false;
            }
        };

        let before = self.payload.personal_info.clone();
        match self.prefetch_policy {
            PrefetchPolicy::Overwrite => self.payload.personal_info.overwrite_from(&profile),
            PrefetchPolicy::FillEmpty => self.payload.personal_info.fill_empty_from(&profile),
        }

        let changed = before != self.payload.personal_info;
        if changed {
            self.persist_payload();
        }
        self.store.save(PROFILE_APPLIED_KEY, &true);
        changed
    }
}
