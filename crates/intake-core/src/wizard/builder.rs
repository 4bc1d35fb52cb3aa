//! Builder for creating and configuring WizardController instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use super::{FrontierPolicy, PrefetchPolicy, Submitter, WizardController};
use crate::{
    error::{IntakeError, IoResultExt, Result},
    models::ServiceCatalog,
    registry::StepRegistry,
    store::{FormStateStore, SqliteBackend},
};

/// Builder for creating and configuring WizardController instances.
pub struct WizardBuilder {
    database_path: Option<PathBuf>,
    in_memory: bool,
    registry: StepRegistry,
    catalog: ServiceCatalog,
    frontier_policy: FrontierPolicy,
    prefetch_policy: PrefetchPolicy,
    submitter: Option<Arc<dyn Submitter>>,
    success_destination: Option<String>,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            in_memory: false,
            registry: StepRegistry::default(),
            catalog: ServiceCatalog::default(),
            frontier_policy: FrontierPolicy::default(),
            prefetch_policy: PrefetchPolicy::default(),
            submitter: None,
            success_destination: None,
        }
    }

    /// Sets a custom state file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/notary-intake/intake.db` or
    /// `~/.local/share/notary-intake/intake.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Keeps state in memory only; nothing survives the process.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    pub fn with_registry(mut self, registry: StepRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_catalog(mut self, catalog: ServiceCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_frontier_policy(mut self, policy: FrontierPolicy) -> Self {
        self.frontier_policy = policy;
        self
    }

    pub fn with_prefetch_policy(mut self, policy: PrefetchPolicy) -> Self {
        self.prefetch_policy = policy;
        self
    }

    /// Sets the backend that receives the finished form.
    pub fn with_submitter(mut self, submitter: impl Submitter + 'static) -> Self {
        self.submitter = Some(Arc::new(submitter));
        self
    }

    /// Where to send the user after a successful submission.
    pub fn with_success_destination(mut self, destination: impl Into<String>) -> Self {
        self.success_destination = Some(destination.into());
        self
    }

    /// Builds the controller, restoring any persisted state.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::FileSystem` if the state directory cannot be
    /// created, `IntakeError::Storage` if the state file cannot be opened and
    /// `IntakeError::Configuration` for an invalid catalog.
    pub fn build(self) -> Result<WizardController> {
        self.catalog.validate()?;

        let store = if self.in_memory {
            FormStateStore::in_memory()
        } else {
            let path = match self.database_path {
                Some(path) => path,
                None => Self::default_state_path()?,
            };
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).fs_context(parent)?;
            }
            debug!("Opening wizard state at {}", path.display());
            FormStateStore::new(SqliteBackend::open(&path)?)
        };

        let mut controller = WizardController::new(self.registry, self.catalog, store);
        controller.frontier_policy = self.frontier_policy;
        controller.prefetch_policy = self.prefetch_policy;
        controller.submitter = self.submitter;
        if let Some(destination) = self.success_destination {
            controller.success_destination = destination;
        }
        Ok(controller)
    }

    /// Returns the default state file path following XDG Base Directory
    /// specification.
    pub fn default_state_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("notary-intake")
            .place_data_file("intake.db")
            .map_err(|e| IntakeError::XdgDirectory(e.to_string()))
    }
}

impl Default for WizardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
