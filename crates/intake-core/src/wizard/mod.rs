//! The wizard controller: gated step navigation over a persisted form.
//!
//! [`WizardController`] is the only owner of the [`FormPayload`] and the
//! [`CompletedSteps`] set. Step views never touch either directly; they call
//! [`get`](WizardController::get), [`update`](WizardController::update),
//! [`advance`](WizardController::advance),
//! [`retreat`](WizardController::retreat) and
//! [`jump_to`](WizardController::jump_to). Every mutation writes through to
//! the [`FormStateStore`].
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │  Router / View  │    │ WizardController │    │ FormStateStore  │
//! │ (route changes, │───▶│ (guard, advance, │───▶│ (payload and    │
//! │  user actions)  │    │  update, submit) │    │  completed set) │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configures and loads a controller
//! - [`navigation`]: access guard, `advance`, `retreat`, `jump_to`
//! - [`form_ops`]: payload updates on behalf of the step views
//! - [`submission`]: terminal submission with a busy-flag guard
//! - [`profile`]: one-shot profile prefetch on mount
//!
//! # Example
//!
//! ```rust
//! use intake_core::{GuardDecision, WizardBuilder};
//!
//! let mut wizard = WizardBuilder::new().in_memory().build().unwrap();
//!
//! // Fresh state: deep links are pushed back to the first step.
//! let decision = wizard.on_route_change("/summary");
//! assert_eq!(decision, GuardDecision::Redirect { step: 1, route: "/documents".to_string() });
//! assert_eq!(wizard.current_step().id, 1);
//! ```

use std::sync::Arc;

use log::debug;

use crate::{
    models::{CompletedSteps, FormPayload, PayloadPatch, ServiceCatalog, Step},
    pricing::{self, Quote},
    registry::StepRegistry,
    store::{FormStateStore, COMPLETED_STEPS_KEY, FORM_PAYLOAD_KEY, PROFILE_APPLIED_KEY},
};

pub mod builder;
pub mod form_ops;
pub mod navigation;
pub mod profile;
pub mod submission;


pub use builder::WizardBuilder;
pub use navigation::{AdvanceOutcome, GuardDecision};
pub use profile::{PrefetchPolicy, ProfileSource};
pub use submission::{SubmissionTicket, Submitter};

/// How far ahead the access guard lets a user go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FrontierPolicy {
    /// Step `r` is reachable when `r - 1` is completed; the redirect target
    /// is `max(completed) + 1`. A set with gaps can therefore unlock a step
    /// whose predecessors were never all completed.
    #[default]
    Highest,

    /// Step `r` is reachable only when every step before it is completed;
    /// the redirect target is the first uncompleted step.
    Contiguous,
}

/// Default off-wizard destination after a successful submission.
pub const DEFAULT_SUCCESS_DESTINATION: &str = "/thank-you";

/// Owns the wizard state and mediates every transition.
pub struct WizardController {
    registry: StepRegistry,
    catalog: ServiceCatalog,
    store: FormStateStore,
    payload: FormPayload,
    completed: CompletedSteps,
    current: u32,
    frontier_policy: FrontierPolicy,
    prefetch_policy: PrefetchPolicy,
    submitter: Option<Arc<dyn Submitter>>,
    success_destination: String,
    pending: Option<SubmissionTicket>,
    generation: u64,
    prefetched: bool,
}

impl WizardController {
    /// Creates a controller, restoring any persisted payload and completed
    /// set. Starts on step 1.
    pub(crate) fn new(registry: StepRegistry, catalog: ServiceCatalog, store: FormStateStore) -> Self {
        let payload = store.load(FORM_PAYLOAD_KEY, FormPayload::default());
        let completed = store.load(COMPLETED_STEPS_KEY, CompletedSteps::default());
        let prefetched = store.load(PROFILE_APPLIED_KEY, false);
        let current = registry.first().id;
        debug!(
            "Restored wizard state: {} document(s), completed steps {:?}",
            payload.documents.len(),
            completed.iter().collect::<Vec<_>>()
        );

        Self {
            registry,
            catalog,
            store,
            payload,
            completed,
            current,
            frontier_policy: FrontierPolicy::default(),
            prefetch_policy: PrefetchPolicy::default(),
            submitter: None,
            success_destination: DEFAULT_SUCCESS_DESTINATION.to_string(),
            pending: None,
            generation: 0,
            prefetched,
        }
    }

    /// The current form payload.
    pub fn get(&self) -> &FormPayload {
        &self.payload
    }

    /// Merges a partial update into the payload and persists it.
    pub fn update(&mut self, patch: PayloadPatch) {
        if patch.is_empty() {
            return;
        }
        self.payload.merge(patch);
        self.persist_payload();
    }

    /// The step the wizard is on.
    pub fn current_step(&self) -> &Step {
        self.registry
            .step(self.current)
            .unwrap_or_else(|| self.registry.first())
    }

    pub fn completed_steps(&self) -> &CompletedSteps {
        &self.completed
    }

    pub fn is_completed(&self, id: u32) -> bool {
        self.completed.contains(id)
    }

    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn frontier_policy(&self) -> FrontierPolicy {
        self.frontier_policy
    }

    /// Share of registry steps completed, 0 to 100.
    pub fn progress_percent(&self) -> u8 {
        let known = self
            .completed
            .iter()
            .filter(|id| self.registry.step(*id).is_some())
            .count();
        ((known * 100) / self.registry.len()) as u8
    }

    /// Itemized price of the current payload.
    pub fn quote(&self) -> Quote {
        pricing::quote(&self.catalog, &self.payload)
    }

    /// When the payload was last persisted, if known.
    pub fn last_saved(&self) -> Option<jiff::Timestamp> {
        self.store.saved_at(FORM_PAYLOAD_KEY)
    }

    /// Discards all progress: payload and completed set return to their
    /// defaults, both keys are cleared and the wizard returns to step 1. The
    /// next mount may prefetch the profile again.
    pub fn reset(&mut self) {
        self.payload = FormPayload::default();
        self.completed = CompletedSteps::default();
        self.prefetched = false;
        self.store.clear(FORM_PAYLOAD_KEY);
        self.store.clear(COMPLETED_STEPS_KEY);
        self.store.clear(PROFILE_APPLIED_KEY);
        self.current = self.registry.first().id;
    }

    fn persist_payload(&mut self) {
        self.store.save(FORM_PAYLOAD_KEY, &self.payload);
    }

    fn persist_completed(&mut self) {
        self.store.save(COMPLETED_STEPS_KEY, &self.completed);
    }

    fn persist(&mut self) {
        self.persist_payload();
        self.persist_completed();
    }
}
