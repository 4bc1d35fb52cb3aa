//! Core library for the notarization intake wizard.
//!
//! The crate provides the state-bearing part of a multi-step intake form:
//! an ordered step registry, a controller that gates navigation so steps
//! cannot be skipped, and a store that keeps the in-progress form across
//! sessions until it is submitted.
//!
//! - [`registry`]: the fixed, ordered list of steps and route lookups
//! - [`wizard`]: [`WizardController`] with `get`, `update`, `advance`,
//!   `retreat`, `jump_to` and the route access guard
//! - [`store`]: [`FormStateStore`], failure-tolerant typed key/value storage
//! - [`models`]: the form payload, completed-step set and service catalog
//! - [`validation`], [`documents`], [`pricing`]: per-step rules and pricing
//! - [`display`]: markdown formatting for the terminal front-end
//!
//! # Quick Start
//!
//! ```rust
//! use intake_core::{AdvanceOutcome, GuardDecision, WizardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new().in_memory().build()?;
//!
//! // Step 1 is always reachable.
//! assert_eq!(wizard.on_route_change("/documents"), GuardDecision::Allow(1));
//!
//! // Completing it unlocks step 2.
//! let outcome = wizard.advance().await;
//! assert_eq!(
//!     outcome,
//!     AdvanceOutcome::Moved { to: 2, route: "/choose-option".to_string() }
//! );
//! assert_eq!(wizard.on_route_change("/choose-option"), GuardDecision::Allow(2));
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod documents;
pub mod error;
pub mod models;
pub mod pricing;
pub mod registry;
pub mod store;
pub mod validation;
pub mod wizard;

// Re-export commonly used types
pub use error::{IntakeError, Result};
pub use models::{
    CompletedSteps, DocumentEntry, FormPayload, PayloadPatch, PersonalInfo, PersonalInfoField,
    ServiceCatalog, Step, StepKind, SubmissionResponse,
};
pub use pricing::Quote;
pub use registry::StepRegistry;
pub use store::{FormStateStore, MemoryBackend, SqliteBackend, StateBackend};
pub use validation::FieldErrors;
pub use wizard::{
    AdvanceOutcome, FrontierPolicy, GuardDecision, PrefetchPolicy, ProfileSource, Submitter,
    WizardBuilder, WizardController,
};
