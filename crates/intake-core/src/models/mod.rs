//! Data models for the intake wizard.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from
//! presentation.
//!
//! - [`Step`]: static descriptor of one wizard step
//! - [`FormPayload`]: the aggregate collected across all steps, always a
//!   complete record, mutated through [`PayloadPatch`] merges
//! - [`CompletedSteps`]: ids of steps passed via `advance()`
//! - [`ServiceCatalog`]: priced service types and add-ons
//! - [`SubmissionResponse`]: what the backend reports for a submission
//!
//! # Examples
//!
//! ```rust
//! use intake_core::models::{FormPayload, PayloadPatch, PersonalInfoField, PersonalInfoPatch};
//!
//! let mut payload = FormPayload::default();
//! payload.merge(PayloadPatch::notes("Two copies please"));
//! payload.merge(PayloadPatch::personal_info(PersonalInfoPatch::field(
//!     PersonalInfoField::Email,
//!     "ada@example.com",
//! )));
//!
//! assert_eq!(payload.notes, "Two copies please");
//! assert_eq!(payload.personal_info.email, "ada@example.com");
//! ```

pub mod catalog;
pub mod completed;
pub mod payload;
pub mod step;
pub mod submission;


pub use catalog::{Amount, ServiceCatalog, ServiceKind, ServiceOption, MAX_CATALOG_AMOUNT};
pub use completed::CompletedSteps;
pub use payload::{
    default_timezone, Appointment, AppointmentPatch, DocumentEntry, FormPayload, PayloadPatch,
    PersonalInfo, PersonalInfoField, PersonalInfoPatch,
};
pub use step::{Step, StepKind};
pub use submission::SubmissionResponse;
