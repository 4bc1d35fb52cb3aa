//! Markdown formatting for wizard state and outcomes.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrappers in this module add context such as per-step progress markers.
//!
//! - [`datetime`]: timestamp and appointment slot formatting
//! - [`models`]: Display implementations for domain models and quotes
//! - [`progress`]: step list with completion markers ([`WizardProgress`])
//! - [`results`]: Display for guard decisions and advance outcomes
//! - [`status`]: one-line success/failure messages ([`OperationStatus`])
//!
//! ```rust
//! use intake_core::{display::WizardProgress, WizardBuilder};
//!
//! let wizard = WizardBuilder::new().in_memory().build().unwrap();
//! let output = WizardProgress(&wizard).to_string();
//! assert!(output.contains("➤ Current 1. Documents (/documents)"));
//! assert!(output.contains("✗ Locked 5. Summary (/summary)"));
//! ```

pub mod datetime;
pub mod models;
pub mod progress;
pub mod results;
pub mod status;

pub use datetime::{AppointmentSlot, LocalDateTime};
pub use progress::{StepMarker, WizardProgress};
pub use status::OperationStatus;
