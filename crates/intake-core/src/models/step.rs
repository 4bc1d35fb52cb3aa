//! Step descriptor definition.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of view a step renders, used to dispatch per-step validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    /// Upload the documents to be notarized
    Documents,

    /// Pick a service type and add-on options
    ChooseOption,

    /// Select an appointment date, time and timezone
    BookAppointment,

    /// Enter contact details
    PersonalInfo,

    /// Review everything and submit
    Summary,
}

impl StepKind {
    /// Convert to the stable string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Documents => "documents",
            StepKind::ChooseOption => "choose-option",
            StepKind::BookAppointment => "book-appointment",
            StepKind::PersonalInfo => "personal-info",
            StepKind::Summary => "summary",
        }
    }
}

impl FromStr for StepKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "documents" => Ok(StepKind::Documents),
            "choose-option" => Ok(StepKind::ChooseOption),
            "book-appointment" => Ok(StepKind::BookAppointment),
            "personal-info" => Ok(StepKind::PersonalInfo),
            "summary" => Ok(StepKind::Summary),
            _ => Err(format!("Invalid step kind: {s}")),
        }
    }
}

/// A static wizard step descriptor.
///
/// Steps are defined once when the registry is built and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// 1-based position of the step; dense and ordered
    pub id: u32,

    /// Display name shown in the progress header
    pub name: String,

    /// Route path the step is mounted at, e.g. `/documents`
    pub route: String,

    /// View kind
    pub kind: StepKind,
}

impl Step {
    /// Creates a new step descriptor.
    pub fn new(id: u32, name: impl Into<String>, route: impl Into<String>, kind: StepKind) -> Self {
        Self {
            id,
            name: name.into(),
            route: route.into(),
            kind,
        }
    }
}
