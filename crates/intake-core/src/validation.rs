//! Per-step validation run before `advance()` leaves a step.

use std::{fmt, sync::OnceLock};

use regex::Regex;

use crate::models::{FormPayload, PersonalInfo, PersonalInfoField, StepKind};

/// Service id that requires a full postal address.
pub const HOME_VISIT_SERVICE: &str = "home-visit";

/// Ordered field → message pairs shown next to the offending inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field. The first message per field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if self.get(&field).is_none() {
            self.0.push((field, message.into()));
        }
    }

    /// The message recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, message) in self.iter() {
            writeln!(f, "- {field}: {message}")?;
        }
        Ok(())
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+?[0-9 ()\-]{6,20}$").expect("phone pattern is valid"))
}

fn postal_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 \-]{1,9}$").expect("postal code pattern is valid")
    })
}

/// Validates contact details.
///
/// Names, email and phone are always required. Address, city and postal code
/// become required once a home visit is selected.
pub fn validate_personal_info(info: &PersonalInfo, home_visit: bool) -> FieldErrors {
    use PersonalInfoField::*;

    let mut errors = FieldErrors::new();
    let mut required = vec![FirstName, LastName, Email, Phone];
    if home_visit {
        required.extend([Address, City, PostalCode]);
    }

    for field in required {
        if info.get(field).trim().is_empty() {
            errors.add(field.as_str(), format!("{} is required", field.label()));
        }
    }

    let email = info.email.trim();
    if !email.is_empty() && !email_pattern().is_match(email) {
        errors.add(Email.as_str(), "Please enter a valid email address");
    }

    let phone = info.phone.trim();
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !phone.is_empty() && (!phone_pattern().is_match(phone) || digits < 6) {
        errors.add(Phone.as_str(), "Please enter a valid phone number");
    }

    let postal_code = info.postal_code.trim();
    if !postal_code.is_empty() && !postal_code_pattern().is_match(postal_code) {
        errors.add(PostalCode.as_str(), "Please enter a valid postal code");
    }

    errors
}

/// Runs the validation attached to a step kind. Steps without rules always
/// pass.
pub fn validate_step(kind: StepKind, payload: &FormPayload) -> FieldErrors {
    match kind {
        StepKind::PersonalInfo => validate_personal_info(
            &payload.personal_info,
            payload.selected_service_ids.contains(HOME_VISIT_SERVICE),
        ),
        StepKind::Documents
        | StepKind::ChooseOption
        | StepKind::BookAppointment
        | StepKind::Summary => FieldErrors::new(),
    }
}
