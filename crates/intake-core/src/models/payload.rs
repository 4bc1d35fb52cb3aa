//! The form payload collected across all wizard steps, and its partial
//! update types.

use std::{collections::BTreeSet, fmt, path::PathBuf, str::FromStr};

use jiff::{
    civil::{Date, Time},
    tz::TimeZone,
};
use serde::{Deserialize, Serialize};

/// A document selected for notarization. Kept local until final submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentEntry {
    /// File name as shown to the user
    pub name: String,

    /// Size of the file in bytes
    pub byte_size: u64,

    /// MIME type derived from the file extension
    pub mime_type: String,

    /// Local path the file was picked from
    pub local_handle: PathBuf,
}

/// Requested appointment slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Appointment {
    /// Calendar date, empty until picked
    pub date: Option<Date>,

    /// Time of day, empty until picked
    pub time: Option<Time>,

    /// IANA zone name the slot is expressed in
    pub timezone: String,
}

impl Default for Appointment {
    fn default() -> Self {
        Self {
            date: None,
            time: None,
            timezone: default_timezone(),
        }
    }
}

impl Appointment {
    /// Whether both a date and a time have been picked.
    pub fn is_booked(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }
}

/// The system zone's IANA name, or `UTC` when it cannot be determined.
pub fn default_timezone() -> String {
    TimeZone::system()
        .iana_name()
        .map(String::from)
        .unwrap_or_else(|| "UTC".to_string())
}

/// Contact details. An empty string means the field is unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Field selector for [`PersonalInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PersonalInfoField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    PostalCode,
    Country,
}

impl PersonalInfoField {
    /// All fields in form order.
    pub const ALL: [PersonalInfoField; 8] = [
        PersonalInfoField::FirstName,
        PersonalInfoField::LastName,
        PersonalInfoField::Email,
        PersonalInfoField::Phone,
        PersonalInfoField::Address,
        PersonalInfoField::City,
        PersonalInfoField::PostalCode,
        PersonalInfoField::Country,
    ];

    /// The wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalInfoField::FirstName => "firstName",
            PersonalInfoField::LastName => "lastName",
            PersonalInfoField::Email => "email",
            PersonalInfoField::Phone => "phone",
            PersonalInfoField::Address => "address",
            PersonalInfoField::City => "city",
            PersonalInfoField::PostalCode => "postalCode",
            PersonalInfoField::Country => "country",
        }
    }

    /// Human readable label used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            PersonalInfoField::FirstName => "First name",
            PersonalInfoField::LastName => "Last name",
            PersonalInfoField::Email => "Email",
            PersonalInfoField::Phone => "Phone",
            PersonalInfoField::Address => "Address",
            PersonalInfoField::City => "City",
            PersonalInfoField::PostalCode => "Postal code",
            PersonalInfoField::Country => "Country",
        }
    }
}

impl fmt::Display for PersonalInfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonalInfoField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "firstname" => Ok(PersonalInfoField::FirstName),
            "lastname" => Ok(PersonalInfoField::LastName),
            "email" => Ok(PersonalInfoField::Email),
            "phone" => Ok(PersonalInfoField::Phone),
            "address" => Ok(PersonalInfoField::Address),
            "city" => Ok(PersonalInfoField::City),
            "postalcode" | "zip" => Ok(PersonalInfoField::PostalCode),
            "country" => Ok(PersonalInfoField::Country),
            _ => Err(format!("Unknown personal info field: {s}")),
        }
    }
}

impl PersonalInfo {
    /// Returns the value of a field.
    pub fn get(&self, field: PersonalInfoField) -> &str {
        match field {
            PersonalInfoField::FirstName => &self.first_name,
            PersonalInfoField::LastName => &self.last_name,
            PersonalInfoField::Email => &self.email,
            PersonalInfoField::Phone => &self.phone,
            PersonalInfoField::Address => &self.address,
            PersonalInfoField::City => &self.city,
            PersonalInfoField::PostalCode => &self.postal_code,
            PersonalInfoField::Country => &self.country,
        }
    }

    fn slot(&mut self, field: PersonalInfoField) -> &mut String {
        match field {
            PersonalInfoField::FirstName => &mut self.first_name,
            PersonalInfoField::LastName => &mut self.last_name,
            PersonalInfoField::Email => &mut self.email,
            PersonalInfoField::Phone => &mut self.phone,
            PersonalInfoField::Address => &mut self.address,
            PersonalInfoField::City => &mut self.city,
            PersonalInfoField::PostalCode => &mut self.postal_code,
            PersonalInfoField::Country => &mut self.country,
        }
    }

    /// Sets the value of a field.
    pub fn set(&mut self, field: PersonalInfoField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Copies every non-empty field of `other` over this record.
    pub fn overwrite_from(&mut self, other: &PersonalInfo) {
        for field in PersonalInfoField::ALL {
            let value = other.get(field);
            if !value.is_empty() {
                self.set(field, value);
            }
        }
    }

    /// Copies fields of `other` only where this record is still empty.
    pub fn fill_empty_from(&mut self, other: &PersonalInfo) {
        for field in PersonalInfoField::ALL {
            if self.get(field).is_empty() {
                self.set(field, other.get(field));
            }
        }
    }

    /// Full name, or an empty string when neither part is set.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// The single mutable aggregate collected across all steps.
///
/// Every field always exists; unset values are empty. Stored payloads missing
/// fields deserialize with their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FormPayload {
    /// Documents in the order they were added
    pub documents: Vec<DocumentEntry>,

    /// Selected service types and add-on options
    pub selected_service_ids: BTreeSet<String>,

    /// Requested appointment slot
    pub appointment: Appointment,

    /// Contact details
    pub personal_info: PersonalInfo,

    /// Free-text notes for the notary
    pub notes: String,
}

impl FormPayload {
    /// Merges a partial update into this payload. Fields absent from the patch
    /// are left untouched.
    pub fn merge(&mut self, patch: PayloadPatch) {
        let PayloadPatch {
            documents,
            selected_service_ids,
            appointment,
            personal_info,
            notes,
        } = patch;

        if let Some(documents) = documents {
            self.documents = documents;
        }
        if let Some(ids) = selected_service_ids {
            self.selected_service_ids = ids;
        }
        if let Some(appointment) = appointment {
            appointment.apply(&mut self.appointment);
        }
        if let Some(personal_info) = personal_info {
            personal_info.apply(&mut self.personal_info);
        }
        if let Some(notes) = notes {
            self.notes = notes;
        }
    }
}

/// Partial update of an [`Appointment`].
///
/// The outer `Option` means "leave unchanged"; `Some(None)` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentPatch {
    pub date: Option<Option<Date>>,
    pub time: Option<Option<Time>>,
    pub timezone: Option<String>,
}

impl AppointmentPatch {
    fn apply(self, target: &mut Appointment) {
        if let Some(date) = self.date {
            target.date = date;
        }
        if let Some(time) = self.time {
            target.time = time;
        }
        if let Some(timezone) = self.timezone {
            target.timezone = timezone;
        }
    }
}

/// Partial update of [`PersonalInfo`]; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfoPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl PersonalInfoPatch {
    /// A patch touching exactly one field.
    pub fn field(field: PersonalInfoField, value: impl Into<String>) -> Self {
        let mut patch = Self::default();
        let value = Some(value.into());
        match field {
            PersonalInfoField::FirstName => patch.first_name = value,
            PersonalInfoField::LastName => patch.last_name = value,
            PersonalInfoField::Email => patch.email = value,
            PersonalInfoField::Phone => patch.phone = value,
            PersonalInfoField::Address => patch.address = value,
            PersonalInfoField::City => patch.city = value,
            PersonalInfoField::PostalCode => patch.postal_code = value,
            PersonalInfoField::Country => patch.country = value,
        }
        patch
    }

    fn apply(self, target: &mut PersonalInfo) {
        let pairs = [
            (PersonalInfoField::FirstName, self.first_name),
            (PersonalInfoField::LastName, self.last_name),
            (PersonalInfoField::Email, self.email),
            (PersonalInfoField::Phone, self.phone),
            (PersonalInfoField::Address, self.address),
            (PersonalInfoField::City, self.city),
            (PersonalInfoField::PostalCode, self.postal_code),
            (PersonalInfoField::Country, self.country),
        ];
        for (field, value) in pairs {
            if let Some(value) = value {
                target.set(field, value);
            }
        }
    }
}

/// Partial update of a [`FormPayload`]; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadPatch {
    pub documents: Option<Vec<DocumentEntry>>,
    pub selected_service_ids: Option<BTreeSet<String>>,
    pub appointment: Option<AppointmentPatch>,
    pub personal_info: Option<PersonalInfoPatch>,
    pub notes: Option<String>,
}

impl PayloadPatch {
    /// Replaces the document list.
    pub fn documents(documents: Vec<DocumentEntry>) -> Self {
        Self {
            documents: Some(documents),
            ..Self::default()
        }
    }

    /// Replaces the selected service set.
    pub fn services<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_service_ids: Some(ids.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Merges into the appointment.
    pub fn appointment(patch: AppointmentPatch) -> Self {
        Self {
            appointment: Some(patch),
            ..Self::default()
        }
    }

    /// Merges into the personal info.
    pub fn personal_info(patch: PersonalInfoPatch) -> Self {
        Self {
            personal_info: Some(patch),
            ..Self::default()
        }
    }

    /// Replaces the notes.
    pub fn notes(notes: impl Into<String>) -> Self {
        Self {
            notes: Some(notes.into()),
            ..Self::default()
        }
    }

    /// Whether the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
