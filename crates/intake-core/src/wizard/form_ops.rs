//! Payload edits performed on behalf of the step views.
//!
//! Each operation builds a [`PayloadPatch`] and goes through
//! [`WizardController::update`], so every edit is merged and persisted the
//! same way.

use jiff::{
    civil::{Date, Time},
    tz::TimeZone,
};

use super::WizardController;
use crate::{
    documents,
    error::{IntakeError, Result},
    models::{
        AppointmentPatch, DocumentEntry, PayloadPatch, PersonalInfoField, PersonalInfoPatch,
    },
};

impl WizardController {
    /// Appends a document. The same local file cannot be added twice.
    pub fn add_document(&mut self, entry: DocumentEntry) -> Result<()> {
        let mime = (!entry.mime_type.is_empty()).then_some(entry.mime_type.as_str());
        documents::check_document(&entry.name, entry.byte_size, mime)?;
        if self
            .payload
            .documents
            .iter()
            .any(|d| d.local_handle == entry.local_handle)
        {
            return Err(IntakeError::invalid_input("documents")
                .with_reason(format!("{} has already been added", entry.name)));
        }

        let mut documents = self.payload.documents.clone();
        documents.push(entry);
        self.update(PayloadPatch::documents(documents));
        Ok(())
    }

    /// Removes the document at `index` (0-based). Returns the removed entry.
    pub fn remove_document(&mut self, index: usize) -> Option<DocumentEntry> {
        if index >= self.payload.documents.len() {
            return None;
        }
        let mut documents = self.payload.documents.clone();
        let removed = documents.remove(index);
        self.update(PayloadPatch::documents(documents));
        Some(removed)
    }

    /// Selects a service type or add-on known to the catalog.
    pub fn select_service(&mut self, id: &str) -> Result<()> {
        if self.catalog.option(id).is_none() {
            return Err(IntakeError::invalid_input("selectedServiceIds")
                .with_reason(format!("Unknown service option: {id}")));
        }
        let mut ids = self.payload.selected_service_ids.clone();
        if ids.insert(id.to_string()) {
            self.update(PayloadPatch::services(ids));
        }
        Ok(())
    }

    /// Deselects a service. Returns whether it was selected.
    pub fn deselect_service(&mut self, id: &str) -> bool {
        let mut ids = self.payload.selected_service_ids.clone();
        let removed = ids.remove(id);
        if removed {
            self.update(PayloadPatch::services(ids));
        }
        removed
    }

    /// Sets any of the appointment date, time and timezone. The timezone must
    /// be a known IANA zone name.
    pub fn book_appointment(
        &mut self,
        date: Option<Date>,
        time: Option<Time>,
        timezone: Option<&str>,
    ) -> Result<()> {
        if let Some(zone) = timezone {
            TimeZone::get(zone).map_err(|e| {
                IntakeError::invalid_input("appointment.timezone")
                    .with_reason(format!("Unknown timezone '{zone}': {e}"))
            })?;
        }

        self.update(PayloadPatch::appointment(AppointmentPatch {
            date: date.map(Some),
            time: time.map(Some),
            timezone: timezone.map(String::from),
        }));
        Ok(())
    }

    /// Clears the appointment date and time, keeping the timezone.
    pub fn clear_appointment(&mut self) {
        self.update(PayloadPatch::appointment(AppointmentPatch {
            date: Some(None),
            time: Some(None),
            timezone: None,
        }));
    }

    /// Sets one personal-info field.
    pub fn set_personal_field(&mut self, field: PersonalInfoField, value: impl Into<String>) {
        self.update(PayloadPatch::personal_info(PersonalInfoPatch::field(
            field, value,
        )));
    }

    /// Replaces the free-text notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.update(PayloadPatch::notes(notes));
    }
}
