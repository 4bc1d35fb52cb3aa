//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style headers and lists.

use std::fmt;

use super::datetime::AppointmentSlot;
use crate::{
    models::{FormPayload, PersonalInfoField, ServiceCatalog, ServiceKind, Step, StepKind},
    pricing::Quote,
};

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} ({})", self.id, self.name, self.route)
    }
}

impl fmt::Display for FormPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Documents")?;
        writeln!(f)?;
        if self.documents.is_empty() {
            writeln!(f, "No documents added.")?;
        } else {
            for (index, doc) in self.documents.iter().enumerate() {
                writeln!(
                    f,
                    "{}. {} ({}, {} bytes)",
                    index + 1,
                    doc.name,
                    doc.mime_type,
                    doc.byte_size
                )?;
            }
        }

        writeln!(f, "\n## Services")?;
        writeln!(f)?;
        if self.selected_service_ids.is_empty() {
            writeln!(f, "No services selected.")?;
        } else {
            for id in &self.selected_service_ids {
                writeln!(f, "- {id}")?;
            }
        }

        writeln!(f, "\n## Appointment")?;
        writeln!(f)?;
        writeln!(f, "{}", AppointmentSlot(&self.appointment))?;

        writeln!(f, "\n## Personal info")?;
        writeln!(f)?;
        for field in PersonalInfoField::ALL {
            let value = self.personal_info.get(field);
            writeln!(
                f,
                "- {}: {}",
                field.label(),
                if value.is_empty() { "-" } else { value }
            )?;
        }

        if !self.notes.is_empty() {
            writeln!(f, "\n## Notes")?;
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }

        Ok(())
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "- {}: {} {}", line.label, line.amount, self.currency)?;
        }
        writeln!(f, "- **Total: {} {}**", self.total, self.currency)
    }
}

impl fmt::Display for ServiceCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Base fee: {} {}", self.base_fee, self.currency)?;
        writeln!(f, "Per document: {} {}", self.per_document_fee, self.currency)?;
        writeln!(f)?;
        for option in &self.options {
            let kind = match option.kind {
                ServiceKind::ServiceType => "service",
                ServiceKind::AddOn => "add-on",
            };
            writeln!(
                f,
                "- `{}` {} ({kind}): +{} {}",
                option.id, option.name, option.surcharge, self.currency
            )?;
        }
        Ok(())
    }
}
