//! Service catalog: the priced service types and add-on options a customer
//! can select.

use std::{fmt, ops::Add, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{IntakeError, IoResultExt, Result};

/// A monetary amount in minor currency units (cents).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Amount(pub u64);

impl Amount {
    /// Builds an amount from whole units and cents.
    pub const fn new(units: u64, cents: u64) -> Self {
        Self(units * 100 + cents)
    }

    /// Multiplies by a count, e.g. a per-document fee. Saturates at
    /// `u64::MAX`.
    pub fn times(self, count: u64) -> Self {
        Self(self.0.saturating_mul(count))
    }
}

impl Add for Amount {
    type Output = Amount;

    /// Saturates at `u64::MAX`.
    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::default(), Add::add)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Largest fee or surcharge a catalog may contain: one million units.
pub const MAX_CATALOG_AMOUNT: Amount = Amount::new(1_000_000, 0);

/// Whether an option is a base service type or an add-on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    ServiceType,
    AddOn,
}

/// One selectable entry of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceOption {
    /// Identifier stored in `selected_service_ids`
    pub id: String,

    /// Display name
    pub name: String,

    pub kind: ServiceKind,

    /// Added to the base fee when selected
    pub surcharge: Amount,
}

impl ServiceOption {
    pub fn new(id: &str, name: &str, kind: ServiceKind, surcharge: Amount) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            surcharge,
        }
    }
}

/// Fees and selectable options used to price a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceCatalog {
    /// ISO currency code shown next to amounts
    pub currency: String,

    /// Flat fee charged for every submission
    pub base_fee: Amount,

    /// Fee charged per uploaded document
    pub per_document_fee: Amount,

    /// Selectable service types and add-ons
    pub options: Vec<ServiceOption>,
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        use ServiceKind::*;

        Self {
            currency: "EUR".to_string(),
            base_fee: Amount::new(25, 0),
            per_document_fee: Amount::new(10, 0),
            options: vec![
                ServiceOption::new("standard", "Standard notarization", ServiceType, Amount(0)),
                ServiceOption::new("urgent", "Urgent (same day)", AddOn, Amount::new(15, 0)),
                ServiceOption::new("home-visit", "Home visit", AddOn, Amount::new(35, 0)),
                ServiceOption::new("apostille", "Apostille", ServiceType, Amount::new(40, 0)),
                ServiceOption::new("certified-copy", "Certified copy", AddOn, Amount::new(12, 0)),
                ServiceOption::new("translation", "Certified translation", AddOn, Amount::new(30, 0)),
            ],
        }
    }
}

impl ServiceCatalog {
    /// Looks up an option by id.
    pub fn option(&self, id: &str) -> Option<&ServiceOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).fs_context(path)?;
        let catalog: ServiceCatalog = serde_json::from_str(&raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Rejects catalogs with duplicate or empty option ids, or with a fee
    /// above [`MAX_CATALOG_AMOUNT`].
    pub fn validate(&self) -> Result<()> {
        let fees = [("base fee", self.base_fee), ("per-document fee", self.per_document_fee)];
        let surcharges = self
            .options
            .iter()
            .map(|o| (o.id.as_str(), o.surcharge));
        for (what, amount) in fees.into_iter().chain(surcharges) {
            if amount > MAX_CATALOG_AMOUNT {
                return Err(IntakeError::Configuration {
                    message: format!(
                        "Amount for {what} exceeds the maximum of {MAX_CATALOG_AMOUNT}"
                    ),
                });
            }
        }

        let mut seen = std::collections::HashSet::new();
        for option in &self.options {
            if option.id.trim().is_empty() {
                return Err(IntakeError::Configuration {
                    message: "Service option with empty id".to_string(),
                });
            }
            if !seen.insert(option.id.as_str()) {
                return Err(IntakeError::Configuration {
                    message: format!("Duplicate service option id: {}", option.id),
                });
            }
        }
        Ok(())
    }
}
