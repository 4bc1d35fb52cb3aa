//! Price summation for a form payload.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::{Amount, FormPayload, ServiceCatalog};

/// One priced line of a quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteLine {
    pub label: String,
    pub amount: Amount,
}

/// Itemized price of a payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub currency: String,
    pub lines: Vec<QuoteLine>,
    pub total: Amount,
}

/// Prices a payload: base fee, plus the surcharge of every selected option
/// known to the catalog, plus the per-document fee for each document.
/// Selected ids the catalog does not know are ignored.
pub fn quote(catalog: &ServiceCatalog, payload: &FormPayload) -> Quote {
    let mut lines = vec![QuoteLine {
        label: "Base fee".to_string(),
        amount: catalog.base_fee,
    }];

    for id in &payload.selected_service_ids {
        match catalog.option(id) {
            Some(option) => lines.push(QuoteLine {
                label: option.name.clone(),
                amount: option.surcharge,
            }),
            None => warn!("Ignoring unknown service id '{id}' in quote"),
        }
    }

    let documents = payload.documents.len() as u64;
    if documents > 0 {
        lines.push(QuoteLine {
            label: format!("Documents ({documents} × {})", catalog.per_document_fee),
            amount: catalog.per_document_fee.times(documents),
        });
    }

    let total = lines.iter().map(|line| line.amount).sum();
    Quote {
        currency: catalog.currency.clone(),
        lines,
        total,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::models::{DocumentEntry, PayloadPatch};

    fn document(name: &str) -> DocumentEntry {
        DocumentEntry {
            name: name.to_string(),
            byte_size: 1024,
            mime_type: "application/pdf".to_string(),
            local_handle: PathBuf::from(format!("/tmp/{name}")),
        }
    }

    #[test]
    fn test_empty_payload_costs_base_fee() {
        let catalog = ServiceCatalog::default();
        let quote = quote(&catalog, &FormPayload::default());
        assert_eq!(quote.total, catalog.base_fee);
        assert_eq!(quote.lines.len(), 1);
    }

    #[test]
    fn test_urgent_home_visit_two_documents() {
        let catalog = ServiceCatalog::default();
        let mut payload = FormPayload::default();
        payload.merge(PayloadPatch::services(["urgent", "home-visit"]));
        payload.merge(PayloadPatch::documents(vec![document("a.pdf"), document("b.pdf")]));

        let surcharge = |id: &str| catalog.option(id).map(|o| o.surcharge).unwrap_or_default();
        let expected = catalog.base_fee
            + surcharge("urgent")
            + surcharge("home-visit")
            + catalog.per_document_fee.times(2);

        let quote = quote(&catalog, &payload);
        assert_eq!(quote.total, expected);
        assert_eq!(quote.total, Amount::new(95, 0));
        assert_eq!(quote.currency, "EUR");
    }

    #[test]
    fn test_unknown_service_ids_are_ignored() {
        let catalog = ServiceCatalog::default();
        let mut payload = FormPayload::default();
        payload.merge(PayloadPatch::services(["teleportation"]));
        assert_eq!(quote(&catalog, &payload).total, catalog.base_fee);
    }

    #[test]
    fn test_oversized_catalog_does_not_panic() {
        let mut catalog = ServiceCatalog::default();
        catalog.base_fee = Amount(u64::MAX - 10);
        let mut payload = FormPayload::default();
        payload.merge(PayloadPatch::services(["urgent"]));
        assert_eq!(quote(&catalog, &payload).total, Amount(u64::MAX));
    }
}
