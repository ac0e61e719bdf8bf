//! Sample invoice register shipped with the crate.

use probill_core::{DomainResult, InMemorySource};

use crate::register::InvoiceRecord;

const SAMPLE_INVOICES: &str = include_str!("../fixtures/invoices.json");

pub fn sample_invoices() -> DomainResult<InMemorySource<InvoiceRecord>> {
    InMemorySource::from_json(SAMPLE_INVOICES)
}
