//! Sample product catalogue shipped with the crate.

use probill_core::{DomainResult, InMemorySource};

use crate::product::ProductRecord;

const SAMPLE_PRODUCTS: &str = include_str!("../fixtures/products.json");

pub fn sample_products() -> DomainResult<InMemorySource<ProductRecord>> {
    InMemorySource::from_json(SAMPLE_PRODUCTS)
}
