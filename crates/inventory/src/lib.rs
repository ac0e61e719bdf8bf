//! Inventory domain module.
//!
//! Product records, stock valuation and low-stock detection, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod fixtures;
pub mod product;
pub mod valuation;

pub use product::{ProductRecord, StockStatus};
pub use valuation::{StockValuation, low_stock};
