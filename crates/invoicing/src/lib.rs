//! Invoicing domain module.
//!
//! Invoice line items and the totals calculator, the invoice register (list)
//! and invoice numbering. Everything here is deterministic domain logic (no IO,
//! no HTTP, no storage).

pub mod fixtures;
pub mod line;
pub mod numbering;
pub mod register;
pub mod totals;

pub use line::InvoiceLineItem;
pub use numbering::{InvoiceNumbering, due_date};
pub use register::{InvoiceKind, InvoiceRecord, InvoiceStatus, RegisterSummary, StatusTally, recent};
pub use totals::{InvoiceTotals, TaxSplit, compute_totals};
