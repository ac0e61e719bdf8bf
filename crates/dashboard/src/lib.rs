//! Dashboard snapshot: the headline figures of the business, assembled from the
//! record sources and the business settings.

pub mod snapshot;

pub use snapshot::{CategoryShare, DashboardSnapshot, LowStockItem, RECENT_INVOICE_COUNT};
