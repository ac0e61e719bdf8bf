//! Report tables: sales and profit, GST, and stock by category.
//!
//! Every derived column (profit, margin, row totals, share of total) is computed
//! from the row inputs when read.

pub mod fixtures;
pub mod gst;
pub mod sales;
pub mod stock;

pub use gst::{GstReport, GstReportRow, GstTotals, Supply};
pub use sales::{SalesReport, SalesReportRow, SalesTotals};
pub use stock::{StockCategoryRow, StockReport};
