//! Sample report data shipped with the crate.

use probill_core::{DomainError, DomainResult};
use serde::de::DeserializeOwned;

use crate::gst::{GstReport, GstReportRow};
use crate::sales::{SalesReport, SalesReportRow};
use crate::stock::{StockCategoryRow, StockReport};

const SAMPLE_SALES: &str = include_str!("../fixtures/sales.json");
const SAMPLE_GST: &str = include_str!("../fixtures/gst.json");
const SAMPLE_STOCK: &str = include_str!("../fixtures/stock.json");

fn decode<T: DeserializeOwned>(json: &str) -> DomainResult<Vec<T>> {
    serde_json::from_str(json).map_err(|e| DomainError::malformed(e.to_string()))
}

pub fn sample_sales_report() -> DomainResult<SalesReport> {
    decode::<SalesReportRow>(SAMPLE_SALES).map(SalesReport::new)
}

pub fn sample_gst_report() -> DomainResult<GstReport> {
    decode::<GstReportRow>(SAMPLE_GST).map(GstReport::new)
}

pub fn sample_stock_report() -> DomainResult<StockReport> {
    decode::<StockCategoryRow>(SAMPLE_STOCK).map(StockReport::new)
}
