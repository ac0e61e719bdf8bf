//! Stock valuation over the product catalogue.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use probill_core::ValueObject;

use crate::product::ProductRecord;

/// Inventory-wide figures shown on the stock screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockValuation {
    pub product_count: usize,
    /// Stock valued at purchase price.
    pub total_stock_value: Decimal,
    /// Margin on current stock at sale price.
    pub potential_profit: Decimal,
    pub low_stock_count: usize,
}

impl StockValuation {
    pub fn compute<'a>(products: impl IntoIterator<Item = &'a ProductRecord>) -> Self {
        let valuation = products
            .into_iter()
            .fold(Self::default(), |mut acc, product| {
                acc.product_count += 1;
                acc.total_stock_value += product.stock_value();
                acc.potential_profit += product.potential_profit();
                if product.is_low_stock() {
                    acc.low_stock_count += 1;
                }
                acc
            });

        tracing::trace!(
            products = valuation.product_count,
            value = %valuation.total_stock_value,
            low_stock = valuation.low_stock_count,
            "stock valued"
        );
        valuation
    }
}

impl ValueObject for StockValuation {}

/// Products at or below their reorder level, in input order.
pub fn low_stock<'a>(
    products: impl IntoIterator<Item = &'a ProductRecord>,
) -> Vec<&'a ProductRecord> {
    products.into_iter().filter(|p| p.is_low_stock()).collect()
}
