use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use probill_core::{Categorized, Searchable};

/// Derived stock status; never stored on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
}

/// A stocked product with purchase and sale prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub code: String,
    pub name: String,
    pub category: String,
    /// HSN classification code.
    #[serde(default)]
    pub hsn: String,
    pub stock: Decimal,
    pub unit: String,
    pub purchase_price: Decimal,
    pub sale_price: Decimal,
    pub reorder_level: Decimal,
    #[serde(default)]
    pub tax_percent: Decimal,
}

impl ProductRecord {
    /// At or below the reorder level.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.reorder_level
    }

    pub fn status(&self) -> StockStatus {
        if self.is_low_stock() {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Current stock valued at purchase price.
    pub fn stock_value(&self) -> Decimal {
        self.stock * self.purchase_price
    }

    /// Margin realised if the current stock sells at the sale price.
    pub fn potential_profit(&self) -> Decimal {
        self.stock * self.unit_margin()
    }

    pub fn unit_margin(&self) -> Decimal {
        self.sale_price - self.purchase_price
    }
}

impl Searchable for ProductRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.code.as_str()]
    }
}

impl Categorized for ProductRecord {
    type Category = String;

    fn category(&self) -> &String {
        &self.category
    }
}
