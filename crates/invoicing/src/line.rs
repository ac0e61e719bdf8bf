use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use probill_core::money::{discount_factor, percent_of};

fn default_unit() -> String {
    "PCS".to_string()
}

/// One billed product/service row of an invoice.
///
/// The extended amount is not a field: [`InvoiceLineItem::line_amount`] derives
/// it from quantity, rate and discount on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    #[serde(default)]
    pub item_name: String,
    /// HSN/SAC classification code.
    #[serde(default)]
    pub hsn: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    pub quantity: Decimal,
    pub unit_rate: Decimal,
    #[serde(default)]
    pub discount_percent: Decimal,
    #[serde(default)]
    pub tax_percent: Decimal,
}

impl InvoiceLineItem {
    pub fn new(
        quantity: Decimal,
        unit_rate: Decimal,
        discount_percent: Decimal,
        tax_percent: Decimal,
    ) -> Self {
        Self {
            item_name: String::new(),
            hsn: String::new(),
            unit: default_unit(),
            quantity,
            unit_rate,
            discount_percent,
            tax_percent,
        }
    }

    /// A fresh editor row: one unit at zero rate, no discount.
    pub fn blank(default_tax_percent: Decimal) -> Self {
        Self::new(Decimal::ONE, Decimal::ZERO, Decimal::ZERO, default_tax_percent)
    }

    pub fn describe(
        mut self,
        item_name: impl Into<String>,
        hsn: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        self.item_name = item_name.into();
        self.hsn = hsn.into();
        self.unit = unit.into();
        self
    }

    /// Post-discount, pre-tax extended price.
    pub fn line_amount(&self) -> Decimal {
        self.quantity * self.unit_rate * discount_factor(self.discount_percent)
    }

    /// Tax on this line at the line's own rate.
    pub fn line_tax(&self) -> Decimal {
        percent_of(self.line_amount(), self.tax_percent)
    }
}
