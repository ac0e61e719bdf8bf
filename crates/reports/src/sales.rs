use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use probill_core::money::{ratio_percent, round_minor};

/// One day (or period) of sales against purchases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReportRow {
    pub date: NaiveDate,
    pub sales: Decimal,
    pub purchases: Decimal,
}

impl SalesReportRow {
    pub fn profit(&self) -> Decimal {
        self.sales - self.purchases
    }

    /// Profit as a percentage of sales, 2 dp. `None` without sales.
    pub fn margin_percent(&self) -> Option<Decimal> {
        ratio_percent(self.profit(), self.sales).map(round_minor)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesTotals {
    pub sales: Decimal,
    pub purchases: Decimal,
    pub profit: Decimal,
    pub margin_percent: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReport {
    rows: Vec<SalesReportRow>,
}

impl SalesReport {
    pub fn new(rows: Vec<SalesReportRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SalesReportRow] {
        &self.rows
    }

    /// Rows dated within `from..=to`.
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> Self {
        let rows = self
            .rows
            .iter()
            .filter(|r| r.date >= from && r.date <= to)
            .cloned()
            .collect();
        Self { rows }
    }

    /// Column totals; the overall margin is total profit over total sales.
    pub fn totals(&self) -> SalesTotals {
        let (sales, purchases) = self
            .rows
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(s, p), r| {
                (s + r.sales, p + r.purchases)
            });
        let profit = sales - purchases;
        SalesTotals {
            sales,
            purchases,
            profit,
            margin_percent: ratio_percent(profit, sales).map(round_minor),
        }
    }
}
