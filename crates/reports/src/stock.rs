//! Stock report grouped by product category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use probill_core::money::{ratio_percent, round_minor};
use probill_inventory::ProductRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockCategoryRow {
    pub category: String,
    pub items: Decimal,
    pub value: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReport {
    rows: Vec<StockCategoryRow>,
}

impl StockReport {
    pub fn new(rows: Vec<StockCategoryRow>) -> Self {
        Self { rows }
    }

    /// Group products by category, in order of first appearance.
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a ProductRecord>) -> Self {
        let mut rows: Vec<StockCategoryRow> = Vec::new();
        for product in products {
            match rows.iter_mut().find(|r| r.category == product.category) {
                Some(row) => {
                    row.items += product.stock;
                    row.value += product.stock_value();
                }
                None => rows.push(StockCategoryRow {
                    category: product.category.clone(),
                    items: product.stock,
                    value: product.stock_value(),
                }),
            }
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[StockCategoryRow] {
        &self.rows
    }

    pub fn total_items(&self) -> Decimal {
        self.rows.iter().map(|r| r.items).sum()
    }

    pub fn total_value(&self) -> Decimal {
        self.rows.iter().map(|r| r.value).sum()
    }

    /// Share of the report's total value held by `row`, 2 dp.
    pub fn share_percent(&self, row: &StockCategoryRow) -> Option<Decimal> {
        ratio_percent(row.value, self.total_value()).map(round_minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_stock_report;
    use probill_core::RecordSource;
    use probill_inventory::fixtures::sample_products;
    use rust_decimal_macros::dec;

    #[test]
    fn category_report_totals_and_shares() {
        let report = sample_stock_report().unwrap();
        assert_eq!(report.total_items(), dec!(1247));
        assert_eq!(report.total_value(), dec!(1515700));

        let shares: Vec<Option<Decimal>> =
            report.rows().iter().map(|r| report.share_percent(r)).collect();
        assert_eq!(
            shares,
            vec![Some(dec!(44.79)), Some(dec!(22.80)), Some(dec!(15.47)), Some(dec!(16.94))]
        );
    }

    #[test]
    fn grouped_from_catalogue() {
        let products = sample_products().unwrap().list();
        let report = StockReport::from_products(&products);

        let categories: Vec<&str> = report.rows().iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["Electronics", "Clothing", "Groceries", "Stationery"]);
        assert_eq!(report.rows()[0].items, dec!(48));
        assert_eq!(report.rows()[0].value, dec!(187500));
        assert_eq!(report.total_value(), dec!(203400));
    }

    #[test]
    fn empty_report_has_no_shares() {
        let report = StockReport::new(vec![StockCategoryRow {
            category: "Empty".into(),
            items: Decimal::ZERO,
            value: Decimal::ZERO,
        }]);
        assert_eq!(report.share_percent(&report.rows()[0]), None);
    }
}
