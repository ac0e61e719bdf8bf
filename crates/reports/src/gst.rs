//! GST report: taxable value and tax components per invoice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use probill_core::money::MINOR_UNIT_DP;
use probill_invoicing::InvoiceTotals;

/// Place of supply relative to the seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Supply {
    /// Same state: tax split into CGST and SGST.
    IntraState,
    /// Different state: whole tax charged as IGST.
    InterState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstReportRow {
    pub invoice: String,
    pub party: String,
    pub taxable: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
}

impl GstReportRow {
    /// Build a row from computed invoice totals, rounded to minor units.
    pub fn from_totals(
        invoice: impl Into<String>,
        party: impl Into<String>,
        totals: &InvoiceTotals,
        supply: Supply,
    ) -> Self {
        let shown = totals.rounded(MINOR_UNIT_DP);
        let (cgst, sgst, igst) = match supply {
            Supply::IntraState => {
                let split = shown.tax_split(MINOR_UNIT_DP);
                (split.first, split.second, Decimal::ZERO)
            }
            Supply::InterState => (Decimal::ZERO, Decimal::ZERO, shown.tax_total()),
        };
        Self {
            invoice: invoice.into(),
            party: party.into(),
            taxable: shown.subtotal(),
            cgst,
            sgst,
            igst,
        }
    }

    pub fn tax(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }

    pub fn total(&self) -> Decimal {
        self.taxable + self.tax()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstTotals {
    pub taxable: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstReport {
    rows: Vec<GstReportRow>,
}

impl GstReport {
    pub fn new(rows: Vec<GstReportRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[GstReportRow] {
        &self.rows
    }

    pub fn totals(&self) -> GstTotals {
        self.rows.iter().fold(GstTotals::default(), |mut acc, row| {
            acc.taxable += row.taxable;
            acc.cgst += row.cgst;
            acc.sgst += row.sgst;
            acc.igst += row.igst;
            acc.total += row.total();
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_gst_report;
    use probill_invoicing::{InvoiceLineItem, compute_totals};
    use rust_decimal_macros::dec;

    #[test]
    fn intra_state_row_splits_tax() {
        let totals = compute_totals(&[InvoiceLineItem::new(
            dec!(1),
            dec!(1000),
            dec!(10),
            dec!(18),
        )]);
        let row = GstReportRow::from_totals("INV-1025", "City Mart", &totals, Supply::IntraState);

        assert_eq!(row.taxable, dec!(900));
        assert_eq!(row.cgst, dec!(81));
        assert_eq!(row.sgst, dec!(81));
        assert!(row.igst.is_zero());
        assert_eq!(row.total(), totals.grand_total());
    }

    #[test]
    fn inter_state_row_is_all_igst() {
        let totals = compute_totals(&[InvoiceLineItem::new(
            dec!(1),
            dec!(0.25),
            dec!(0),
            dec!(18),
        )]);
        let row =
            GstReportRow::from_totals("INV-1026", "Raj Electronics", &totals, Supply::InterState);

        assert_eq!(row.taxable, dec!(0.25));
        assert_eq!(row.igst, dec!(0.05));
        assert!(row.cgst.is_zero() && row.sgst.is_zero());
    }

    #[test]
    fn odd_cent_tax_still_balances() {
        let totals = compute_totals(&[InvoiceLineItem::new(
            dec!(1),
            dec!(0.25),
            dec!(0),
            dec!(18),
        )]);
        let row =
            GstReportRow::from_totals("INV-1027", "Modern Traders", &totals, Supply::IntraState);

        assert_eq!(row.cgst, dec!(0.03));
        assert_eq!(row.sgst, dec!(0.02));
        assert_eq!(row.tax(), dec!(0.05));
    }

    #[test]
    fn report_totals() {
        let totals = sample_gst_report().unwrap().totals();
        assert_eq!(totals.taxable, dec!(115932));
        assert_eq!(totals.cgst, dec!(10438));
        assert_eq!(totals.sgst, dec!(10438));
        assert_eq!(totals.igst, dec!(0));
        assert_eq!(totals.total, dec!(136808));
    }
}
