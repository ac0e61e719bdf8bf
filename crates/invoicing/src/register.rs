//! Invoice register: the list of issued sales and purchase invoices.

use core::fmt;
use core::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use probill_core::{Categorized, DomainError, Searchable, ValueObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    /// Still awaiting payment.
    pub fn is_outstanding(self) -> bool {
        matches!(self, InvoiceStatus::Pending | InvoiceStatus::Overdue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceKind {
    Sales,
    Purchase,
}

impl fmt::Display for InvoiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceKind::Sales => f.write_str("sales"),
            InvoiceKind::Purchase => f.write_str("purchase"),
        }
    }
}

impl FromStr for InvoiceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sales" | "sale" => Ok(InvoiceKind::Sales),
            "purchase" | "purchases" => Ok(InvoiceKind::Purchase),
            other => Err(DomainError::validation(format!("unknown invoice kind: {other}"))),
        }
    }
}

/// One row of the invoice register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub number: String,
    pub party: String,
    /// Invoice grand total.
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
    pub kind: InvoiceKind,
}

impl Searchable for InvoiceRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.number.as_str(), self.party.as_str()]
    }
}

impl Categorized for InvoiceRecord {
    type Category = InvoiceKind;

    fn category(&self) -> &InvoiceKind {
        &self.kind
    }
}

/// Count and amount of invoices sharing a status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTally {
    pub count: usize,
    pub amount: Decimal,
}

impl StatusTally {
    fn record(&mut self, amount: Decimal) {
        self.count += 1;
        self.amount += amount;
    }
}

/// Aggregate figures over the invoice register.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterSummary {
    pub sales_total: Decimal,
    pub purchase_total: Decimal,
    /// Sales invoices not yet paid (pending or overdue).
    pub outstanding: Decimal,
    pub paid: StatusTally,
    pub pending: StatusTally,
    pub overdue: StatusTally,
}

impl RegisterSummary {
    pub fn compute<'a>(records: impl IntoIterator<Item = &'a InvoiceRecord>) -> Self {
        records.into_iter().fold(Self::default(), |mut summary, record| {
            match record.kind {
                InvoiceKind::Sales => {
                    summary.sales_total += record.amount;
                    if record.status.is_outstanding() {
                        summary.outstanding += record.amount;
                    }
                }
                InvoiceKind::Purchase => summary.purchase_total += record.amount,
            }
            match record.status {
                InvoiceStatus::Paid => summary.paid.record(record.amount),
                InvoiceStatus::Pending => summary.pending.record(record.amount),
                InvoiceStatus::Overdue => summary.overdue.record(record.amount),
            }
            summary
        })
    }

    pub fn invoice_count(&self) -> usize {
        self.paid.count + self.pending.count + self.overdue.count
    }
}

impl ValueObject for RegisterSummary {}

/// The `n` most recent invoices, newest first. Ties keep input order.
pub fn recent<'a>(
    records: impl IntoIterator<Item = &'a InvoiceRecord>,
    n: usize,
) -> Vec<&'a InvoiceRecord> {
    let mut sorted: Vec<&InvoiceRecord> = records.into_iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_invoices;
    use probill_core::{RecordFilter, RecordSource, Selection};
    use rust_decimal_macros::dec;

    #[test]
    fn summary_over_sample_register() {
        let invoices = sample_invoices().unwrap().list();
        let summary = RegisterSummary::compute(&invoices);

        assert_eq!(summary.sales_total, dec!(149100));
        assert_eq!(summary.purchase_total, dec!(125000));
        assert_eq!(summary.outstanding, dec!(35700));
        assert_eq!(summary.paid.count, 3);
        assert_eq!(
            summary.pending,
            StatusTally {
                count: 1,
                amount: dec!(23400),
            }
        );
        assert_eq!(
            summary.overdue,
            StatusTally {
                count: 1,
                amount: dec!(12300),
            }
        );
        assert_eq!(summary.invoice_count(), 5);
    }

    #[test]
    fn empty_register_is_zero() {
        let summary = RegisterSummary::compute(&Vec::<InvoiceRecord>::new());
        assert_eq!(summary, RegisterSummary::default());
    }

    #[test]
    fn recent_is_newest_first_and_stable() {
        let invoices = sample_invoices().unwrap().list();
        let numbers: Vec<&str> = recent(&invoices, 3)
            .into_iter()
            .map(|r| r.number.as_str())
            .collect();
        assert_eq!(numbers, vec!["INV-1024", "INV-1023", "INV-1022"]);
        assert_eq!(recent(&invoices, 10).len(), 5);
    }

    #[test]
    fn register_search_by_number_or_party() {
        let invoices = sample_invoices().unwrap().list();

        let by_party = RecordFilter::<InvoiceKind>::default().with_query("city");
        let hits = by_party.apply(&invoices);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].number, "INV-1022");

        let purchases = RecordFilter::<InvoiceKind>::default()
            .with_query("pur")
            .with_selection(Selection::parse("purchase").unwrap());
        assert_eq!(purchases.apply(&invoices).len(), 1);
    }

    #[test]
    fn kind_parsing() {
        assert_eq!("Sales".parse::<InvoiceKind>().unwrap(), InvoiceKind::Sales);
        assert!("estimate".parse::<InvoiceKind>().is_err());
    }
}
