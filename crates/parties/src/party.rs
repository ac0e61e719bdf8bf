use core::fmt;
use core::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use probill_core::{Categorized, DomainError, Searchable};

/// Party kind: customer or supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyKind {
    Customer,
    Supplier,
}

impl fmt::Display for PartyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartyKind::Customer => f.write_str("customer"),
            PartyKind::Supplier => f.write_str("supplier"),
        }
    }
}

/// Accepts both the singular kind and the plural tab names (`customers`).
impl FromStr for PartyKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "customer" | "customers" => Ok(PartyKind::Customer),
            "supplier" | "suppliers" => Ok(PartyKind::Supplier),
            other => Err(DomainError::validation(format!("unknown party kind: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyStatus {
    Active,
    Inactive,
}

/// Which side of the ledger a balance sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceSide {
    /// Owed to the business ("Dr").
    Debit,
    /// Owed by the business ("Cr").
    Credit,
    Settled,
}

impl BalanceSide {
    pub fn of(balance: Decimal) -> Self {
        if balance > Decimal::ZERO {
            BalanceSide::Debit
        } else if balance < Decimal::ZERO {
            BalanceSide::Credit
        } else {
            BalanceSide::Settled
        }
    }

    /// Ledger marker shown next to the magnitude, if any.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            BalanceSide::Debit => Some("Dr"),
            BalanceSide::Credit => Some("Cr"),
            BalanceSide::Settled => None,
        }
    }
}

/// A customer or supplier with a signed running balance.
///
/// Positive balances are owed to the business, negative ones are owed by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRecord {
    pub code: String,
    pub name: String,
    pub kind: PartyKind,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gstin: String,
    pub balance: Decimal,
    pub status: PartyStatus,
    pub last_transaction: Option<NaiveDate>,
    #[serde(default)]
    pub total_sales: Decimal,
}

impl PartyRecord {
    pub fn balance_side(&self) -> BalanceSide {
        BalanceSide::of(self.balance)
    }

    pub fn is_active(&self) -> bool {
        self.status == PartyStatus::Active
    }
}

impl Searchable for PartyRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.phone.as_str(), self.email.as_str()]
    }
}

impl Categorized for PartyRecord {
    type Category = PartyKind;

    fn category(&self) -> &PartyKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_parties;
    use probill_core::{RecordFilter, RecordSource, Selection};
    use rust_decimal_macros::dec;

    #[test]
    fn balance_side_follows_sign() {
        assert_eq!(BalanceSide::of(dec!(45600)), BalanceSide::Debit);
        assert_eq!(BalanceSide::of(dec!(-23400)), BalanceSide::Credit);
        assert_eq!(BalanceSide::of(Decimal::ZERO), BalanceSide::Settled);
        assert_eq!(BalanceSide::of(dec!(-0.00)), BalanceSide::Settled);
        assert_eq!(BalanceSide::Credit.marker(), Some("Cr"));
        assert_eq!(BalanceSide::Settled.marker(), None);
    }

    #[test]
    fn filter_by_tab_and_search() {
        let parties = sample_parties().unwrap().list();

        let suppliers = RecordFilter::<PartyKind>::default()
            .with_selection(Selection::parse("suppliers").unwrap());
        let hits = suppliers.apply(&parties);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "S001");

        let by_email = RecordFilter::<PartyKind>::default()
            .with_query("TRADERS.COM")
            .with_selection(Selection::parse("all").unwrap());
        assert_eq!(by_email.apply(&parties)[0].name, "Modern Traders");

        let by_phone = RecordFilter::<PartyKind>::default()
            .with_query("43214")
            .with_selection(Selection::Only(PartyKind::Customer));
        assert_eq!(by_phone.apply(&parties)[0].code, "C004");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!("vendor".parse::<PartyKind>().is_err());
        assert_eq!("Customers".parse::<PartyKind>().unwrap(), PartyKind::Customer);
    }
}
