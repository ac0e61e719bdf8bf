//! Receivable/payable summary over party balances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use probill_core::ValueObject;

use crate::party::{PartyKind, PartyRecord};

/// Totals owed to and by the business.
///
/// `total_payable` is a non-negative magnitude. Zero balances count towards
/// neither side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyBalanceSummary {
    pub total_receivable: Decimal,
    pub total_payable: Decimal,
    pub customer_count: usize,
    pub supplier_count: usize,
}

impl PartyBalanceSummary {
    /// Partition bare signed balances. Party counts stay zero.
    pub fn from_balances(balances: impl IntoIterator<Item = Decimal>) -> Self {
        let mut summary = Self::default();
        for balance in balances {
            summary.add_balance(balance);
        }
        summary
    }

    fn add_balance(&mut self, balance: Decimal) {
        if balance > Decimal::ZERO {
            self.total_receivable += balance;
        } else if balance < Decimal::ZERO {
            self.total_payable += balance.abs();
        }
    }

    /// Receivable minus payable.
    pub fn net_position(&self) -> Decimal {
        self.total_receivable - self.total_payable
    }
}

impl ValueObject for PartyBalanceSummary {}

/// Summarise balances and party counts over `parties`.
pub fn summarize_balances<'a>(
    parties: impl IntoIterator<Item = &'a PartyRecord>,
) -> PartyBalanceSummary {
    let summary = parties
        .into_iter()
        .fold(PartyBalanceSummary::default(), |mut summary, party| {
            summary.add_balance(party.balance);
            match party.kind {
                PartyKind::Customer => summary.customer_count += 1,
                PartyKind::Supplier => summary.supplier_count += 1,
            }
            summary
        });

    tracing::trace!(
        receivable = %summary.total_receivable,
        payable = %summary.total_payable,
        "party balances summarised"
    );
    summary
}
