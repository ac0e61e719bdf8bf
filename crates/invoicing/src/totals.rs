//! Invoice totals calculator.
//!
//! Subtotal and tax are folded line by line, each line taxed at its own rate.
//! The grand total and the two-way tax split are derived from those two sums on
//! read and are never stored.

use core::iter::Sum;
use core::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use probill_core::ValueObject;
use probill_core::money::round_to;

use crate::line::InvoiceLineItem;

/// Totals of a sequence of line items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceTotals {
    subtotal: Decimal,
    tax_total: Decimal,
}

impl InvoiceTotals {
    /// Totals of a single line.
    pub fn of_line(line: &InvoiceLineItem) -> Self {
        Self {
            subtotal: line.line_amount(),
            tax_total: line.line_tax(),
        }
    }

    /// Sum of post-discount, pre-tax line amounts.
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Sum of per-line tax.
    pub fn tax_total(&self) -> Decimal {
        self.tax_total
    }

    pub fn grand_total(&self) -> Decimal {
        self.subtotal + self.tax_total
    }

    /// Split the tax into two co-equal components.
    ///
    /// Only `first` is rounded to `dp` places; `second` carries the remainder at
    /// full precision. Split [`rounded`](Self::rounded) totals when both halves
    /// must be at `dp` places.
    pub fn tax_split(&self, dp: u32) -> TaxSplit {
        TaxSplit::new(self.tax_total, dp)
    }

    /// Subtotal and tax rounded to `dp` places; the grand total follows them.
    pub fn rounded(&self, dp: u32) -> Self {
        Self {
            subtotal: round_to(self.subtotal, dp),
            tax_total: round_to(self.tax_total, dp),
        }
    }
}

impl ValueObject for InvoiceTotals {}

impl Add for InvoiceTotals {
    type Output = InvoiceTotals;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            subtotal: self.subtotal + rhs.subtotal,
            tax_total: self.tax_total + rhs.tax_total,
        }
    }
}

impl AddAssign for InvoiceTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for InvoiceTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Two co-equal halves of a tax amount (CGST/SGST).
///
/// `first` is the rounded half; `second` is what remains, so the two always add
/// back up to the tax total exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxSplit {
    pub first: Decimal,
    pub second: Decimal,
}

impl TaxSplit {
    pub fn new(tax_total: Decimal, dp: u32) -> Self {
        let first = round_to(tax_total / Decimal::TWO, dp);
        Self {
            first,
            second: tax_total - first,
        }
    }

    pub fn total(&self) -> Decimal {
        self.first + self.second
    }
}

impl ValueObject for TaxSplit {}

/// Compute subtotal and tax over `items`. Empty input yields zero totals.
///
/// Inputs are not validated: negative quantities or rates flow through the
/// arithmetic unchanged.
///
/// # Panics
///
/// Panics if an intermediate product or sum leaves the `Decimal` range
/// (about 7.9e28), e.g. a quantity of 1e15 at a rate of 1e15.
pub fn compute_totals<'a>(items: impl IntoIterator<Item = &'a InvoiceLineItem>) -> InvoiceTotals {
    let mut lines = 0usize;
    let totals = items
        .into_iter()
        .inspect(|_| lines += 1)
        .map(InvoiceTotals::of_line)
        .sum::<InvoiceTotals>();

    tracing::trace!(
        lines,
        subtotal = %totals.subtotal,
        tax_total = %totals.tax_total,
        "invoice totals computed"
    );
    totals
}
