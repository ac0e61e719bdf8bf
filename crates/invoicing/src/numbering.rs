//! Invoice numbering and payment terms.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use probill_core::{DomainError, DomainResult};

/// Sequential invoice numbers: `prefix` followed by a running counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceNumbering {
    prefix: String,
    next: u64,
}

impl InvoiceNumbering {
    pub fn new(prefix: impl Into<String>, next: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn next_value(&self) -> u64 {
        self.next
    }

    /// The number the next issued invoice will get.
    pub fn peek(&self) -> String {
        format!("{}{}", self.prefix, self.next)
    }

    /// Hand out the next number and advance the counter.
    pub fn issue(&mut self) -> DomainResult<String> {
        let number = self.peek();
        self.next = self
            .next
            .checked_add(1)
            .ok_or_else(|| DomainError::invariant("invoice number sequence exhausted"))?;
        tracing::debug!(%number, "invoice number issued");
        Ok(number)
    }
}

/// Payment due date: `issued` plus `terms_days`.
pub fn due_date(issued: NaiveDate, terms_days: u32) -> DomainResult<NaiveDate> {
    issued
        .checked_add_days(Days::new(u64::from(terms_days)))
        .ok_or_else(|| DomainError::invariant("due date out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_advances_sequence() {
        let mut numbering = InvoiceNumbering::new("INV-", 1025);
        assert_eq!(numbering.peek(), "INV-1025");
        assert_eq!(numbering.issue().unwrap(), "INV-1025");
        assert_eq!(numbering.issue().unwrap(), "INV-1026");
        assert_eq!(numbering.next_value(), 1027);
    }

    #[test]
    fn exhausted_sequence_is_rejected() {
        let mut numbering = InvoiceNumbering::new("INV-", u64::MAX);
        let err = numbering.issue().unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(numbering.next_value(), u64::MAX);
    }

    #[test]
    fn due_date_adds_terms() {
        let issued = NaiveDate::from_ymd_opt(2024, 10, 19).unwrap();
        assert_eq!(
            due_date(issued, 30).unwrap(),
            NaiveDate::from_ymd_opt(2024, 11, 18).unwrap()
        );
        assert_eq!(due_date(issued, 0).unwrap(), issued);
    }
}
