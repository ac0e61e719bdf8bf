//! Value object trait: equality by value, not identity.
//!
//! Every derived result in this workspace (invoice totals, tax splits, balance
//! summaries, valuations) is a value object: it is produced by a pure function,
//! never mutated in place, and two results with the same values are the same
//! result.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "change" one,
/// compute a new one from the source records.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct TaxSplit { first: Decimal, second: Decimal }
///
/// impl ValueObject for TaxSplit {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
