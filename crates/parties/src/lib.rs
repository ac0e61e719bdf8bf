//! Parties domain module (customers and suppliers).
//!
//! Party records with their running balances, and the receivable/payable
//! summary derived from them. Pure domain logic (no IO, no HTTP, no storage).

pub mod balance;
pub mod fixtures;
pub mod party;

pub use balance::{PartyBalanceSummary, summarize_balances};
pub use party::{BalanceSide, PartyKind, PartyRecord, PartyStatus};
