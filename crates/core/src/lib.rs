//! `probill-core`: shared building blocks for the billing domain crates.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, decimal money helpers, record filtering and the record
//! source abstraction the summaries are computed over.

pub mod error;
pub mod filter;
pub mod money;
pub mod source;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use filter::{Categorized, RecordFilter, Searchable, Selection, TextQuery};
pub use source::{InMemorySource, RecordSource};
pub use value_object::ValueObject;
