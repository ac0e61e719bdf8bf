//! Record sources: where the summaries get their input sequences from.

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;

use crate::error::{DomainError, DomainResult};

/// Supplies a fresh snapshot of records on every call.
///
/// Calculators consume the returned sequence; they never hold on to the source.
pub trait RecordSource<R>: Send + Sync {
    fn list(&self) -> Vec<R>;

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

impl<R, S> RecordSource<R> for Arc<S>
where
    S: RecordSource<R> + ?Sized,
{
    fn list(&self) -> Vec<R> {
        (**self).list()
    }
}

/// In-memory record source for fixtures, tests and dev.
#[derive(Debug)]
pub struct InMemorySource<R> {
    inner: RwLock<Vec<R>>,
}

impl<R> InMemorySource<R> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    pub fn from_records(records: Vec<R>) -> Self {
        Self {
            inner: RwLock::new(records),
        }
    }

    pub fn push(&self, record: R) {
        if let Ok(mut records) = self.inner.write() {
            records.push(record);
        }
    }

    /// Replace the whole record set.
    pub fn replace(&self, records: Vec<R>) {
        if let Ok(mut current) = self.inner.write() {
            *current = records;
        }
    }
}

impl<R: DeserializeOwned> InMemorySource<R> {
    /// Decode a JSON array of records.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let records: Vec<R> =
            serde_json::from_str(json).map_err(|e| DomainError::malformed(e.to_string()))?;
        tracing::debug!(count = records.len(), "loaded records from json");
        Ok(Self::from_records(records))
    }
}

impl<R> Default for InMemorySource<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RecordSource<R> for InMemorySource<R>
where
    R: Clone + Send + Sync + 'static,
{
    fn list(&self) -> Vec<R> {
        match self.inner.read() {
            Ok(records) => records.clone(),
            Err(_) => vec![],
        }
    }
}
