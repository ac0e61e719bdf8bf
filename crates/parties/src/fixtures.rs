//! Sample customers and suppliers shipped with the crate.

use probill_core::{DomainResult, InMemorySource};

use crate::party::PartyRecord;

const SAMPLE_PARTIES: &str = include_str!("../fixtures/parties.json");

pub fn sample_parties() -> DomainResult<InMemorySource<PartyRecord>> {
    InMemorySource::from_json(SAMPLE_PARTIES)
}
