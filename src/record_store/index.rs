//! Version index keyed by identity and valid start time

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::types::{Identity, Record, RecordId};

/// Maps each `(identity, valid_start_time)` to its version chain
///
/// Chains hold store positions in insertion order. Valid times iterate in
/// ascending order.
#[derive(Debug, Default, Clone)]
pub(crate) struct VersionIndex {
    chains: BTreeMap<Identity, BTreeMap<NaiveDateTime, Vec<RecordId>>>,
}

impl VersionIndex {
    pub fn insert(&mut self, id: RecordId, record: &Record) {
        self.chains
            .entry(record.identity.clone())
            .or_default()
            .entry(record.valid_start_time)
            .or_default()
            .push(id);
    }

    /// Unwind the entry for `record`, which must be the most recent insert
    pub fn remove(&mut self, id: RecordId, record: &Record) {
        let Some(by_valid) = self.chains.get_mut(&record.identity) else {
            return;
        };
        if let Some(chain) = by_valid.get_mut(&record.valid_start_time) {
            if chain.last() == Some(&id) {
                chain.pop();
            } else {
                chain.retain(|&existing| existing != id);
            }
            if chain.is_empty() {
                by_valid.remove(&record.valid_start_time);
            }
        }
        if by_valid.is_empty() {
            self.chains.remove(&record.identity);
        }
    }

    /// Version chains for one identity, ascending by valid start time
    pub fn chains(
        &self,
        identity: &Identity,
    ) -> impl Iterator<Item = (&NaiveDateTime, &[RecordId])> + '_ {
        self.chains
            .get(identity)
            .into_iter()
            .flat_map(|by_valid| by_valid.iter().map(|(t, ids)| (t, ids.as_slice())))
    }

    pub fn identities(&self) -> impl Iterator<Item = &Identity> + '_ {
        self.chains.keys()
    }
}
