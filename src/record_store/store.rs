//! Record Store - append-only record log
//!
//! The RecordStore keeps every record version in insertion order and
//! maintains the version index alongside it.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::types::{Identity, LedgerError, LedgerResult, Record, RecordId};

use super::index::VersionIndex;

/// The RecordStore manages the append-only sequence of record versions
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    index: VersionIndex,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records` in the given order
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut store = Self::new();
        for record in records {
            store.append(record);
        }
        store
    }

    /// Append a record version
    ///
    /// This is the only way a record enters the store.
    pub fn append(&mut self, record: Record) -> RecordId {
        let id = RecordId(self.records.len());
        self.index.insert(id, &record);
        self.records.push(record);
        id
    }

    /// Re-append a record previously taken off the end
    pub fn reappend(&mut self, record: Record) -> RecordId {
        let id = self.append(record);
        debug!(position = id.0, "record re-appended");
        id
    }

    /// Remove the most recently appended record
    pub fn remove_last(&mut self) -> LedgerResult<Record> {
        let record = self.records.pop().ok_or(LedgerError::EmptyStore)?;
        let id = RecordId(self.records.len());
        self.index.remove(id, &record);
        debug!(position = id.0, identity = %record.identity, "last record removed");
        Ok(record)
    }

    /// All records in insertion order
    pub fn snapshot(&self) -> &[Record] {
        &self.records
    }

    /// Get a record by position
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Version chains for an identity, ascending by valid start time
    ///
    /// Each chain lists the record versions for one valid instant in
    /// insertion order.
    pub fn versions<'a>(
        &'a self,
        identity: &Identity,
    ) -> impl Iterator<Item = (NaiveDateTime, Vec<&'a Record>)> + 'a {
        let records = &self.records;
        self.index.chains(identity).map(move |(valid, ids)| {
            let chain = ids.iter().filter_map(|id| records.get(id.0)).collect();
            (*valid, chain)
        })
    }

    /// Distinct identities present in the store, sorted
    pub fn identities(&self) -> impl Iterator<Item = &Identity> + '_ {
        self.index.identities()
    }
}
