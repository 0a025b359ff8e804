//! Lab Ledger - Core bitemporal engine
//!
//! This module contains the engine value that owns the record store, the
//! virtual clock and the undo register, plus the query and mutation
//! operations built on top of them.

mod listing;
mod lookup;
mod mutate;
mod query;
mod undo;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::catalog::{CodeCatalog, CodeTable};
use crate::config::LedgerConfig;
use crate::record_store::{load_dataset, RecordStore};
use crate::types::{
    HistoryEntry, Identity, LedgerResult, Mutation, Record, RecordId, ResultValue, TimeRange,
    ValidTime,
};
use crate::utils::time::VirtualClock;

pub use undo::UndoRegister;

/// Bitemporal ledger of test results
///
/// Queries take `&self`; anything that appends, removes or moves the clock
/// takes `&mut self`.
#[derive(Debug, Default, Clone)]
pub struct LabLedger {
    pub(crate) store: RecordStore,
    pub(crate) clock: VirtualClock,
    pub(crate) undo: UndoRegister,
    pub(crate) catalog: CodeTable,
}

impl LabLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger over an initial record set
    ///
    /// The bulk load is not an undoable append.
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        Self {
            store: RecordStore::with_records(records),
            ..Self::default()
        }
    }

    /// Attach a code catalog
    pub fn with_catalog(mut self, catalog: CodeTable) -> Self {
        self.catalog = catalog;
        self
    }

    /// Load the dataset and code table named by `config`
    ///
    /// A missing code table file leaves the catalog empty.
    pub fn open(config: &LedgerConfig) -> LedgerResult<Self> {
        let records = load_dataset(config.records_path())?;
        let mut ledger = Self::with_records(records);

        if let Some(path) = config.code_table_path() {
            if path.exists() {
                ledger.catalog = CodeTable::load_csv(path)?;
            } else {
                warn!(path = %path.display(), "code table not found, catalog left empty");
            }
        }

        info!(records = ledger.store.len(), "ledger opened");
        Ok(ledger)
    }

    /// All record versions in insertion order
    pub fn records(&self) -> &[Record] {
        self.store.snapshot()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn catalog(&self) -> &CodeTable {
        &self.catalog
    }

    pub fn undo_register(&self) -> &UndoRegister {
        &self.undo
    }

    /// Look up the display name of a test code
    pub fn name_for_code(&self, code: &str) -> Option<&str> {
        self.catalog.name_for_code(code)
    }

    // Virtual clock

    pub fn set_clock(&mut self, t: NaiveDateTime) {
        self.clock.set(t);
    }

    pub fn unset_clock(&mut self) {
        self.clock.unset();
    }

    /// Current instant as seen by the ledger
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn clock(&self) -> &VirtualClock {
        &self.clock
    }

    /// Append through the undo register (internal helper for insert and mutate)
    pub(crate) fn append(&mut self, record: Record) -> RecordId {
        let id = self.store.append(record);
        self.undo.record_append();
        debug!(position = id.0, "record appended");
        id
    }
}

// Operations from submodules
impl LabLedger {
    // Query operations (from query.rs)
    pub fn history(
        &self,
        identity: &Identity,
        valid_range: &TimeRange,
        transaction_range: &TimeRange,
    ) -> Vec<HistoryEntry> {
        query::history(self, identity, valid_range, transaction_range)
    }

    // Point lookup (from lookup.rs)
    pub fn latest(
        &self,
        identity: &Identity,
        valid: ValidTime,
        as_of: Option<NaiveDateTime>,
    ) -> LedgerResult<HistoryEntry> {
        lookup::latest(self, identity, valid, as_of)
    }

    // Mutations (from mutate.rs)
    pub fn insert(&mut self, record: Record) -> RecordId {
        mutate::insert(self, record)
    }

    pub fn mutate(
        &mut self,
        identity: &Identity,
        valid: ValidTime,
        acting_time: Option<NaiveDateTime>,
        new_value: ResultValue,
    ) -> LedgerResult<Mutation> {
        mutate::mutate(self, identity, valid, acting_time, new_value)
    }

    pub fn update(
        &mut self,
        identity: &Identity,
        valid: ValidTime,
        acting_time: Option<NaiveDateTime>,
        value: impl Into<String>,
    ) -> LedgerResult<Mutation> {
        mutate::mutate(
            self,
            identity,
            valid,
            acting_time,
            ResultValue::Measured(value.into()),
        )
    }

    pub fn delete(
        &mut self,
        identity: &Identity,
        valid: ValidTime,
        acting_time: Option<NaiveDateTime>,
    ) -> LedgerResult<Mutation> {
        mutate::mutate(self, identity, valid, acting_time, ResultValue::Tombstone)
    }

    // Undo/redo (from undo.rs)
    pub fn undo(&mut self) -> LedgerResult<Record> {
        undo::undo(self)
    }

    pub fn redo(&mut self) -> LedgerResult<Record> {
        undo::redo(self)
    }

    // Listing operations (from listing.rs)
    pub fn first_names(&self) -> Vec<String> {
        listing::first_names(self)
    }

    pub fn last_names(&self) -> Vec<String> {
        listing::last_names(self)
    }

    pub fn test_codes(&self) -> Vec<String> {
        listing::test_codes(self)
    }
}
