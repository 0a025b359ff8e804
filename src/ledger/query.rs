//! Temporal query operations

use crate::record_store::RecordStore;
use crate::types::{HistoryEntry, Identity, Record, TimeRange};

use super::LabLedger;

/// Reconstruct the believed results for one identity
///
/// One entry per valid start time surviving both range filters, ascending
/// by valid start time. A valid-time group is dropped entirely when any of
/// its surviving versions is a tombstone. Within a retained group the
/// version with the greatest transaction time wins, and among equal
/// transaction times the one inserted last.
pub fn history(
    ledger: &LabLedger,
    identity: &Identity,
    valid_range: &TimeRange,
    transaction_range: &TimeRange,
) -> Vec<HistoryEntry> {
    believed(&ledger.store, identity, valid_range, transaction_range)
}

pub(crate) fn believed(
    store: &RecordStore,
    identity: &Identity,
    valid_range: &TimeRange,
    transaction_range: &TimeRange,
) -> Vec<HistoryEntry> {
    store
        .versions(identity)
        .filter(|(valid, _)| valid_range.contains(*valid))
        .filter_map(|(_, chain)| {
            let surviving: Vec<&Record> = chain
                .into_iter()
                .filter(|r| transaction_range.contains(r.transaction_time))
                .collect();

            if surviving.iter().any(|r| r.is_tombstone()) {
                return None;
            }

            // Chains are in insertion order and max_by_key keeps the last maximum
            let latest = surviving.into_iter().max_by_key(|r| r.transaction_time)?;
            to_entry(latest)
        })
        .collect()
}

fn to_entry(record: &Record) -> Option<HistoryEntry> {
    Some(HistoryEntry {
        value: record.value.as_measured()?.to_string(),
        unit: record.unit.clone(),
        valid_start_time: record.valid_start_time,
        transaction_time: record.transaction_time,
    })
}
