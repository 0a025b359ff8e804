//! Point lookup ("latest result")

use chrono::NaiveDateTime;

use crate::record_store::RecordStore;
use crate::types::{HistoryEntry, Identity, LedgerError, LedgerResult, TimeRange, ValidTime};

use super::query::believed;
use super::LabLedger;

/// Get the result believed as of `as_of` for a valid instant or day
///
/// Without an explicit `as_of` the ledger clock decides.
pub fn latest(
    ledger: &LabLedger,
    identity: &Identity,
    valid: ValidTime,
    as_of: Option<NaiveDateTime>,
) -> LedgerResult<HistoryEntry> {
    let as_of = as_of.unwrap_or_else(|| ledger.clock.now());
    resolve(&ledger.store, identity, valid, as_of)
}

pub(crate) fn resolve(
    store: &RecordStore,
    identity: &Identity,
    valid: ValidTime,
    as_of: NaiveDateTime,
) -> LedgerResult<HistoryEntry> {
    believed(store, identity, &valid.to_range(), &TimeRange::up_to(as_of))
        .pop()
        .ok_or_else(|| LedgerError::NotFound {
            identity: identity.clone(),
            valid,
        })
}
