//! Mutation operations
//!
//! Updates and deletes never touch existing versions. Both resolve the
//! belief in force at the acting time and append a new version on top of it.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::types::{Identity, LedgerResult, Mutation, Record, RecordId, ResultValue, ValidTime};

use super::lookup::resolve;
use super::LabLedger;

/// Insert a record version directly
pub fn insert(ledger: &mut LabLedger, record: Record) -> RecordId {
    debug!(identity = %record.identity, valid = %record.valid_start_time, "direct insert");
    ledger.append(record)
}

/// Append a new version of the result believed at `acting_time`
///
/// The new version keeps the resolved valid start time and unit and is
/// stamped with `acting_time`, or the ledger clock when none is given. A
/// `Tombstone` value records a deletion. Nothing is appended when no belief
/// resolves.
pub fn mutate(
    ledger: &mut LabLedger,
    identity: &Identity,
    valid: ValidTime,
    acting_time: Option<NaiveDateTime>,
    new_value: ResultValue,
) -> LedgerResult<Mutation> {
    let acting = acting_time.unwrap_or_else(|| ledger.clock.now());
    let previous = resolve(&ledger.store, identity, valid, acting)?;

    let current = Record::new(
        identity.clone(),
        new_value,
        previous.unit.clone(),
        previous.valid_start_time,
        acting,
    );
    ledger.append(current.clone());

    debug!(
        identity = %identity,
        valid = %current.valid_start_time,
        acting = %acting,
        previous = %previous.value,
        current = %current.value,
        "result mutated"
    );

    Ok(Mutation { previous, current })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LedgerError;
    use crate::utils::time::parse_timestamp;

    fn dt(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    fn jane() -> Identity {
        Identity::new("Jane", "Doe", "LOINC1")
    }

    fn ledger() -> LabLedger {
        LabLedger::with_records(vec![Record::new(
            jane(),
            "5.0",
            "mg/dL",
            dt("2024-01-01 08:00:30"),
            dt("2024-01-01 09:00"),
        )])
    }

    #[test]
    fn test_update_copies_unit_and_valid_time() {
        let mut ledger = ledger();
        let mutation = ledger
            .update(
                &jane(),
                ValidTime::At(dt("2024-01-01 08:00")),
                Some(dt("2024-01-02 09:00")),
                "6.0",
            )
            .unwrap();

        assert_eq!(mutation.previous.value, "5.0");
        assert_eq!(mutation.current.value, ResultValue::from("6.0"));
        assert_eq!(mutation.current.unit, "mg/dL");
        assert_eq!(mutation.current.valid_start_time, dt("2024-01-01 08:00:30"));
        assert_eq!(mutation.current.transaction_time, dt("2024-01-02 09:00"));
        assert_eq!(ledger.records().len(), 2);
    }

    #[test]
    fn test_delete_appends_tombstone() {
        let mut ledger = ledger();
        let mutation = ledger
            .delete(
                &jane(),
                ValidTime::Day(dt("2024-01-01 00:00").date()),
                Some(dt("2024-01-02 09:00")),
            )
            .unwrap();

        assert!(mutation.current.is_tombstone());
        assert_eq!(ledger.records().len(), 2);
        assert!(!ledger.records()[0].is_tombstone());
    }

    #[test]
    fn test_mutation_without_belief_appends_nothing() {
        let mut ledger = ledger();
        let err = ledger
            .update(
                &jane(),
                ValidTime::At(dt("2024-01-01 08:00")),
                Some(dt("2023-12-31 09:00")),
                "6.0",
            )
            .unwrap_err();

        assert!(matches!(err, LedgerError::NotFound { .. }));
        assert_eq!(ledger.records().len(), 1);
        assert!(!ledger.undo_register().can_undo());
    }

    #[test]
    fn test_acting_time_defaults_to_clock() {
        let mut ledger = ledger();
        ledger.set_clock(dt("2024-03-01 12:00"));

        let mutation = ledger
            .update(&jane(), ValidTime::At(dt("2024-01-01 08:00")), None, "6.0")
            .unwrap();
        assert_eq!(mutation.current.transaction_time, dt("2024-03-01 12:00"));
    }

    #[test]
    fn test_delete_after_delete_is_not_found() {
        let mut ledger = ledger();
        let valid = ValidTime::At(dt("2024-01-01 08:00"));

        ledger.delete(&jane(), valid, Some(dt("2024-01-02 09:00"))).unwrap();
        let err = ledger
            .delete(&jane(), valid, Some(dt("2024-01-03 09:00")))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
