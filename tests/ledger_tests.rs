//! Integration tests for the lab ledger

use chrono::NaiveDateTime;
use tracing_subscriber::EnvFilter;

use lab_ledger::{Identity, LabLedger, LedgerError, Record, ResultValue, TimeRange, ValidTime};

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
}

fn jane() -> Identity {
    Identity::new("Jane", "Doe", "LOINC1")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn setup_ledger() -> LabLedger {
    init_tracing();
    let mut ledger = LabLedger::new();
    ledger.insert(Record::new(
        jane(),
        "5.0",
        "mg/dL",
        dt("2024-01-01T08:00"),
        dt("2024-01-01T09:00"),
    ));
    ledger
}

#[test]
fn test_end_to_end_update() {
    let mut ledger = setup_ledger();
    let valid = ValidTime::At(dt("2024-01-01T08:00"));

    let first = ledger
        .latest(&jane(), valid, Some(dt("2024-01-01T10:00")))
        .unwrap();
    assert_eq!(first.value, "5.0");

    let mutation = ledger
        .mutate(
            &jane(),
            valid,
            Some(dt("2024-01-02T09:00")),
            ResultValue::from("6.0"),
        )
        .unwrap();
    assert_eq!(mutation.previous.value, "5.0");
    assert_eq!(mutation.current.value, ResultValue::from("6.0"));

    let now = ledger
        .latest(&jane(), valid, Some(dt("2024-01-02T10:00")))
        .unwrap();
    assert_eq!(now.value, "6.0");

    let then = ledger
        .latest(&jane(), valid, Some(dt("2024-01-01T09:30")))
        .unwrap();
    assert_eq!(then.value, "5.0");
}

#[test]
fn test_delete_hides_group_but_not_past_belief() {
    let mut ledger = setup_ledger();
    let valid = ValidTime::At(dt("2024-01-01T08:00"));

    let mutation = ledger
        .delete(&jane(), valid, Some(dt("2024-01-02T09:00")))
        .unwrap();
    assert!(mutation.current.is_tombstone());

    let after = ledger.history(
        &jane(),
        &TimeRange::unbounded(),
        &TimeRange::up_to(dt("2024-01-02T10:00")),
    );
    assert!(after.is_empty());

    let before = ledger.history(
        &jane(),
        &TimeRange::unbounded(),
        &TimeRange::up_to(dt("2024-01-01T09:30")),
    );
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].value, "5.0");

    // The tombstone is still an audit record
    assert_eq!(ledger.records().len(), 2);
}

#[test]
fn test_backdated_mutation_with_clock() {
    let mut ledger = setup_ledger();
    let valid = ValidTime::At(dt("2024-01-01T08:00"));

    // Travel back to before the first assertion: nothing to act on
    ledger.set_clock(dt("2024-01-01T08:30"));
    let err = ledger.update(&jane(), valid, None, "4.0").unwrap_err();
    assert!(matches!(err, LedgerError::NotFound { .. }));

    ledger.set_clock(dt("2024-01-01T12:00"));
    let mutation = ledger.update(&jane(), valid, None, "4.5").unwrap();
    assert_eq!(mutation.current.transaction_time, dt("2024-01-01T12:00"));
    assert_eq!(ledger.latest(&jane(), valid, None).unwrap().value, "4.5");

    ledger.set_clock(dt("2024-01-01T11:00"));
    assert_eq!(ledger.latest(&jane(), valid, None).unwrap().value, "5.0");

    ledger.unset_clock();
    assert!(!ledger.clock().is_overridden());
    assert_eq!(ledger.latest(&jane(), valid, None).unwrap().value, "4.5");
}

#[test]
fn test_undo_mutation_restores_previous_belief() {
    let mut ledger = setup_ledger();
    let valid = ValidTime::At(dt("2024-01-01T08:00"));
    let as_of = Some(dt("2024-01-03T00:00"));

    ledger
        .update(&jane(), valid, Some(dt("2024-01-02T09:00")), "6.0")
        .unwrap();
    assert_eq!(ledger.latest(&jane(), valid, as_of).unwrap().value, "6.0");

    let undone = ledger.undo().unwrap();
    assert_eq!(undone.value, ResultValue::from("6.0"));
    assert_eq!(ledger.latest(&jane(), valid, as_of).unwrap().value, "5.0");
    assert!(matches!(ledger.undo(), Err(LedgerError::EmptyUndo)));

    ledger.redo().unwrap();
    assert_eq!(ledger.latest(&jane(), valid, as_of).unwrap().value, "6.0");
    assert!(matches!(ledger.redo(), Err(LedgerError::EmptyRedo)));
}

#[test]
fn test_undo_of_delete_brings_group_back() {
    let mut ledger = setup_ledger();
    let valid = ValidTime::At(dt("2024-01-01T08:00"));

    ledger
        .delete(&jane(), valid, Some(dt("2024-01-02T09:00")))
        .unwrap();
    assert!(ledger
        .latest(&jane(), valid, Some(dt("2024-01-03T00:00")))
        .is_err());

    ledger.undo().unwrap();
    let entry = ledger
        .latest(&jane(), valid, Some(dt("2024-01-03T00:00")))
        .unwrap();
    assert_eq!(entry.value, "5.0");
}

#[test]
fn test_history_over_transaction_window() {
    let mut ledger = setup_ledger();
    ledger.insert(Record::new(
        jane(),
        "5.2",
        "mg/dL",
        dt("2024-01-05T08:00"),
        dt("2024-01-05T09:00"),
    ));
    ledger.insert(Record::new(
        Identity::new("Jane", "Doe", "LOINC2"),
        "140",
        "mmol/L",
        dt("2024-01-05T08:00"),
        dt("2024-01-05T09:00"),
    ));

    let window = TimeRange::new(dt("2024-01-03T00:00"), dt("2024-01-06T00:00"));
    let entries = ledger.history(&jane(), &TimeRange::unbounded(), &window);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].value, "5.2");
    assert_eq!(entries[0].unit, "mg/dL");
}

#[test]
fn test_history_is_repeatable() {
    let ledger = setup_ledger();
    let valid = TimeRange::unbounded();
    let trans = TimeRange::up_to(dt("2024-06-01T00:00"));

    let first = ledger.history(&jane(), &valid, &trans);
    let second = ledger.history(&jane(), &valid, &trans);
    assert_eq!(first, second);
}
