//! Distinct value listings for pickers

use std::collections::BTreeSet;

use crate::types::Identity;

use super::LabLedger;

fn distinct<F>(ledger: &LabLedger, field: F) -> Vec<String>
where
    F: Fn(&Identity) -> &str,
{
    ledger
        .store
        .identities()
        .map(field)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Sorted distinct patient first names
pub fn first_names(ledger: &LabLedger) -> Vec<String> {
    distinct(ledger, |id| id.first_name.as_str())
}

/// Sorted distinct patient last names
pub fn last_names(ledger: &LabLedger) -> Vec<String> {
    distinct(ledger, |id| id.last_name.as_str())
}

/// Sorted distinct test codes
pub fn test_codes(ledger: &LabLedger) -> Vec<String> {
    distinct(ledger, |id| id.test_code.as_str())
}
