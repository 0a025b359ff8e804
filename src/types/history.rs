//! Query result types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Record;

/// One believed result for a valid instant
///
/// Only groups without tombstones survive a history query, so the value is
/// always a measured one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub value: String,
    pub unit: String,
    #[serde(rename = "validStartTime")]
    pub valid_start_time: NaiveDateTime,
    #[serde(rename = "transactionTime")]
    pub transaction_time: NaiveDateTime,
}

/// Outcome of an update or delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mutation {
    /// Belief that was in force as of the acting time
    pub previous: HistoryEntry,
    /// Newly appended version
    pub current: Record,
}
