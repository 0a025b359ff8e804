//! Record types for the lab ledger

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Composite key naming one patient's test
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "testCode")]
    pub test_code: String,
}

impl Identity {
    /// Create a new identity
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        test_code: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            test_code: test_code.into(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.first_name, self.last_name, self.test_code)
    }
}

/// Value carried by a record version
///
/// `Tombstone` means "no known value", which is also how a deletion is
/// recorded. It is unrelated to an unbounded range end.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ResultValue {
    Measured(String),
    Tombstone,
}

impl ResultValue {
    pub fn is_tombstone(&self) -> bool {
        matches!(self, ResultValue::Tombstone)
    }

    pub fn as_measured(&self) -> Option<&str> {
        match self {
            ResultValue::Measured(v) => Some(v),
            ResultValue::Tombstone => None,
        }
    }
}

impl From<Option<String>> for ResultValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) => ResultValue::Measured(v),
            None => ResultValue::Tombstone,
        }
    }
}

impl From<ResultValue> for Option<String> {
    fn from(value: ResultValue) -> Self {
        match value {
            ResultValue::Measured(v) => Some(v),
            ResultValue::Tombstone => None,
        }
    }
}

impl From<&str> for ResultValue {
    fn from(value: &str) -> Self {
        ResultValue::Measured(value.to_string())
    }
}

impl From<String> for ResultValue {
    fn from(value: String) -> Self {
        ResultValue::Measured(value)
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Measured(v) => f.write_str(v),
            ResultValue::Tombstone => f.write_str("<deleted>"),
        }
    }
}

/// One immutable version of a test result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    pub identity: Identity,
    pub value: ResultValue,
    pub unit: String,
    #[serde(rename = "validStartTime")]
    pub valid_start_time: NaiveDateTime,
    #[serde(rename = "transactionTime")]
    pub transaction_time: NaiveDateTime,
}

impl Record {
    /// Create a new record version
    pub fn new(
        identity: Identity,
        value: impl Into<ResultValue>,
        unit: impl Into<String>,
        valid_start_time: NaiveDateTime,
        transaction_time: NaiveDateTime,
    ) -> Self {
        Self {
            identity,
            value: value.into(),
            unit: unit.into(),
            valid_start_time,
            transaction_time,
        }
    }

    /// Create a tombstone version for the given identity and valid instant
    pub fn tombstone(
        identity: Identity,
        unit: impl Into<String>,
        valid_start_time: NaiveDateTime,
        transaction_time: NaiveDateTime,
    ) -> Self {
        Self::new(
            identity,
            ResultValue::Tombstone,
            unit,
            valid_start_time,
            transaction_time,
        )
    }

    pub fn is_tombstone(&self) -> bool {
        self.value.is_tombstone()
    }
}

/// Position of a record in the store, in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub usize);
