//! Bulk dataset import
//!
//! Reads the initial record set from a tabular file. CSV is the native
//! format; JSONL (one object per line, same keys) is accepted as well.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{info, warn};

use crate::types::{Identity, LedgerError, LedgerResult, Record, ResultValue};
use crate::utils::time::parse_timestamp;

/// One row of the source dataset, keyed by its column headers
#[derive(Debug, Clone, Deserialize)]
struct DatasetRow {
    #[serde(rename = "First name")]
    first_name: String,
    #[serde(rename = "Last name")]
    last_name: String,
    #[serde(rename = "LOINC-NUM")]
    test_code: String,
    #[serde(rename = "Value", default)]
    value: Option<String>,
    #[serde(rename = "Unit", default)]
    unit: String,
    #[serde(rename = "Valid start time")]
    valid_start_time: String,
    #[serde(rename = "Transaction time")]
    transaction_time: String,
}

impl DatasetRow {
    fn into_record(self, line: u64) -> LedgerResult<Record> {
        let valid_start_time =
            parse_timestamp(&self.valid_start_time).ok_or_else(|| LedgerError::InvalidRow {
                line,
                reason: format!("bad valid start time '{}'", self.valid_start_time),
            })?;
        let transaction_time =
            parse_timestamp(&self.transaction_time).ok_or_else(|| LedgerError::InvalidRow {
                line,
                reason: format!("bad transaction time '{}'", self.transaction_time),
            })?;

        // Blank cells count as "no value"
        let value = match self.value {
            Some(v) if !v.trim().is_empty() => ResultValue::Measured(v.trim().to_string()),
            _ => ResultValue::Tombstone,
        };

        Ok(Record::new(
            Identity::new(self.first_name, self.last_name, self.test_code),
            value,
            self.unit,
            valid_start_time,
            transaction_time,
        ))
    }
}

/// Load the dataset at `path`, picking the format from the file extension
pub fn load_dataset<P: AsRef<Path>>(path: P) -> LedgerResult<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let is_jsonl = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jsonl") || e.eq_ignore_ascii_case("json"));

    let records = if is_jsonl {
        read_jsonl(BufReader::new(file))?
    } else {
        read_csv(file)?
    };

    info!(
        path = %path.display(),
        records = records.len(),
        "dataset loaded"
    );
    Ok(records)
}

/// Read records from CSV with a header row
///
/// Rows that cannot be parsed are skipped with a warning.
pub fn read_csv<R: Read>(reader: R) -> LedgerResult<Vec<Record>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut records = Vec::new();

    for (idx, row) in reader.deserialize::<DatasetRow>().enumerate() {
        // Header is line 1
        let line = idx as u64 + 2;
        let parsed = match row {
            Ok(row) => row.into_record(line),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => Err(LedgerError::Csv(e)),
        };

        match parsed {
            Ok(record) => records.push(record),
            Err(e) => warn!(line, error = %e, "skipping dataset row"),
        }
    }

    Ok(records)
}

/// Read records from JSON lines
///
/// Blank lines are ignored; malformed lines are skipped with a warning.
pub fn read_jsonl<R: BufRead>(reader: R) -> LedgerResult<Vec<Record>> {
    let mut records = Vec::new();

    for (idx, line_result) in reader.lines().enumerate() {
        let line_text = line_result?;
        let line = idx as u64 + 1;
        if line_text.trim().is_empty() {
            continue;
        }

        let parsed = serde_json::from_str::<DatasetRow>(&line_text)
            .map_err(LedgerError::from)
            .and_then(|row| row.into_record(line));

        match parsed {
            Ok(record) => records.push(record),
            Err(e) => warn!(line, error = %e, "skipping dataset line"),
        }
    }

    Ok(records)
}
