//! Test code lookup table

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{info, warn};

use crate::types::LedgerResult;

/// Read-only mapping from a test code to a human-readable name
pub trait CodeCatalog {
    fn name_for_code(&self, code: &str) -> Option<&str>;

    /// Whether the code is known to the catalog
    fn contains_code(&self, code: &str) -> bool {
        self.name_for_code(code).is_some()
    }
}

#[derive(Debug, Deserialize)]
struct CodeRow {
    #[serde(rename = "LOINC_NUM")]
    code: String,
    #[serde(rename = "LONG_COMMON_NAME")]
    name: String,
}

/// In-memory code table, typically loaded from a LOINC core CSV
#[derive(Debug, Default, Clone)]
pub struct CodeTable {
    names: HashMap<String, String>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(code, name)` pairs; the first name for a code wins
    pub fn from_pairs<I, C, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        let mut table = Self::new();
        for (code, name) in pairs {
            table.insert(code.into(), name.into());
        }
        table
    }

    /// Load a table from a CSV file with `LOINC_NUM` and `LONG_COMMON_NAME` columns
    pub fn load_csv<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        let table = Self::read_csv(File::open(path)?)?;
        info!(path = %path.display(), codes = table.len(), "code table loaded");
        Ok(table)
    }

    /// Read a table from CSV; other columns are ignored
    pub fn read_csv<R: Read>(reader: R) -> LedgerResult<Self> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let mut table = Self::new();

        for (idx, row) in reader.deserialize::<CodeRow>().enumerate() {
            match row {
                Ok(row) => table.insert(row.code, row.name),
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => warn!(line = idx as u64 + 2, error = %e, "skipping code table row"),
            }
        }

        Ok(table)
    }

    fn insert(&mut self, code: String, name: String) {
        self.names.entry(code).or_insert(name);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl CodeCatalog for CodeTable {
    fn name_for_code(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }
}
