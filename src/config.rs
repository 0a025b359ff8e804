//! Ledger configuration

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the dataset file
pub const RECORDS_PATH_VAR: &str = "LAB_RECORDS_PATH";
/// Environment variable naming the code table file
pub const CODE_TABLE_PATH_VAR: &str = "LOINC_TABLE_PATH";

const DEFAULT_RECORDS_PATH: &str = "dbs/project_db.csv";
const DEFAULT_CODE_TABLE_PATH: &str = "dbs/LoincTableCore.csv";

/// Where the ledger loads its initial state from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Path to the dataset (CSV or JSONL)
    pub records_path: PathBuf,
    /// Path to the code table CSV, if any
    pub code_table_path: Option<PathBuf>,
}

impl LedgerConfig {
    /// Create config for a dataset without a code table
    pub fn new<P: AsRef<Path>>(records_path: P) -> Self {
        Self {
            records_path: records_path.as_ref().to_path_buf(),
            code_table_path: None,
        }
    }

    /// Attach a code table
    pub fn with_code_table<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.code_table_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read config from `LAB_RECORDS_PATH` and `LOINC_TABLE_PATH`
    ///
    /// Relative paths resolve against the current directory.
    pub fn from_env() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let records_path = resolve(
            &current_dir,
            env::var(RECORDS_PATH_VAR).ok(),
            DEFAULT_RECORDS_PATH,
        );
        let code_table_path = resolve(
            &current_dir,
            env::var(CODE_TABLE_PATH_VAR).ok(),
            DEFAULT_CODE_TABLE_PATH,
        );

        Self {
            records_path,
            code_table_path: Some(code_table_path),
        }
    }

    pub fn records_path(&self) -> &Path {
        &self.records_path
    }

    pub fn code_table_path(&self) -> Option<&Path> {
        self.code_table_path.as_deref()
    }
}

fn resolve(base: &Path, configured: Option<String>, default: &str) -> PathBuf {
    let path = PathBuf::from(configured.unwrap_or_else(|| default.to_string()));
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
