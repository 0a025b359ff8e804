//! Error types for ledger operations

use crate::types::{Identity, ValidTime};

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors that can occur in ledger operations
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("no result for {identity} at {valid}")]
    NotFound { identity: Identity, valid: ValidTime },

    #[error("nothing to undo")]
    EmptyUndo,

    #[error("nothing to redo")]
    EmptyRedo,

    #[error("record store is empty")]
    EmptyStore,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
}

impl LedgerError {
    /// Whether this error only reports that nothing matched
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::NotFound { .. })
    }
}
