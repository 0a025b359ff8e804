//! Lab Ledger
//!
//! A bitemporal ledger of clinical test results. Every result carries two
//! independent times: when the measurement is valid for the patient, and
//! when the ledger was told about it. Queries reconstruct what was believed
//! as of any past moment.
//!
//! # Features
//!
//! - **Append-only**: updates and deletes add versions, nothing is erased
//! - **As-of queries**: reconstruct belief at any transaction time
//! - **Virtual clock**: travel back in time for queries and backdated writes
//! - **One-step undo/redo**: reverse the most recent append
//!
//! # Modules
//!
//! - `types`: Core data structures (Record, Identity, TimeRange, errors)
//! - `record_store`: Append-only record log, version index, dataset import
//! - `ledger`: Query, point lookup, mutation and undo operations
//! - `catalog`: Test code to display name lookup
//! - `config`: Dataset and code table locations
//! - `utils`: Virtual clock and timestamp helpers
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use lab_ledger::{Identity, LabLedger, Record, ValidTime};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let valid = day.and_hms_opt(8, 0, 0).unwrap();
//! let jane = Identity::new("Jane", "Doe", "LOINC1");
//!
//! let mut ledger = LabLedger::new();
//! ledger.insert(Record::new(jane.clone(), "5.0", "mg/dL", valid, day.and_hms_opt(9, 0, 0).unwrap()));
//!
//! let next_day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//! ledger
//!     .update(&jane, ValidTime::At(valid), next_day.and_hms_opt(9, 0, 0), "6.0")
//!     .unwrap();
//!
//! let before = ledger
//!     .latest(&jane, ValidTime::At(valid), day.and_hms_opt(9, 30, 0))
//!     .unwrap();
//! assert_eq!(before.value, "5.0");
//! ```

pub mod catalog;
pub mod config;
pub mod ledger;
pub mod record_store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use catalog::{CodeCatalog, CodeTable};
pub use config::LedgerConfig;
pub use ledger::{LabLedger, UndoRegister};
pub use record_store::RecordStore;
pub use types::{
    Bound, HistoryEntry, Identity, LedgerError, LedgerResult, Mutation, Record, RecordId,
    ResultValue, TimeRange, ValidTime,
};
pub use utils::time::VirtualClock;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
