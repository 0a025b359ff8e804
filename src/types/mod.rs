//! Data types for the lab ledger
//!
//! This module contains the core data structures used throughout the crate.

mod error;
mod history;
mod range;
mod record;

pub use error::{LedgerError, LedgerResult};
pub use history::{HistoryEntry, Mutation};
pub use range::{Bound, TimeRange, ValidTime};
pub use record::{Identity, Record, RecordId, ResultValue};
