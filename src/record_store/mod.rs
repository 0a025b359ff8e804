//! Record Store Module
//!
//! This module provides the append-only storage for record versions:
//! - `RecordStore`: ordered record log plus the version index
//! - `dataset`: bulk import of the initial record set
//!
//! # Architecture
//!
//! ```text
//! Write Path:
//! ┌──────────┐    ┌──────────────┐    ┌────────────────────────────┐
//! │ insert / │───►│ push onto    │───►│ index[(identity, valid)]   │
//! │ mutate   │    │ record log   │    │   .push(position)          │
//! └──────────┘    └──────────────┘    └────────────────────────────┘
//!
//! Read Path:
//! ┌──────────┐    ┌─────────────────┐    ┌──────────────────┐
//! │ identity │───►│ version chains  │───►│ filter / group / │───► entries
//! │          │    │ (ascending)     │    │ select latest    │
//! └──────────┘    └─────────────────┘    └──────────────────┘
//! ```

mod dataset;
mod index;
mod store;

pub use dataset::{load_dataset, read_csv, read_jsonl};
pub use store::RecordStore;
