//! Test code catalog
//!
//! Front ends use the catalog to check a code before querying; the ledger
//! itself never consults it.

mod codes;

pub use codes::{CodeCatalog, CodeTable};
