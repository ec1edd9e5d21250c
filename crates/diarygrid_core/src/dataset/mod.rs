//! Journal dataset loading.
//!
//! # Responsibility
//! - Decode the JSON array of entries the host ships with the page.
//!
//! # Invariants
//! - Entry order from the file is preserved exactly.
//! - Dates are not validated here; the projection recovers bad dates.

pub mod load;

pub use load::{load_entries_from_path, load_entries_from_str, DatasetError, DatasetResult};
