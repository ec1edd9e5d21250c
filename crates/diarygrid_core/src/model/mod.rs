//! Journal domain model.
//!
//! # Responsibility
//! - Define the raw entry shape loaded from the dataset.
//! - Define the derived render record consumed by the engine.
//!
//! # Invariants
//! - Raw entries and render records correspond one-to-one, in input order.

pub mod entry;
pub mod record;
