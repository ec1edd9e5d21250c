//! Entry projection pipeline.
//!
//! # Responsibility
//! - Turn an ordered slice of raw entries into render-ready records.
//! - Parse dates, derive labels, grid positions and the color metric.
//!
//! # Invariants
//! - Pure and deterministic: same input and layout yield identical output.
//! - Output length equals input length; input order is preserved.
//! - A malformed date never aborts the batch.

pub mod labels;
pub mod metric;
pub mod pipeline;

pub use metric::{clamp_metric, MetricMode};
pub use pipeline::project_entries;
