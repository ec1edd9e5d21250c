//! Engine configuration and grid layout.
//!
//! # Responsibility
//! - Hold every caller-supplied knob of the heatmap engine in one struct.
//! - Reject degenerate configurations before anything is rendered.
//!
//! # Invariants
//! - A validated configuration always yields at least one column.
//! - Configuration errors are fatal; bad data is never treated as one.

pub mod engine_config;
pub mod layout;

pub use engine_config::{ConfigError, Density, DetailMode, EngineConfig, LabelStyle, Variant};
pub use layout::GridLayout;
