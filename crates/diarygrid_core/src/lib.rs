//! Journal heatmap engine.
//!
//! Projects a chronological sequence of journal entries into a fixed-column
//! grid of colored cells and drives hover and pan/zoom interaction with
//! zoom-dependent detail disclosure.

pub mod config;
pub mod dataset;
pub mod engine;
pub mod logging;
pub mod model;
pub mod projection;
pub mod render;

pub use config::{ConfigError, Density, DetailMode, EngineConfig, GridLayout, LabelStyle, Variant};
pub use dataset::{load_entries_from_path, load_entries_from_str, DatasetError, DatasetResult};
pub use engine::{HeatmapEngine, LodLevel, ZoomTransform};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::entry::{
    Emotions, Entities, EntryEvent, MediaReference, RawEntry, SelfReflection, Sentiment,
    Significance, SocialInteraction, Thought, TrendObservation,
};
pub use model::record::{LabelKind, RenderRecord};
pub use projection::pipeline::{share_entries, ProjectionOptions};
pub use projection::{clamp_metric, project_entries, MetricMode};
pub use render::{CellNode, ColorScale, DetailPanel, DetailSection, Scene};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
