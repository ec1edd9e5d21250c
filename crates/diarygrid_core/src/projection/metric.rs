//! Color metric extraction.

use crate::config::engine_config::ConfigError;
use crate::model::entry::RawEntry;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Named policy selecting which entry field drives color and animation.
///
/// New metric sources are added as variants here, never as ad-hoc branches
/// at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricMode {
    /// Sentiment score rescaled from `[-1, 1]` to `[0, 1]`.
    #[default]
    Sentiment,
    /// Significance score, already in `[0, 1]`.
    Significance,
}

impl MetricMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Sentiment => "sentiment",
            Self::Significance => "significance",
        }
    }

    /// Returns the unclamped metric for one entry.
    pub fn raw_value(self, entry: &RawEntry) -> f64 {
        match self {
            Self::Sentiment => (entry.sentiment.sentiment_score + 1.0) / 2.0,
            Self::Significance => entry.significance.score,
        }
    }

    /// Returns the metric clamped into `[0, 1]`.
    pub fn extract(self, entry: &RawEntry) -> f64 {
        clamp_metric(self.raw_value(entry))
    }
}

impl FromStr for MetricMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sentiment" => Ok(Self::Sentiment),
            "significance" => Ok(Self::Significance),
            other => Err(ConfigError::UnsupportedMetricMode(other.to_string())),
        }
    }
}

/// Clamps a metric into `[0, 1]`. `NaN` maps to `0`.
pub fn clamp_metric(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
