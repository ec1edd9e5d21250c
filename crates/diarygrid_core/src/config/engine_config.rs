//! Heatmap engine configuration.

use crate::projection::metric::MetricMode;
use crate::render::color::ColorScale;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Zoom magnitude at which cells switch from label to detail panel.
pub const DEFAULT_LOD_THRESHOLD: f64 = 5.0;
pub const DEFAULT_MIN_SCALE: f64 = 0.5;
pub const DEFAULT_MAX_SCALE: f64 = 25.0;
pub const DEFAULT_FADE_BASE_MS: f64 = 500.0;
pub const DEFAULT_FADE_SCALE_MS: f64 = 1500.0;
pub const DEFAULT_TRANSITION_MS: f64 = 250.0;
pub const DEFAULT_HOVER_GLOW_OFFSET: f64 = 0.1;

/// Configuration error raised before rendering starts.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroColumns,
    InvalidViewportWidth(f64),
    InvalidCellSize(f64),
    UnsupportedMetricMode(String),
    UnsupportedColorScale(String),
    UnsupportedDetailMode(String),
    UnsupportedDensity(String),
    UnsupportedVariant(String),
    InvalidScaleExtent { min: f64, max: f64 },
    InvalidLodThreshold(f64),
    InvalidDuration { name: &'static str, value: f64 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "column count must be positive"),
            Self::InvalidViewportWidth(value) => {
                write!(f, "viewport width must be positive and finite, got {value}")
            }
            Self::InvalidCellSize(value) => {
                write!(f, "cell size must be positive and finite, got {value}")
            }
            Self::UnsupportedMetricMode(value) => write!(
                f,
                "unsupported metric mode `{value}`; expected sentiment|significance"
            ),
            Self::UnsupportedColorScale(value) => write!(
                f,
                "unsupported color scale `{value}`; expected rd_yl_gn|bu_gn|neutral"
            ),
            Self::UnsupportedDetailMode(value) => write!(
                f,
                "unsupported detail mode `{value}`; expected none|summary|content"
            ),
            Self::UnsupportedDensity(value) => write!(
                f,
                "unsupported density `{value}`; expected comfortable|compact"
            ),
            Self::UnsupportedVariant(value) => write!(
                f,
                "unsupported variant `{value}`; expected entry_numbers|sentiment_grid|sentiment_detail|significance_detail|content_detail"
            ),
            Self::InvalidScaleExtent { min, max } => {
                write!(f, "scale extent [{min}, {max}] must satisfy 0 < min <= 1 <= max")
            }
            Self::InvalidLodThreshold(value) => {
                write!(f, "detail threshold {value} must lie inside the scale extent")
            }
            Self::InvalidDuration { name, value } => {
                write!(f, "{name} must be non-negative and finite, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Grid density, selecting the default column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    /// 10 columns with large cells.
    #[default]
    Comfortable,
    /// 30 columns with small cells.
    Compact,
}

impl Density {
    pub fn default_columns(self) -> usize {
        match self {
            Self::Comfortable => 10,
            Self::Compact => 30,
        }
    }
}

impl FromStr for Density {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "comfortable" => Ok(Self::Comfortable),
            "compact" => Ok(Self::Compact),
            other => Err(ConfigError::UnsupportedDensity(other.to_string())),
        }
    }
}

/// What a cell discloses once zoomed past the detail threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailMode {
    /// No detail panel; the label stays visible at every zoom level.
    None,
    /// Multi-field analysis summary.
    #[default]
    Summary,
    /// Raw entry body text.
    Content,
}

impl FromStr for DetailMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "summary" => Ok(Self::Summary),
            "content" => Ok(Self::Content),
            other => Err(ConfigError::UnsupportedDetailMode(other.to_string())),
        }
    }
}

/// Text used for plain day cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// `Oct 2` style month-day label.
    #[default]
    MonthDay,
    /// One-based entry number.
    EntryNumber,
}

/// Named presets for the rendering variants the engine replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Neutral grid numbered by entry, month labels on the 1st.
    EntryNumbers,
    /// Dense sentiment heatmap without detail panels.
    SentimentGrid,
    /// Sentiment heatmap with summary panels on zoom.
    SentimentDetail,
    /// Significance heatmap with summary panels on zoom.
    SignificanceDetail,
    /// Sentiment heatmap that discloses raw entry text on zoom.
    ContentDetail,
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "entry_numbers" => Ok(Self::EntryNumbers),
            "sentiment_grid" => Ok(Self::SentimentGrid),
            "sentiment_detail" => Ok(Self::SentimentDetail),
            "significance_detail" => Ok(Self::SignificanceDetail),
            "content_detail" => Ok(Self::ContentDetail),
            other => Err(ConfigError::UnsupportedVariant(other.to_string())),
        }
    }
}

/// Full engine configuration.
///
/// Everything is passed in by the host; the engine never reports
/// configuration back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Explicit column count. `None` falls back to `density`.
    pub columns: Option<usize>,
    pub density: Density,
    pub metric_mode: MetricMode,
    /// Explicit fill scale. `None` follows `metric_mode`.
    pub color_scale: Option<ColorScale>,
    pub detail_mode: DetailMode,
    pub label_style: LabelStyle,
    /// Detail panels show when zoom scale is strictly greater than this.
    pub lod_threshold: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Fade-in duration is `fade_base_ms + metric * fade_scale_ms`.
    pub fade_base_ms: f64,
    pub fade_scale_ms: f64,
    /// Eased zoom transition length. Zero applies transforms instantly.
    pub transition_ms: f64,
    /// Added to a cell's metric before looking up its hover glow color.
    pub hover_glow_offset: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::preset(Variant::SentimentDetail)
    }
}

impl EngineConfig {
    /// Builds the configuration for one named variant.
    pub fn preset(variant: Variant) -> Self {
        let base = Self {
            columns: None,
            density: Density::Comfortable,
            metric_mode: MetricMode::Sentiment,
            color_scale: None,
            detail_mode: DetailMode::Summary,
            label_style: LabelStyle::MonthDay,
            lod_threshold: DEFAULT_LOD_THRESHOLD,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            fade_base_ms: DEFAULT_FADE_BASE_MS,
            fade_scale_ms: DEFAULT_FADE_SCALE_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
            hover_glow_offset: DEFAULT_HOVER_GLOW_OFFSET,
        };

        match variant {
            Variant::EntryNumbers => Self {
                color_scale: Some(ColorScale::Neutral),
                detail_mode: DetailMode::None,
                label_style: LabelStyle::EntryNumber,
                ..base
            },
            Variant::SentimentGrid => Self {
                density: Density::Compact,
                detail_mode: DetailMode::None,
                ..base
            },
            Variant::SentimentDetail => base,
            Variant::SignificanceDetail => Self {
                metric_mode: MetricMode::Significance,
                ..base
            },
            Variant::ContentDetail => Self {
                detail_mode: DetailMode::Content,
                ..base
            },
        }
    }

    /// Switches the metric mode and its matching color scale together.
    pub fn with_metric_mode(mut self, mode: MetricMode) -> Self {
        self.metric_mode = mode;
        self.color_scale = None;
        self
    }

    /// Fill scale in effect: the explicit one, else the metric's pairing.
    pub fn effective_color_scale(&self) -> ColorScale {
        self.color_scale
            .unwrap_or_else(|| ColorScale::for_metric(self.metric_mode))
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Returns the column count actually used for layout.
    pub fn effective_columns(&self) -> usize {
        self.columns.unwrap_or_else(|| self.density.default_columns())
    }

    /// Validates configuration-level invariants.
    ///
    /// # Errors
    /// - `ZeroColumns` when an explicit column count of zero is set.
    /// - `InvalidScaleExtent` unless `0 < min_scale <= 1 <= max_scale`.
    /// - `InvalidLodThreshold` when the threshold is outside the extent.
    /// - `InvalidDuration` for negative or non-finite timings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.effective_columns() == 0 {
            return Err(ConfigError::ZeroColumns);
        }

        let extent_ok = self.min_scale.is_finite()
            && self.max_scale.is_finite()
            && self.min_scale > 0.0
            && self.min_scale <= 1.0
            && self.max_scale >= 1.0;
        if !extent_ok {
            return Err(ConfigError::InvalidScaleExtent {
                min: self.min_scale,
                max: self.max_scale,
            });
        }

        if !(self.lod_threshold.is_finite()
            && self.lod_threshold >= self.min_scale
            && self.lod_threshold < self.max_scale)
        {
            return Err(ConfigError::InvalidLodThreshold(self.lod_threshold));
        }

        for (name, value) in [
            ("fade_base_ms", self.fade_base_ms),
            ("fade_scale_ms", self.fade_scale_ms),
            ("transition_ms", self.transition_ms),
            ("hover_glow_offset", self.hover_glow_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDuration { name, value });
            }
        }

        Ok(())
    }
}
