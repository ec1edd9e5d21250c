//! Continuous color scales and contrast selection.
//!
//! Scales interpolate piecewise-linearly in sRGB between the ColorBrewer stops of the
//! named scheme. Inputs are clamped to `[0, 1]` before lookup.

use crate::config::engine_config::ConfigError;
use crate::projection::metric::{clamp_metric, MetricMode};
use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const RD_YL_GN: [Srgb<u8>; 11] = [
    Srgb::new(0xa5, 0x00, 0x26),
    Srgb::new(0xd7, 0x30, 0x27),
    Srgb::new(0xf4, 0x6d, 0x43),
    Srgb::new(0xfd, 0xae, 0x61),
    Srgb::new(0xfe, 0xe0, 0x8b),
    Srgb::new(0xff, 0xff, 0xbf),
    Srgb::new(0xd9, 0xef, 0x8b),
    Srgb::new(0xa6, 0xd9, 0x6a),
    Srgb::new(0x66, 0xbd, 0x63),
    Srgb::new(0x1a, 0x98, 0x50),
    Srgb::new(0x00, 0x68, 0x37),
];

const BU_GN: [Srgb<u8>; 9] = [
    Srgb::new(0xf7, 0xfc, 0xfd),
    Srgb::new(0xe5, 0xf5, 0xf9),
    Srgb::new(0xcc, 0xec, 0xe6),
    Srgb::new(0x99, 0xd8, 0xc9),
    Srgb::new(0x66, 0xc2, 0xa4),
    Srgb::new(0x41, 0xae, 0x76),
    Srgb::new(0x23, 0x8b, 0x45),
    Srgb::new(0x00, 0x6d, 0x2c),
    Srgb::new(0x00, 0x44, 0x1b),
];

const NEUTRAL_FILL: Srgb<u8> = Srgb::new(0xe0, 0xe0, 0xe0);
const NEUTRAL_STROKE: Srgb<u8> = Srgb::new(0xaa, 0xaa, 0xaa);
const NEUTRAL_MONTH_FILL: Srgb<u8> = Srgb::new(0xef, 0xff, 0xef);

/// Foreground used on dark backgrounds.
pub const LIGHT_TEXT: Srgb<u8> = Srgb::new(0xf5, 0xf5, 0xf5);
/// Foreground used on light backgrounds.
pub const DARK_TEXT: Srgb<u8> = Srgb::new(0x1a, 0x1a, 0x1a);

const BRIGHTNESS_MIDPOINT: f64 = 0.5;

/// Named continuous color interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScale {
    /// Diverging red → yellow → green.
    RdYlGn,
    /// Sequential blue-white → green.
    BuGn,
    /// Constant light grey, independent of the metric.
    Neutral,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::RdYlGn
    }
}

impl ColorScale {
    /// Scale conventionally paired with a metric mode.
    pub fn for_metric(mode: MetricMode) -> Self {
        match mode {
            MetricMode::Sentiment => Self::RdYlGn,
            MetricMode::Significance => Self::BuGn,
        }
    }

    /// Maps `t` to a color. `t` is clamped to `[0, 1]` first.
    pub fn interpolate(self, t: f64) -> Srgb<u8> {
        match self {
            Self::RdYlGn => interpolate_stops(&RD_YL_GN, t),
            Self::BuGn => interpolate_stops(&BU_GN, t),
            Self::Neutral => NEUTRAL_FILL,
        }
    }

    /// Background of one cell. The neutral scale tints month starts.
    pub fn cell_fill(self, t: f64, month_start: bool) -> Srgb<u8> {
        match self {
            Self::Neutral if month_start => NEUTRAL_MONTH_FILL,
            other => other.interpolate(t),
        }
    }

    /// Outline color for a cell with metric `t`.
    pub fn stroke(self, t: f64) -> Srgb<u8> {
        match self {
            Self::Neutral => NEUTRAL_STROKE,
            other => other.interpolate(t),
        }
    }
}

impl FromStr for ColorScale {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "rd_yl_gn" | "rdylgn" => Ok(Self::RdYlGn),
            "bu_gn" | "bugn" => Ok(Self::BuGn),
            "neutral" => Ok(Self::Neutral),
            other => Err(ConfigError::UnsupportedColorScale(other.to_string())),
        }
    }
}

fn interpolate_stops(stops: &[Srgb<u8>], t: f64) -> Srgb<u8> {
    let t = clamp_metric(t);
    let segments = stops.len() - 1;
    let scaled = t * segments as f64;
    let lower = (scaled.floor() as usize).min(segments - 1);
    let factor = (scaled - lower as f64) as f32;

    let from: Srgb<f32> = stops[lower].into_format();
    let to: Srgb<f32> = stops[lower + 1].into_format();
    Srgb::new(
        lerp(from.red, to.red, factor),
        lerp(from.green, to.green, factor),
        lerp(from.blue, to.blue, factor),
    )
    .into_format()
}

fn lerp(from: f32, to: f32, factor: f32) -> f32 {
    from + (to - from) * factor
}

/// Perceived brightness in `[0, 1]` using the `0.299 / 0.587 / 0.114` weights.
pub fn perceived_brightness(color: Srgb<u8>) -> f64 {
    (0.299 * f64::from(color.red) + 0.587 * f64::from(color.green) + 0.114 * f64::from(color.blue))
        / 255.0
}

/// Picks a readable foreground for text drawn over `background`.
pub fn contrast_text_color(background: Srgb<u8>) -> Srgb<u8> {
    if perceived_brightness(background) < BRIGHTNESS_MIDPOINT {
        LIGHT_TEXT
    } else {
        DARK_TEXT
    }
}

/// Glow color for a hovered cell: the scale sampled at `metric + offset`.
pub fn glow_color(scale: ColorScale, metric: f64, offset: f64) -> Srgb<u8> {
    scale.interpolate(clamp_metric(metric + offset))
}

/// `#rrggbb` form used by the SVG writer.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}
