//! Heatmap engine: surface ownership, hover and pan/zoom handling.
//!
//! Runs on the host's UI event loop. All entry points take `&mut self` and
//! complete synchronously; animations are sampled through `tick`.

pub mod heatmap;
pub mod zoom;

pub use heatmap::HeatmapEngine;
pub use zoom::{LodLevel, ZoomState, ZoomTransform};
