//! Visual tree construction, color encoding and serialization.
//!
//! # Responsibility
//! - Map render records to positioned, colored cell groups.
//! - Provide the color scales, contrast rule and detail panel content.
//! - Serialize the tree to SVG for the host page.

pub mod animation;
pub mod color;
pub mod detail;
pub mod scene;
pub mod svg;

pub use color::ColorScale;
pub use detail::{DetailPanel, DetailSection};
pub use scene::{CellNode, LabelNode, RectNode, Scene};
