//! Visual tree owned by the heatmap engine.
//!
//! # Responsibility
//! - Hold one positioned cell group per render record.
//! - Carry presentational state: opacity, hover highlight, label/detail
//!   visibility.
//!
//! # Invariants
//! - `cells[i]` corresponds to record `i`.
//! - For cells with a detail panel exactly one of label and panel is visible.
//! - Cells without a detail panel always show their label.

use crate::config::engine_config::EngineConfig;
use crate::config::layout::GridLayout;
use crate::engine::zoom::{LodLevel, ZoomTransform};
use crate::model::record::{LabelKind, RenderRecord};
use crate::render::animation::FadeIn;
use crate::render::color::{contrast_text_color, glow_color};
use crate::render::detail::{build_detail_panel, DetailPanel};
use palette::Srgb;

const LABEL_FONT_RATIO: f64 = 0.2;
const MIN_LABEL_FONT_PX: f64 = 6.0;
const MAX_LABEL_FONT_PX: f64 = 14.0;

/// Filled background of a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectNode {
    pub fill: Srgb<u8>,
    pub stroke: Srgb<u8>,
}

/// Centered compact label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelNode {
    pub text: String,
    pub kind: LabelKind,
    pub fill: Srgb<u8>,
    pub font_size: f64,
    pub visible: bool,
}

/// One cell group, translated to its grid origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CellNode {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub origin: (f64, f64),
    pub size: f64,
    pub rect: RectNode,
    pub label: LabelNode,
    pub detail: Option<DetailPanel>,
    pub fade: FadeIn,
    pub opacity: f64,
    /// Hover state. Presentational only.
    pub highlighted: bool,
    /// Glow color used while highlighted.
    pub glow: Srgb<u8>,
}

impl CellNode {
    fn build(record: &RenderRecord, layout: &GridLayout, config: &EngineConfig, now_ms: f64) -> Self {
        let scale = config.effective_color_scale();
        let fill = scale.cell_fill(record.metric, record.is_month_start());
        let size = layout.cell_size();

        Self {
            index: record.index,
            row: record.row,
            col: record.col,
            origin: layout.cell_origin(record.row, record.col),
            size,
            rect: RectNode {
                fill,
                stroke: scale.stroke(record.metric),
            },
            label: LabelNode {
                text: record.primary_label().to_string(),
                kind: record.label_kind,
                fill: contrast_text_color(fill),
                font_size: (size * LABEL_FONT_RATIO).clamp(MIN_LABEL_FONT_PX, MAX_LABEL_FONT_PX),
                visible: true,
            },
            detail: build_detail_panel(record, config.detail_mode),
            fade: FadeIn::for_metric(
                record.metric,
                config.fade_base_ms,
                config.fade_scale_ms,
                now_ms,
            ),
            opacity: 0.0,
            highlighted: false,
            glow: glow_color(scale, record.metric, config.hover_glow_offset),
        }
    }

    /// Shows either the label or the detail panel, never both.
    pub fn apply_lod(&mut self, lod: LodLevel) {
        match self.detail.as_mut() {
            Some(panel) => {
                let show_detail = lod == LodLevel::Detail;
                panel.visible = show_detail;
                self.label.visible = !show_detail;
            }
            None => self.label.visible = true,
        }
    }

    pub fn detail_visible(&self) -> bool {
        self.detail.as_ref().is_some_and(|panel| panel.visible)
    }

    /// Whether `(x, y)` in content coordinates falls inside this cell.
    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        x >= self.origin.0
            && x < self.origin.0 + self.size
            && y >= self.origin.1
            && y < self.origin.1 + self.size
    }
}

/// Drawing surface and its full visual tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub cell_size: f64,
    pub columns: usize,
    /// Transform currently applied to the root group.
    pub transform: ZoomTransform,
    pub cells: Vec<CellNode>,
}

impl Scene {
    /// Builds a fresh tree for `records`, with every cell at opacity zero.
    pub fn build(
        records: &[RenderRecord],
        layout: &GridLayout,
        config: &EngineConfig,
        transform: ZoomTransform,
        lod: LodLevel,
        now_ms: f64,
    ) -> Self {
        let (width, height) = layout.surface_size(records.len());
        let mut cells: Vec<CellNode> = records
            .iter()
            .map(|record| CellNode::build(record, layout, config, now_ms))
            .collect();
        for cell in &mut cells {
            cell.apply_lod(lod);
        }

        Self {
            width,
            height,
            cell_size: layout.cell_size(),
            columns: layout.columns(),
            transform,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.last().map_or(0, |cell| cell.row + 1)
    }

    pub fn apply_lod(&mut self, lod: LodLevel) {
        for cell in &mut self.cells {
            cell.apply_lod(lod);
        }
    }

    /// Samples every entrance fade. Returns whether any is still running.
    pub fn advance_fades(&mut self, now_ms: f64) -> bool {
        let mut running = false;
        for cell in &mut self.cells {
            cell.opacity = cell.fade.opacity_at(now_ms);
            running |= !cell.fade.is_finished(now_ms);
        }
        running
    }

    /// Finds the cell under a surface-space point, honoring the transform.
    pub fn hit_test(&self, surface_point: (f64, f64)) -> Option<usize> {
        let content = self.transform.invert(surface_point);
        let col = (content.0 / self.cell_size).floor();
        let row = (content.1 / self.cell_size).floor();
        if !(col >= 0.0 && row >= 0.0 && col < self.columns as f64 && row < self.rows() as f64) {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        let index = row * self.columns + col;
        self.cells
            .get(index)
            .filter(|cell| cell.contains(content))
            .map(|cell| cell.index)
    }
}
