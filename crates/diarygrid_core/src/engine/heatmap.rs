//! Grid rendering and interaction engine.
//!
//! # Responsibility
//! - Own the drawing surface and rebuild it on data, size or config change.
//! - Apply hover and pan/zoom gestures to the existing tree in place.
//!
//! # Invariants
//! - Every rebuild tears the previous tree down first, unconditionally.
//! - The tree is also torn down on `unmount` and on drop.
//! - Gestures never re-run the projection pipeline.
//! - Hover state lives in the scene only and is lost on rebuild.

use crate::config::engine_config::{ConfigError, EngineConfig};
use crate::config::layout::GridLayout;
use crate::engine::zoom::{LodLevel, ZoomState, ZoomTransform};
use crate::model::entry::RawEntry;
use crate::model::record::RenderRecord;
use crate::projection::pipeline::{project_entries, share_entries, ProjectionOptions};
use crate::render::scene::Scene;
use log::{debug, info};
use std::sync::Arc;

/// Interactive heatmap over a chronological entry sequence.
pub struct HeatmapEngine {
    config: EngineConfig,
    entries: Vec<Arc<RawEntry>>,
    viewport_width: Option<f64>,
    records: Vec<RenderRecord>,
    scene: Option<Scene>,
    zoom: ZoomState,
}

impl HeatmapEngine {
    /// Creates an unmounted engine.
    ///
    /// # Errors
    /// Returns the first configuration invariant the config violates.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let zoom = zoom_state_for(&config);
        Ok(Self {
            config,
            entries: Vec::new(),
            viewport_width: None,
            records: Vec::new(),
            scene: None,
            zoom,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The drawing surface, or `None` while unmounted.
    pub fn surface(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Records backing the current surface.
    pub fn records(&self) -> &[RenderRecord] {
        &self.records
    }

    pub fn is_mounted(&self) -> bool {
        self.scene.is_some()
    }

    pub fn transform(&self) -> ZoomTransform {
        self.zoom.target()
    }

    pub fn lod(&self) -> LodLevel {
        self.zoom.lod()
    }

    /// Mounts the engine with its first dataset and viewport width.
    ///
    /// # Errors
    /// - `InvalidViewportWidth` when the width is not positive.
    /// - Leaves the engine unmounted on error.
    pub fn mount(
        &mut self,
        entries: Vec<RawEntry>,
        viewport_width: f64,
        now_ms: f64,
    ) -> Result<(), ConfigError> {
        self.entries = share_entries(entries);
        self.viewport_width = Some(viewport_width);
        self.rebuild(now_ms)
    }

    /// Replaces the dataset and rebuilds the surface.
    pub fn refresh(&mut self, entries: Vec<RawEntry>, now_ms: f64) -> Result<(), ConfigError> {
        self.entries = share_entries(entries);
        self.rebuild(now_ms)
    }

    /// Recomputes cell size and layout for a new viewport width.
    pub fn resize(&mut self, viewport_width: f64, now_ms: f64) -> Result<(), ConfigError> {
        self.viewport_width = Some(viewport_width);
        self.rebuild(now_ms)
    }

    /// Swaps in a new configuration and rebuilds.
    ///
    /// The current transform is kept, re-clamped to the new extent.
    pub fn reconfigure(&mut self, config: EngineConfig, now_ms: f64) -> Result<(), ConfigError> {
        config.validate()?;
        let transform = self.zoom.target();
        self.zoom = zoom_state_for(&config);
        self.zoom.jump(transform);
        self.config = config;
        self.rebuild(now_ms)
    }

    /// Clears the visual tree and forgets the dataset.
    pub fn unmount(&mut self) {
        self.teardown();
        self.entries.clear();
        self.viewport_width = None;
    }

    fn rebuild(&mut self, now_ms: f64) -> Result<(), ConfigError> {
        self.teardown();

        let viewport_width = self
            .viewport_width
            .ok_or(ConfigError::InvalidViewportWidth(0.0))?;
        let layout = GridLayout::from_viewport(self.config.effective_columns(), viewport_width)?;

        self.records = project_entries(
            &self.entries,
            &layout,
            ProjectionOptions::from(&self.config),
        );
        let scene = Scene::build(
            &self.records,
            &layout,
            &self.config,
            self.zoom.displayed(now_ms),
            self.zoom.lod(),
            now_ms,
        );
        info!(
            "event=scene_build module=engine status=ok cells={} columns={} rows={} cell_size={:.2} metric={}",
            scene.cells.len(),
            layout.columns(),
            layout.rows_for(scene.cells.len()),
            layout.cell_size(),
            self.config.metric_mode.name()
        );
        self.scene = Some(scene);
        Ok(())
    }

    fn teardown(&mut self) {
        if let Some(scene) = self.scene.take() {
            debug!(
                "event=scene_teardown module=engine status=ok cells={}",
                scene.cells.len()
            );
        }
        self.records.clear();
    }

    /// Marks a cell as hovered. Returns `false` for unknown cells.
    pub fn pointer_enter(&mut self, index: usize) -> bool {
        self.set_highlight(index, true)
    }

    /// Clears a cell's hover state. Returns `false` for unknown cells.
    pub fn pointer_leave(&mut self, index: usize) -> bool {
        self.set_highlight(index, false)
    }

    fn set_highlight(&mut self, index: usize, highlighted: bool) -> bool {
        match self
            .scene
            .as_mut()
            .and_then(|scene| scene.cells.get_mut(index))
        {
            Some(cell) => {
                cell.highlighted = highlighted;
                true
            }
            None => false,
        }
    }

    /// Cell under a surface-space pointer position.
    pub fn cell_at(&self, surface_x: f64, surface_y: f64) -> Option<usize> {
        self.scene
            .as_ref()
            .and_then(|scene| scene.hit_test((surface_x, surface_y)))
    }

    /// Replaces the pan/zoom transform.
    pub fn set_transform(&mut self, transform: ZoomTransform, now_ms: f64) {
        let crossed = self.zoom.set(transform, now_ms);
        self.apply_transform(crossed, now_ms);
    }

    /// Sets the zoom scale around the surface origin, keeping translation.
    pub fn zoom_to(&mut self, scale: f64, now_ms: f64) {
        let transform = ZoomTransform {
            scale,
            ..self.zoom.target()
        };
        self.set_transform(transform, now_ms);
    }

    /// Zooms by a factor around a surface-space focal point (wheel/pinch).
    pub fn zoom_by(&mut self, factor: f64, focal: (f64, f64), now_ms: f64) {
        let crossed = self.zoom.zoom_by(factor, focal, now_ms);
        self.apply_transform(crossed, now_ms);
    }

    /// Pans by a surface-space delta (drag).
    pub fn pan_by(&mut self, dx: f64, dy: f64, now_ms: f64) {
        let crossed = self.zoom.pan_by(dx, dy, now_ms);
        self.apply_transform(crossed, now_ms);
    }

    fn apply_transform(&mut self, crossed: Option<LodLevel>, now_ms: f64) {
        let displayed = self.zoom.displayed(now_ms);
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        scene.transform = displayed;
        if let Some(lod) = crossed {
            scene.apply_lod(lod);
            info!(
                "event=lod_switch module=engine status=ok lod={:?} scale={:.2} threshold={:.2}",
                lod,
                self.zoom.target().scale,
                self.config.lod_threshold
            );
        }
    }

    /// Advances animations to `now_ms`.
    ///
    /// Returns whether another frame is needed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let zooming = self.zoom.tick(now_ms);
        let displayed = self.zoom.displayed(now_ms);
        match self.scene.as_mut() {
            Some(scene) => {
                scene.transform = displayed;
                let fading = scene.advance_fades(now_ms);
                zooming || fading
            }
            None => false,
        }
    }
}

impl Drop for HeatmapEngine {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn zoom_state_for(config: &EngineConfig) -> ZoomState {
    ZoomState::new(
        config.min_scale,
        config.max_scale,
        config.lod_threshold,
        config.transition_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::HeatmapEngine;
    use crate::config::engine_config::{ConfigError, EngineConfig};
    use crate::engine::zoom::{LodLevel, ZoomTransform};
    use crate::model::entry::RawEntry;

    fn entries(count: usize) -> Vec<RawEntry> {
        (0..count)
            .map(|day| RawEntry::new(format!("2022-10-{:02}", day + 1), "day"))
            .collect()
    }

    fn instant_config() -> EngineConfig {
        let mut config = EngineConfig::default().with_columns(4);
        config.transition_ms = 0.0;
        config
    }

    #[test]
    fn new_rejects_invalid_config() {
        let err = HeatmapEngine::new(EngineConfig::default().with_columns(0))
            .err()
            .expect("zero columns must be rejected");
        assert_eq!(err, ConfigError::ZeroColumns);
    }

    #[test]
    fn mount_rejects_non_positive_viewport_and_stays_unmounted() {
        let mut engine = HeatmapEngine::new(instant_config()).unwrap();
        let err = engine.mount(entries(3), -10.0, 0.0).unwrap_err();
        assert_eq!(err, ConfigError::InvalidViewportWidth(-10.0));
        assert!(!engine.is_mounted());
    }

    #[test]
    fn refresh_rebuilds_without_leaking_cells() {
        let mut engine = HeatmapEngine::new(instant_config()).unwrap();
        engine.mount(entries(9), 400.0, 0.0).unwrap();
        assert_eq!(engine.surface().unwrap().cells.len(), 9);

        engine.pointer_enter(2);
        engine.refresh(entries(3), 10.0).unwrap();
        let scene = engine.surface().unwrap();
        assert_eq!(scene.cells.len(), 3);
        assert_eq!(engine.records().len(), 3);
        assert!(scene.cells.iter().all(|cell| !cell.highlighted));
    }

    #[test]
    fn resize_recomputes_cell_size() {
        let mut engine = HeatmapEngine::new(instant_config()).unwrap();
        engine.mount(entries(5), 400.0, 0.0).unwrap();
        assert_eq!(engine.surface().unwrap().cell_size, 100.0);
        engine.resize(200.0, 0.0).unwrap();
        let scene = engine.surface().unwrap();
        assert_eq!(scene.cell_size, 50.0);
        assert_eq!((scene.width, scene.height), (200.0, 100.0));
    }

    #[test]
    fn unmount_clears_surface() {
        let mut engine = HeatmapEngine::new(instant_config()).unwrap();
        engine.mount(entries(2), 100.0, 0.0).unwrap();
        engine.unmount();
        assert!(engine.surface().is_none());
        assert!(engine.records().is_empty());
        assert!(engine.refresh(entries(2), 0.0).is_err());
    }

    #[test]
    fn hover_toggles_only_target_cell() {
        let mut engine = HeatmapEngine::new(instant_config()).unwrap();
        engine.mount(entries(4), 400.0, 0.0).unwrap();
        assert!(engine.pointer_enter(1));
        let scene = engine.surface().unwrap();
        assert!(scene.cells[1].highlighted);
        assert_eq!(scene.cells.iter().filter(|cell| cell.highlighted).count(), 1);

        assert!(engine.pointer_leave(1));
        assert!(!engine.surface().unwrap().cells[1].highlighted);
        assert!(!engine.pointer_enter(99));
    }

    #[test]
    fn gestures_before_mount_still_update_transform() {
        let mut engine = HeatmapEngine::new(instant_config()).unwrap();
        engine.zoom_to(6.0, 0.0);
        assert_eq!(engine.lod(), LodLevel::Detail);
        engine.mount(entries(2), 100.0, 0.0).unwrap();
        assert!(engine
            .surface()
            .unwrap()
            .cells
            .iter()
            .all(|cell| cell.detail_visible() && !cell.label.visible));
    }

    #[test]
    fn hit_test_follows_transform() {
        let mut engine = HeatmapEngine::new(instant_config()).unwrap();
        engine.mount(entries(8), 400.0, 0.0).unwrap();
        assert_eq!(engine.cell_at(150.0, 150.0), Some(5));
        engine.set_transform(ZoomTransform::new(-100.0, 0.0, 2.0), 0.0);
        assert_eq!(engine.cell_at(150.0, 50.0), Some(1));
        assert_eq!(engine.cell_at(-500.0, 0.0), None);
    }

    #[test]
    fn hit_test_outside_surface_finds_nothing() {
        let mut engine = HeatmapEngine::new(instant_config()).unwrap();
        engine.mount(entries(2), 400.0, 0.0).unwrap();
        assert_eq!(engine.cell_at(10.0, 1e30), None);
        assert_eq!(engine.cell_at(1e30, 10.0), None);
        assert_eq!(engine.cell_at(f64::NAN, 10.0), None);
        assert_eq!(engine.cell_at(250.0, 50.0), None);
        assert_eq!(engine.cell_at(10.0, 150.0), None);
        assert_eq!(engine.cell_at(150.0, 50.0), Some(1));
    }

    #[test]
    fn tick_fades_cells_in_by_metric() {
        let mut engine = HeatmapEngine::new(instant_config()).unwrap();
        let data = vec![
            RawEntry::new("2022-10-01", "low").with_sentiment_score(-1.0),
            RawEntry::new("2022-10-02", "high").with_sentiment_score(1.0),
        ];
        engine.mount(data, 400.0, 1000.0).unwrap();
        assert!(engine.surface().unwrap().cells.iter().all(|cell| cell.opacity == 0.0));

        assert!(engine.tick(1500.0));
        let scene = engine.surface().unwrap();
        assert_eq!(scene.cells[0].opacity, 1.0);
        assert!(scene.cells[1].opacity < 1.0);

        assert!(!engine.tick(3000.0));
        assert_eq!(engine.surface().unwrap().cells[1].opacity, 1.0);
    }
}
