//! Pan/zoom state machine.
//!
//! # Invariants
//! - The target transform scale always lies inside the configured extent.
//! - Level of detail depends only on the target scale versus the threshold.
//! - A new gesture replaces the previous target; there is no history.

use crate::render::animation::{ease_cubic_in_out, progress};

/// Affine pan/zoom transform applied to the root group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub fn new(translate_x: f64, translate_y: f64, scale: f64) -> Self {
        Self {
            translate_x,
            translate_y,
            scale,
        }
    }

    /// Maps a content point to surface coordinates.
    pub fn apply(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (
            x * self.scale + self.translate_x,
            y * self.scale + self.translate_y,
        )
    }

    /// Maps a surface point back to content coordinates.
    pub fn invert(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (
            (x - self.translate_x) / self.scale,
            (y - self.translate_y) / self.scale,
        )
    }

    /// Rescales around a surface-space focal point, keeping it fixed.
    pub fn scaled_around(&self, scale: f64, focal: (f64, f64)) -> Self {
        let (content_x, content_y) = self.invert(focal);
        Self {
            translate_x: focal.0 - content_x * scale,
            translate_y: focal.1 - content_y * scale,
            scale,
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            translate_x: self.translate_x + dx,
            translate_y: self.translate_y + dy,
            scale: self.scale,
        }
    }

    fn interpolate(&self, to: &Self, t: f64) -> Self {
        Self {
            translate_x: self.translate_x + (to.translate_x - self.translate_x) * t,
            translate_y: self.translate_y + (to.translate_y - self.translate_y) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }

    /// SVG `transform` attribute value.
    pub fn to_svg_attr(&self) -> String {
        format!(
            "translate({},{}) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

/// Which compact/expanded content cells show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LodLevel {
    Label,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ZoomTransition {
    from: ZoomTransform,
    started_ms: f64,
}

/// Current and displayed transform plus eased transition bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    min_scale: f64,
    max_scale: f64,
    lod_threshold: f64,
    transition_ms: f64,
    target: ZoomTransform,
    transition: Option<ZoomTransition>,
}

impl ZoomState {
    pub fn new(min_scale: f64, max_scale: f64, lod_threshold: f64, transition_ms: f64) -> Self {
        Self {
            min_scale,
            max_scale,
            lod_threshold,
            transition_ms,
            target: ZoomTransform::IDENTITY,
            transition: None,
        }
    }

    /// The transform the state machine has settled on.
    pub fn target(&self) -> ZoomTransform {
        self.target
    }

    pub fn lod(&self) -> LodLevel {
        lod_for_scale(self.target.scale, self.lod_threshold)
    }

    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.target.scale;
        }
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Replaces the target transform, clamping its scale.
    ///
    /// Returns the new level of detail when the threshold was crossed.
    pub fn set(&mut self, transform: ZoomTransform, now_ms: f64) -> Option<LodLevel> {
        let previous_lod = self.lod();
        let displayed = self.displayed(now_ms);
        let clamped = self.sanitize(transform);

        self.transition = (self.transition_ms > 0.0 && displayed != clamped).then_some(
            ZoomTransition {
                from: displayed,
                started_ms: now_ms,
            },
        );
        self.target = clamped;

        let lod = self.lod();
        (lod != previous_lod).then_some(lod)
    }

    /// Replaces the target without animating toward it.
    pub fn jump(&mut self, transform: ZoomTransform) {
        self.target = self.sanitize(transform);
        self.transition = None;
    }

    /// Clamps the scale and keeps the current translation for non-finite
    /// components.
    fn sanitize(&self, transform: ZoomTransform) -> ZoomTransform {
        let finite_or = |value: f64, current: f64| if value.is_finite() { value } else { current };
        ZoomTransform {
            translate_x: finite_or(transform.translate_x, self.target.translate_x),
            translate_y: finite_or(transform.translate_y, self.target.translate_y),
            scale: self.clamp_scale(transform.scale),
        }
    }

    /// Zooms by `factor` around a surface-space focal point.
    pub fn zoom_by(&mut self, factor: f64, focal: (f64, f64), now_ms: f64) -> Option<LodLevel> {
        let scale = self.clamp_scale(self.target.scale * factor);
        let next = self.target.scaled_around(scale, focal);
        self.set(next, now_ms)
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64, now_ms: f64) -> Option<LodLevel> {
        let next = self.target.translated(dx, dy);
        self.set(next, now_ms)
    }

    /// Transform to draw at `now_ms`, eased toward the target.
    pub fn displayed(&self, now_ms: f64) -> ZoomTransform {
        match self.transition {
            Some(transition) => {
                let t = progress(transition.started_ms, self.transition_ms, now_ms);
                transition
                    .from
                    .interpolate(&self.target, ease_cubic_in_out(t))
            }
            None => self.target,
        }
    }

    /// Drops finished transitions. Returns whether one is still running.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if let Some(transition) = self.transition {
            if progress(transition.started_ms, self.transition_ms, now_ms) >= 1.0 {
                self.transition = None;
            }
        }
        self.transition.is_some()
    }
}

/// Detail shows strictly above the threshold.
pub fn lod_for_scale(scale: f64, threshold: f64) -> LodLevel {
    if scale > threshold {
        LodLevel::Detail
    } else {
        LodLevel::Label
    }
}

#[cfg(test)]
mod tests {
    use super::{lod_for_scale, LodLevel, ZoomState, ZoomTransform};

    fn state() -> ZoomState {
        ZoomState::new(0.5, 25.0, 5.0, 0.0)
    }

    #[test]
    fn scale_is_clamped_to_extent() {
        let mut zoom = state();
        zoom.set(ZoomTransform::new(0.0, 0.0, 100.0), 0.0);
        assert_eq!(zoom.target().scale, 25.0);
        zoom.set(ZoomTransform::new(0.0, 0.0, 0.01), 0.0);
        assert_eq!(zoom.target().scale, 0.5);
    }

    #[test]
    fn crossing_threshold_reports_lod_once() {
        let mut zoom = state();
        assert_eq!(zoom.set(ZoomTransform::new(0.0, 0.0, 6.0), 0.0), Some(LodLevel::Detail));
        assert_eq!(zoom.set(ZoomTransform::new(0.0, 0.0, 7.0), 0.0), None);
        assert_eq!(zoom.set(ZoomTransform::new(0.0, 0.0, 1.0), 0.0), Some(LodLevel::Label));
    }

    #[test]
    fn threshold_itself_shows_labels() {
        assert_eq!(lod_for_scale(5.0, 5.0), LodLevel::Label);
        assert_eq!(lod_for_scale(5.0001, 5.0), LodLevel::Detail);
    }

    #[test]
    fn zoom_by_keeps_focal_point_fixed() {
        let mut zoom = state();
        zoom.zoom_by(2.0, (100.0, 50.0), 0.0);
        let target = zoom.target();
        assert_eq!(target.scale, 2.0);
        assert_eq!(target.apply((100.0, 50.0)), (100.0, 50.0));
        assert_eq!(target.invert((100.0, 50.0)), (100.0, 50.0));
    }

    #[test]
    fn pan_translates_without_scaling() {
        let mut zoom = state();
        zoom.pan_by(10.0, -4.0, 0.0);
        assert_eq!(zoom.target(), ZoomTransform::new(10.0, -4.0, 1.0));
    }

    #[test]
    fn transition_eases_toward_target_and_finishes() {
        let mut zoom = ZoomState::new(0.5, 25.0, 5.0, 200.0);
        zoom.set(ZoomTransform::new(0.0, 0.0, 3.0), 1000.0);
        assert_eq!(zoom.displayed(1000.0).scale, 1.0);
        assert_eq!(zoom.displayed(1100.0).scale, 2.0);
        assert!(zoom.tick(1100.0));
        assert!(!zoom.tick(1200.0));
        assert_eq!(zoom.displayed(1200.0).scale, 3.0);
    }

    #[test]
    fn gesture_mid_transition_restarts_from_displayed() {
        let mut zoom = ZoomState::new(0.5, 25.0, 5.0, 200.0);
        zoom.set(ZoomTransform::new(0.0, 0.0, 3.0), 0.0);
        zoom.set(ZoomTransform::new(0.0, 0.0, 1.0), 100.0);
        assert_eq!(zoom.target().scale, 1.0);
        assert_eq!(zoom.displayed(100.0).scale, 2.0);
    }

    #[test]
    fn non_finite_translation_keeps_previous_offset() {
        let mut zoom = state();
        zoom.pan_by(10.0, 5.0, 0.0);
        zoom.pan_by(f64::NAN, 3.0, 0.0);
        assert_eq!(zoom.target(), ZoomTransform::new(10.0, 8.0, 1.0));

        zoom.zoom_by(2.0, (f64::INFINITY, 0.0), 0.0);
        let target = zoom.target();
        assert_eq!(target.scale, 2.0);
        assert_eq!(target.translate_x, 10.0);
        assert!(!target.to_svg_attr().contains("NaN"));

        zoom.jump(ZoomTransform::new(f64::NEG_INFINITY, f64::NAN, 3.0));
        assert_eq!(zoom.target(), ZoomTransform::new(10.0, target.translate_y, 3.0));
    }

    #[test]
    fn nan_scale_keeps_previous_scale() {
        let mut zoom = state();
        zoom.set(ZoomTransform::new(0.0, 0.0, 4.0), 0.0);
        zoom.set(ZoomTransform::new(0.0, 0.0, f64::NAN), 0.0);
        assert_eq!(zoom.target().scale, 4.0);
    }
}
