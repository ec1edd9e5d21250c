//! Frame-clock driven visual effects.
//!
//! Effects are sampled from host-supplied timestamps in milliseconds. They
//! never hold up interaction handling: sampling is a pure function of time.

/// Cubic ease-in-out on `t ∈ [0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Progress of an effect started at `started_ms` lasting `duration_ms`.
///
/// Zero-length effects are complete immediately.
pub fn progress(started_ms: f64, duration_ms: f64, now_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    ((now_ms - started_ms) / duration_ms).clamp(0.0, 1.0)
}

/// Entrance fade of one cell from transparent to opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeIn {
    pub started_ms: f64,
    pub duration_ms: f64,
}

impl FadeIn {
    /// Higher metrics fade in more slowly: `base + metric * scale`.
    pub fn for_metric(metric: f64, base_ms: f64, scale_ms: f64, started_ms: f64) -> Self {
        Self {
            started_ms,
            duration_ms: base_ms + metric * scale_ms,
        }
    }

    pub fn opacity_at(&self, now_ms: f64) -> f64 {
        ease_cubic_in_out(progress(self.started_ms, self.duration_ms, now_ms))
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        progress(self.started_ms, self.duration_ms, now_ms) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::{ease_cubic_in_out, progress, FadeIn};

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!(ease_cubic_in_out(0.25) < 0.25);
        assert!(ease_cubic_in_out(0.75) > 0.75);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        assert_eq!(progress(100.0, 0.0, 100.0), 1.0);
    }

    #[test]
    fn fade_duration_grows_with_metric() {
        let low = FadeIn::for_metric(0.0, 500.0, 1500.0, 0.0);
        let high = FadeIn::for_metric(1.0, 500.0, 1500.0, 0.0);
        assert_eq!(low.duration_ms, 500.0);
        assert_eq!(high.duration_ms, 2000.0);
        assert!(low.opacity_at(400.0) > high.opacity_at(400.0));
        assert!(low.is_finished(500.0));
        assert!(!high.is_finished(500.0));
        assert_eq!(high.opacity_at(0.0), 0.0);
        assert_eq!(high.opacity_at(5000.0), 1.0);
    }
}
