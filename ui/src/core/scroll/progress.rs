//! Scroll offset to normalized progress.
//!
//! A pinned section scrolls for `height - viewport_height` pixels. The
//! active zone is the middle part of that range: it starts a fraction of a
//! viewport after the section top hits the viewport top and ends a fraction
//! of a viewport before the section releases.

use super::tuning::ScrollTuning;

/// Bounding box of the host section relative to the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationZone {
    pub start_offset: f64,
    pub end_offset: f64,
}

impl ActivationZone {
    pub fn from_tuning(tuning: &ScrollTuning) -> Self {
        Self {
            start_offset: tuning.zone_start_offset,
            end_offset: tuning.zone_end_offset,
        }
    }

    /// Scrolled pixels at which the zone begins and ends.
    pub fn bounds(&self, rect: SectionRect, viewport_height: f64) -> (f64, f64) {
        let pinned = (rect.height - viewport_height).max(0.0);
        let start = self.start_offset * viewport_height;
        let end = pinned - self.end_offset * viewport_height;
        (start, end)
    }

    /// How far through the zone the visitor is, clamped to `[0, 1]`.
    pub fn progress(&self, rect: SectionRect, viewport_height: f64) -> f64 {
        if !rect.top.is_finite() || !rect.height.is_finite() || !viewport_height.is_finite() {
            return 0.0;
        }
        let scrolled = -rect.top;
        let (start, end) = self.bounds(rect, viewport_height);
        if end <= start {
            return if scrolled < start { 0.0 } else { 1.0 };
        }
        clamp_unit((scrolled - start) / (end - start))
    }

    /// True while any part of the pinned range is on screen.
    pub fn contains(&self, rect: SectionRect, viewport_height: f64) -> bool {
        let scrolled = -rect.top;
        let (start, end) = self.bounds(rect, viewport_height);
        scrolled >= start && scrolled <= end.max(start)
    }
}

/// Free-function form used by callers that do not keep a zone around.
pub fn compute_progress(rect: SectionRect, viewport_height: f64, tuning: &ScrollTuning) -> f64 {
    ActivationZone::from_tuning(tuning).progress(rect, viewport_height)
}

pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn zone() -> ActivationZone {
        ActivationZone::from_tuning(&ScrollTuning::default())
    }

    fn rect_at(scrolled: f64) -> SectionRect {
        // 5 viewports tall: 4000px pinned, zone spans 350..3600.
        SectionRect {
            top: -scrolled,
            height: 5.0 * VH,
        }
    }

    #[test]
    fn zero_before_zone_and_one_after() {
        assert_eq!(zone().progress(rect_at(-200.0), VH), 0.0);
        assert_eq!(zone().progress(rect_at(349.0), VH), 0.0);
        assert_eq!(zone().progress(rect_at(3600.0), VH), 1.0);
        assert_eq!(zone().progress(rect_at(9000.0), VH), 1.0);
    }

    #[test]
    fn linear_inside_zone() {
        let mid = (350.0 + 3600.0) / 2.0;
        let p = zone().progress(rect_at(mid), VH);
        assert!((p - 0.5).abs() < 1e-9);
    }

    #[test]
    fn degenerate_zone_is_a_step() {
        let short = SectionRect {
            top: -100.0,
            height: 1.2 * VH,
        };
        assert_eq!(zone().progress(short, VH), 0.0);
        let past = SectionRect {
            top: -400.0,
            height: 1.2 * VH,
        };
        assert_eq!(zone().progress(past, VH), 1.0);
    }

    #[test]
    fn nan_geometry_reads_as_zero() {
        let broken = SectionRect {
            top: f64::NAN,
            height: 3000.0,
        };
        assert_eq!(zone().progress(broken, VH), 0.0);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }
}
