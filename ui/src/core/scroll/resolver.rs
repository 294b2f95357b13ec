//! Progress to slide index, with a hysteresis band.
//!
//! The fractional position `p * (n - 1)` is split into a base index and a
//! remainder. The index only moves forward once the remainder reaches the
//! advance threshold and only moves back once it drops to the retreat
//! threshold, so noisy scroll input near a boundary cannot make the carousel
//! flap between two slides.

use super::progress::clamp_unit;
use super::tuning::ScrollTuning;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HysteresisBand {
    pub retreat: f64,
    pub advance: f64,
}

impl HysteresisBand {
    pub fn new(retreat: f64, advance: f64) -> Self {
        let retreat = clamp_unit(retreat);
        let advance = clamp_unit(advance).max(retreat);
        Self { retreat, advance }
    }

    pub fn from_tuning(tuning: &ScrollTuning) -> Self {
        Self::new(tuning.retreat_threshold, tuning.advance_threshold)
    }
}

impl Default for HysteresisBand {
    fn default() -> Self {
        Self::from_tuning(&ScrollTuning::default())
    }
}

/// Next active index given the one currently shown.
///
/// Always returns a value in `[0, item_count - 1]` (0 for an empty carousel).
pub fn resolve_index(
    progress: f64,
    item_count: usize,
    previous: usize,
    band: HysteresisBand,
) -> usize {
    if item_count <= 1 {
        return 0;
    }
    let last = item_count - 1;
    let position = clamp_unit(progress) * last as f64;

    // Highest index whose advance point has been reached, and lowest index
    // whose retreat point has not been passed. A zero advance point means
    // "any remainder at all", so an exact integer position does not advance;
    // a retreat point of one is the mirror case.
    let forward = if band.advance > 0.0 {
        ((position - band.advance).floor() + 1.0).max(0.0)
    } else {
        position.ceil()
    };
    let backward = if band.retreat < 1.0 {
        (position - band.retreat).ceil().max(0.0)
    } else {
        position.floor()
    };
    let (forward, backward) = (forward as usize, backward as usize);

    let previous = previous.min(last);
    let next = if previous < forward {
        forward
    } else if previous > backward {
        backward
    } else {
        previous
    };
    next.min(last)
}

/// Stateful wrapper that remembers the index between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexResolver {
    band: HysteresisBand,
    current: usize,
}

impl IndexResolver {
    pub fn new(band: HysteresisBand) -> Self {
        Self { band, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn resolve(&mut self, progress: f64, item_count: usize) -> usize {
        self.current = resolve_index(progress, item_count, self.current, self.band);
        self.current
    }

    pub fn reset(&mut self, index: usize) {
        self.current = index;
    }
}

impl Default for IndexResolver {
    fn default() -> Self {
        Self::new(HysteresisBand::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_first_and_last() {
        let band = HysteresisBand::default();
        assert_eq!(resolve_index(0.0, 5, 0, band), 0);
        assert_eq!(resolve_index(1.0, 5, 0, band), 4);
        assert_eq!(resolve_index(0.0, 5, 4, band), 0);
    }

    #[test]
    fn advances_only_past_upper_threshold() {
        let band = HysteresisBand::default();
        // n = 3 -> position = 2p; boundary between 0 and 1 sits at p = 0.25.
        assert_eq!(resolve_index(0.30, 3, 0, band), 0); // position 0.6
        assert_eq!(resolve_index(0.36, 3, 0, band), 1); // position 0.72
    }

    #[test]
    fn retreats_only_past_lower_threshold() {
        let band = HysteresisBand::default();
        assert_eq!(resolve_index(0.20, 3, 1, band), 1); // position 0.4
        assert_eq!(resolve_index(0.14, 3, 1, band), 0); // position 0.28
    }

    #[test]
    fn tiny_carousels_stay_at_zero() {
        let band = HysteresisBand::default();
        assert_eq!(resolve_index(0.9, 0, 3, band), 0);
        assert_eq!(resolve_index(0.9, 1, 0, band), 0);
    }

    #[test]
    fn stale_previous_index_is_clamped() {
        let band = HysteresisBand::default();
        assert_eq!(resolve_index(0.5, 3, 10, band), 1);
    }

    #[test]
    fn zero_band_keeps_endpoints() {
        let band = HysteresisBand::new(0.0, 0.0);
        for previous in 0..3 {
            assert_eq!(resolve_index(0.0, 3, previous, band), 0);
            assert_eq!(resolve_index(1.0, 3, previous, band), 2);
        }
        assert_eq!(resolve_index(0.5, 3, 0, band), 1);
        assert_eq!(resolve_index(0.51, 3, 0, band), 2);
    }

    #[test]
    fn full_band_keeps_endpoints() {
        let band = HysteresisBand::new(1.0, 1.0);
        for previous in 0..3 {
            assert_eq!(resolve_index(0.0, 3, previous, band), 0);
            assert_eq!(resolve_index(1.0, 3, previous, band), 2);
        }
    }

    #[test]
    fn degenerate_band_rounds_down() {
        let band = HysteresisBand::new(1.0, 1.0);
        assert_eq!(resolve_index(0.49, 3, 0, band), 0);
        assert_eq!(resolve_index(0.5, 3, 0, band), 1);
    }
}
