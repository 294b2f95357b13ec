//! Tuning knobs for scroll-driven sections.

use serde::{Deserialize, Serialize};

/// Every hand-tuned number the scroll controller uses.
///
/// Variants that need a different feel override fields on top of
/// [`ScrollTuning::default`] instead of hard-coding constants in their views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollTuning {
    /// Delay before the active zone starts, as a fraction of viewport height.
    pub zone_start_offset: f64,
    /// Distance before the end of the pinned range where the zone stops, as a
    /// fraction of viewport height.
    pub zone_end_offset: f64,
    /// Lower edge of the hysteresis band (fractional remainder).
    pub retreat_threshold: f64,
    /// Upper edge of the hysteresis band (fractional remainder).
    pub advance_threshold: f64,
    /// Upper bound on samples per second, on top of one-per-frame.
    pub max_frame_rate_hz: f64,
    /// How long the zone boundary must stay crossed before the phase flips.
    pub settle_delay_ms: f64,
    pub entry_ms: f64,
    pub exit_ms: f64,
    pub base_slide_ms: u32,
    pub per_extra_slide_ms: u32,
    pub max_slide_ms: u32,
    pub style: StyleRange,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            zone_start_offset: 0.35,
            zone_end_offset: 0.4,
            retreat_threshold: 0.3,
            advance_threshold: 0.7,
            max_frame_rate_hz: 120.0,
            settle_delay_ms: 120.0,
            entry_ms: 450.0,
            exit_ms: 450.0,
            base_slide_ms: 500,
            per_extra_slide_ms: 150,
            max_slide_ms: 1200,
            style: StyleRange::default(),
        }
    }
}

impl ScrollTuning {
    /// Tuning for the journey timeline, which reveals its cards more slowly.
    pub fn journey() -> Self {
        Self {
            zone_start_offset: 0.4,
            zone_end_offset: 0.35,
            base_slide_ms: 650,
            ..Self::default()
        }
    }

    /// Tuning for the stacked project cards: no blur, stronger scale-in.
    pub fn layered_cards() -> Self {
        Self {
            style: StyleRange {
                scale: (0.82, 1.0),
                blur_px: (0.0, 0.0),
                ..StyleRange::default()
            },
            ..Self::default()
        }
    }
}

/// Start/end pairs for the per-item reveal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleRange {
    pub opacity: (f64, f64),
    pub scale: (f64, f64),
    pub blur_px: (f64, f64),
}

impl Default for StyleRange {
    fn default() -> Self {
        Self {
            opacity: (0.3, 1.0),
            scale: (0.9, 1.0),
            blur_px: (6.0, 0.0),
        }
    }
}
