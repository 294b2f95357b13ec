//! Per-item reveal styling derived from section progress.

use super::progress::clamp_unit;
use super::tuning::StyleRange;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub opacity: f64,
    pub scale: f64,
    pub blur_px: f64,
}

impl ItemStyle {
    pub fn start(range: &StyleRange) -> Self {
        Self {
            opacity: range.opacity.0,
            scale: range.scale.0,
            blur_px: range.blur_px.0,
        }
    }

    pub fn end(range: &StyleRange) -> Self {
        Self {
            opacity: range.opacity.1,
            scale: range.scale.1,
            blur_px: range.blur_px.1,
        }
    }

    /// Inline CSS for the item wrapper.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "opacity: {:.3}; transform: scale({:.3});",
            self.opacity, self.scale
        );
        if self.blur_px > 0.0005 {
            css.push_str(&format!(" filter: blur({:.2}px);", self.blur_px));
        }
        css
    }
}

/// Progress of item `index` through its own window `[i/n, (i+1)/n]`.
pub fn local_progress(index: usize, item_count: usize, progress: f64) -> f64 {
    if item_count == 0 {
        return 0.0;
    }
    clamp_unit(clamp_unit(progress) * item_count as f64 - index as f64)
}

pub fn interpolate_item_style(
    index: usize,
    item_count: usize,
    progress: f64,
    range: &StyleRange,
) -> ItemStyle {
    let t = local_progress(index, item_count, progress);
    ItemStyle {
        opacity: lerp(range.opacity, t),
        scale: lerp(range.scale, t),
        blur_px: lerp(range.blur_px, t),
    }
}

fn lerp((from, to): (f64, f64), t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_window_is_scoped() {
        // Four items: item 1 owns progress 0.25..0.5.
        assert_eq!(local_progress(1, 4, 0.2), 0.0);
        assert!((local_progress(1, 4, 0.375) - 0.5).abs() < 1e-9);
        assert_eq!(local_progress(1, 4, 0.6), 1.0);
    }

    #[test]
    fn halfway_through_a_window_is_halfway_styled() {
        let range = StyleRange::default();
        let style = interpolate_item_style(0, 2, 0.25, &range);
        assert!((style.opacity - 0.65).abs() < 1e-9);
        assert!((style.scale - 0.95).abs() < 1e-9);
        assert!((style.blur_px - 3.0).abs() < 1e-9);
    }

    #[test]
    fn css_omits_blur_at_rest() {
        let range = StyleRange::default();
        assert_eq!(
            ItemStyle::end(&range).to_css(),
            "opacity: 1.000; transform: scale(1.000);"
        );
        assert!(ItemStyle::start(&range).to_css().contains("blur(6.00px)"));
    }
}
