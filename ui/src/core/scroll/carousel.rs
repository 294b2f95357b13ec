//! The seam between the scroll controller and whatever renders the slides.

/// Anything that can be told to show a slide.
pub trait Carousel {
    fn slide_to(&mut self, index: usize, duration_ms: u32);
}

/// A resolved move, produced when the active index changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCommand {
    pub from: usize,
    pub to: usize,
    pub duration_ms: u32,
}

impl SlideCommand {
    pub fn apply<C: Carousel + ?Sized>(&self, carousel: &mut C) {
        carousel.slide_to(self.to, self.duration_ms);
    }
}

/// Longer transitions for longer jumps, capped so a fast fling stays snappy.
pub fn slide_duration(from: usize, to: usize, base_ms: u32, per_extra_ms: u32, max_ms: u32) -> u32 {
    let distance = from.abs_diff(to) as u32;
    if distance == 0 {
        return 0;
    }
    base_ms
        .saturating_add(per_extra_ms.saturating_mul(distance - 1))
        .min(max_ms.max(base_ms))
}

/// Translate-based track, the carousel used by the site's sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackCarousel {
    pub index: usize,
    pub duration_ms: u32,
}

impl TrackCarousel {
    /// Inline style for the sliding track. `rtl` mirrors the direction.
    pub fn track_css(&self, rtl: bool) -> String {
        let offset = self.index as f64 * 100.0;
        let signed = if rtl { offset } else { -offset };
        format!(
            "transform: translate3d({signed}%, 0, 0); \
             transition: transform {}ms cubic-bezier(0.22, 1, 0.36, 1);",
            self.duration_ms
        )
    }
}

impl Carousel for TrackCarousel {
    fn slide_to(&mut self, index: usize, duration_ms: u32) {
        self.index = index;
        self.duration_ms = duration_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_grows_with_distance_and_caps() {
        assert_eq!(slide_duration(2, 2, 500, 150, 1200), 0);
        assert_eq!(slide_duration(0, 1, 500, 150, 1200), 500);
        assert_eq!(slide_duration(3, 0, 500, 150, 1200), 800);
        assert_eq!(slide_duration(0, 20, 500, 150, 1200), 1200);
    }

    #[test]
    fn commands_drive_the_track() {
        let mut track = TrackCarousel::default();
        SlideCommand {
            from: 0,
            to: 2,
            duration_ms: 650,
        }
        .apply(&mut track);
        assert_eq!(track.index, 2);
        assert!(track.track_css(false).contains("translate3d(-200%"));
        assert!(track.track_css(true).contains("translate3d(200%"));
        assert!(track.track_css(false).contains("650ms"));
    }
}
