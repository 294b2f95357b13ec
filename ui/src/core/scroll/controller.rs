//! One controller for every scroll-driven section.
//!
//! Timeline, journey and layered-card sections differ only in how they
//! render; they all feed geometry into [`ScrollCarouselController::sample`]
//! and render from the returned [`FrameUpdate`].

use super::carousel::{slide_duration, SlideCommand};
use super::phase::{PhaseMachine, SectionPhase};
use super::progress::{ActivationZone, SectionRect};
use super::resolver::{HysteresisBand, IndexResolver};
use super::style::{interpolate_item_style, ItemStyle};
use super::tuning::ScrollTuning;

/// Geometry read from the page on one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub rect: SectionRect,
    pub viewport_height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameUpdate {
    pub progress: f64,
    pub active_index: usize,
    pub phase: SectionPhase,
    /// Present only when the active index moved on this frame.
    pub slide: Option<SlideCommand>,
    /// When the host should poll again (settle delay or animation end),
    /// in the same clock as `now_ms`.
    pub next_deadline_ms: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ScrollCarouselController {
    tuning: ScrollTuning,
    zone: ActivationZone,
    resolver: IndexResolver,
    phase: PhaseMachine,
    item_count: usize,
    progress: f64,
}

impl ScrollCarouselController {
    pub fn new(item_count: usize, tuning: ScrollTuning) -> Self {
        Self {
            zone: ActivationZone::from_tuning(&tuning),
            resolver: IndexResolver::new(HysteresisBand::from_tuning(&tuning)),
            phase: PhaseMachine::new(&tuning),
            tuning,
            item_count,
            progress: 0.0,
        }
    }

    pub fn tuning(&self) -> &ScrollTuning {
        &self.tuning
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn active_index(&self) -> usize {
        self.resolver.current()
    }

    pub fn phase(&self) -> SectionPhase {
        self.phase.phase()
    }

    /// Update the number of slides (content loaded late). Keeps the index valid.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        let clamped = self
            .resolver
            .current()
            .min(item_count.saturating_sub(1));
        self.resolver.reset(clamped);
    }

    /// Process one sampled frame. `None` geometry means the host element is
    /// gone; the sample is ignored.
    pub fn sample(
        &mut self,
        geometry: Option<SectionGeometry>,
        now_ms: f64,
    ) -> Option<FrameUpdate> {
        let geometry = geometry?;
        let progress = self.zone.progress(geometry.rect, geometry.viewport_height);
        let in_zone = self.zone.contains(geometry.rect, geometry.viewport_height);
        self.progress = progress;

        let phase = self.phase.observe(in_zone, now_ms);
        let from = self.resolver.current();
        let to = self.resolver.resolve(progress, self.item_count);
        let slide = (from != to && self.item_count > 0).then(|| SlideCommand {
            from,
            to,
            duration_ms: self.slide_duration(from, to),
        });

        Some(FrameUpdate {
            progress,
            active_index: to,
            phase,
            slide,
            next_deadline_ms: self.phase.next_deadline(),
        })
    }

    /// Advance timers without new geometry (settle/animation deadlines).
    pub fn tick(&mut self, now_ms: f64) -> SectionPhase {
        self.phase.tick(now_ms)
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.phase.next_deadline()
    }

    pub fn slide_duration(&self, from: usize, to: usize) -> u32 {
        slide_duration(
            from,
            to,
            self.tuning.base_slide_ms,
            self.tuning.per_extra_slide_ms,
            self.tuning.max_slide_ms,
        )
    }

    pub fn item_style(&self, index: usize) -> ItemStyle {
        interpolate_item_style(index, self.item_count, self.progress, &self.tuning.style)
    }

    pub fn item_styles(&self) -> Vec<ItemStyle> {
        (0..self.item_count).map(|i| self.item_style(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 800.0;

    fn geometry(scrolled: f64) -> Option<SectionGeometry> {
        Some(SectionGeometry {
            rect: SectionRect {
                top: -scrolled,
                height: 6.0 * VH,
            },
            viewport_height: VH,
        })
    }

    #[test]
    fn missing_element_is_a_no_op() {
        let mut controller = ScrollCarouselController::new(4, ScrollTuning::default());
        assert!(controller.sample(None, 0.0).is_none());
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn scrolling_through_emits_slide_commands() {
        let mut controller = ScrollCarouselController::new(4, ScrollTuning::default());
        let first = controller.sample(geometry(0.0), 0.0).unwrap();
        assert_eq!(first.active_index, 0);
        assert!(first.slide.is_none());

        let end = controller.sample(geometry(10_000.0), 16.0).unwrap();
        assert_eq!(end.progress, 1.0);
        assert_eq!(end.active_index, 3);
        assert_eq!(
            end.slide,
            Some(SlideCommand {
                from: 0,
                to: 3,
                duration_ms: 800
            })
        );
    }

    #[test]
    fn entering_the_zone_schedules_a_deadline() {
        let mut controller = ScrollCarouselController::new(3, ScrollTuning::default());
        let update = controller.sample(geometry(1000.0), 50.0).unwrap();
        assert_eq!(update.phase, SectionPhase::Inactive);
        assert_eq!(update.next_deadline_ms, Some(170.0));
        let later = controller.sample(geometry(1010.0), 170.0).unwrap();
        assert!(matches!(later.phase, SectionPhase::Entering { .. }));
    }

    #[test]
    fn shrinking_item_count_clamps_index() {
        let mut controller = ScrollCarouselController::new(5, ScrollTuning::default());
        controller.sample(geometry(10_000.0), 0.0);
        assert_eq!(controller.active_index(), 4);
        controller.set_item_count(2);
        assert_eq!(controller.active_index(), 1);
        assert_eq!(controller.item_styles().len(), 2);
    }
}
