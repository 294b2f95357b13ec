//! `use_scroll_carousel`: binds a [`ScrollCarouselController`] to the page.
//!
//! The controller and carousel track live behind an `Rc<RefCell<..>>` owned
//! by the hook; browser callbacks mutate it and publish a [`CarouselView`]
//! snapshot into a signal the renderers read. The scroll subscription and the
//! phase deadline timer are released when the component unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::platform::{now_ms, section_geometry, DeadlineTimer, ScrollSubscription};
use crate::core::scroll::{
    ItemStyle, ScrollCarouselController, ScrollTuning, SectionPhase, TrackCarousel,
};

/// What a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    pub progress: f64,
    pub active_index: usize,
    pub phase: SectionPhase,
    pub track: TrackCarousel,
    pub styles: Vec<ItemStyle>,
}

struct CarouselState {
    controller: ScrollCarouselController,
    track: TrackCarousel,
}

impl CarouselState {
    fn snapshot(&self) -> CarouselView {
        CarouselView {
            progress: self.controller.progress(),
            active_index: self.controller.active_index(),
            phase: self.controller.phase(),
            track: self.track,
            styles: self.controller.item_styles(),
        }
    }
}

type SharedState = Rc<RefCell<CarouselState>>;
type SharedTimer = Rc<RefCell<DeadlineTimer>>;

pub fn use_scroll_carousel(
    section_id: String,
    item_count: usize,
    tuning: ScrollTuning,
) -> Signal<CarouselView> {
    let state: SharedState = use_hook(|| {
        Rc::new(RefCell::new(CarouselState {
            controller: ScrollCarouselController::new(item_count, tuning),
            track: TrackCarousel::default(),
        }))
    });
    let timer: SharedTimer = use_hook(|| Rc::new(RefCell::new(DeadlineTimer::default())));
    let subscription: Rc<RefCell<Option<ScrollSubscription>>> =
        use_hook(|| Rc::new(RefCell::new(None)));
    let view = use_signal(|| state.borrow().snapshot());

    // Content can arrive after mount; keep the controller's slide count in step.
    {
        let state = state.clone();
        use_effect(use_reactive!(|(item_count,)| {
            let changed = state.borrow().controller.item_count() != item_count;
            if changed {
                state.borrow_mut().controller.set_item_count(item_count);
                publish(&state, view);
            }
        }));
    }

    // Subscribe after the first render so the section element exists.
    {
        let state = state.clone();
        let timer = timer.clone();
        let subscription = subscription.clone();
        use_effect(move || {
            if subscription.borrow().is_some() {
                return;
            }
            let on_frame = {
                let state = state.clone();
                let timer = timer.clone();
                let section_id = section_id.clone();
                move |_timestamp: f64| on_sample(&state, &timer, &section_id, view)
            };
            let created = ScrollSubscription::new(tuning.max_frame_rate_hz, on_frame);
            if created.is_none() {
                tracing::trace!("scroll subscription unavailable on this platform");
            }
            *subscription.borrow_mut() = created;
        });
    }

    use_drop(move || {
        timer.borrow_mut().cancel();
        subscription.borrow_mut().take();
    });

    view
}

fn on_sample(
    state: &SharedState,
    timer: &SharedTimer,
    section_id: &str,
    view: Signal<CarouselView>,
) {
    let geometry = section_geometry(section_id);
    let update = state.borrow_mut().controller.sample(geometry, now_ms());
    let Some(update) = update else {
        return;
    };
    if let Some(slide) = update.slide {
        tracing::trace!(from = slide.from, to = slide.to, duration_ms = slide.duration_ms, "slide");
        slide.apply(&mut state.borrow_mut().track);
    }
    publish(state, view);
    schedule_deadline(state, timer, view);
}

/// Re-arm the phase timer for the controller's next deadline, if any.
fn schedule_deadline(state: &SharedState, timer: &SharedTimer, view: Signal<CarouselView>) {
    let Some(deadline) = state.borrow().controller.next_deadline() else {
        timer.borrow_mut().cancel();
        return;
    };
    let delay = (deadline - now_ms()).max(0.0);
    let on_deadline = {
        let state = state.clone();
        let timer = timer.clone();
        move || {
            state.borrow_mut().controller.tick(now_ms());
            publish(&state, view);
            schedule_deadline(&state, &timer, view);
        }
    };
    timer.borrow_mut().arm(delay, on_deadline);
}

fn publish(state: &SharedState, mut view: Signal<CarouselView>) {
    let next = state.borrow().snapshot();
    if *view.peek() != next {
        view.set(next);
    }
}
