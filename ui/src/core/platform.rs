//! Browser glue: clocks, timers, scroll subscriptions and observers.
//!
//! Every handle here is scoped: dropping it removes the listener, cancels the
//! pending frame or timer, or disconnects the observer. Components keep them
//! in hook state and drop them on unmount. Off the web target the handles are
//! inert so server rendering and tests still compile and run.

use api::Locale;

use crate::core::scroll::{SectionGeometry, SectionRect};

pub use imp::{
    apply_document_locale, now_ms, section_geometry, sleep_ms, DeadlineTimer, ScrollSubscription,
    VisibilityObserver,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn geometry_from(top: f64, height: f64, viewport_height: f64) -> Option<SectionGeometry> {
    (viewport_height > 0.0).then_some(SectionGeometry {
        rect: SectionRect { top, height },
        viewport_height,
    })
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use super::{geometry_from, Locale};
    use crate::core::scroll::{FrameDecision, FrameThrottle, SectionGeometry};

    const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

    pub fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    pub async fn sleep_ms(ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    /// Bounding box of `#element_id`; `None` once the element is gone.
    pub fn section_geometry(element_id: &str) -> Option<SectionGeometry> {
        let window = web_sys::window()?;
        let element = window.document()?.get_element_by_id(element_id)?;
        let rect = element.get_bounding_client_rect();
        let viewport_height = window.inner_height().ok()?.as_f64()?;
        geometry_from(rect.top(), rect.height(), viewport_height)
    }

    pub fn apply_document_locale(locale: Locale) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = root.set_attribute("lang", locale.code());
        let _ = root.set_attribute("dir", locale.dir());
    }

    struct FrameState {
        throttle: FrameThrottle,
        frame_id: Option<i32>,
    }

    type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Window scroll/resize listener that calls back at most once per
    /// animation frame (and no faster than the throttle's rate).
    pub struct ScrollSubscription {
        window: web_sys::Window,
        state: Rc<RefCell<FrameState>>,
        frame_slot: FrameSlot,
        listener: Closure<dyn FnMut()>,
    }

    impl ScrollSubscription {
        pub fn new<F>(max_rate_hz: f64, on_frame: F) -> Option<Self>
        where
            F: FnMut(f64) + 'static,
        {
            let window = web_sys::window()?;
            let state = Rc::new(RefCell::new(FrameState {
                throttle: FrameThrottle::new(max_rate_hz),
                frame_id: None,
            }));
            let frame_slot: FrameSlot = Rc::new(RefCell::new(None));

            let frame_callback = {
                let window = window.clone();
                let state = state.clone();
                let slot = frame_slot.clone();
                let mut on_frame = on_frame;
                Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                    let decision = {
                        let mut state = state.borrow_mut();
                        state.frame_id = None;
                        state.throttle.on_frame(timestamp)
                    };
                    match decision {
                        FrameDecision::Sample => on_frame(timestamp),
                        FrameDecision::Defer => request_frame(&window, &slot, &state),
                    }
                })
            };
            frame_slot.borrow_mut().replace(frame_callback);

            let listener = {
                let window = window.clone();
                let state = state.clone();
                let slot = frame_slot.clone();
                Closure::<dyn FnMut()>::new(move || {
                    let wants_frame = state.borrow_mut().throttle.on_event();
                    if wants_frame {
                        request_frame(&window, &slot, &state);
                    }
                })
            };
            for event in SCROLL_EVENTS {
                let callback: &js_sys::Function = listener.as_ref().unchecked_ref();
                if let Err(err) = window.add_event_listener_with_callback(event, callback) {
                    tracing::warn!(event, ?err, "failed to attach scroll listener");
                }
            }

            // Sample once so the section renders in the right state before any scroll.
            if state.borrow_mut().throttle.on_event() {
                request_frame(&window, &frame_slot, &state);
            }

            Some(Self {
                window,
                state,
                frame_slot,
                listener,
            })
        }
    }

    fn request_frame(window: &web_sys::Window, slot: &FrameSlot, state: &Rc<RefCell<FrameState>>) {
        let slot = slot.borrow();
        let Some(callback) = slot.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => state.borrow_mut().frame_id = Some(id),
            Err(_) => state.borrow_mut().throttle.cancel(),
        }
    }

    impl Drop for ScrollSubscription {
        fn drop(&mut self) {
            for event in SCROLL_EVENTS {
                let callback: &js_sys::Function = self.listener.as_ref().unchecked_ref();
                let _ = self.window.remove_event_listener_with_callback(event, callback);
            }
            if let Some(id) = self.state.borrow_mut().frame_id.take() {
                let _ = self.window.cancel_animation_frame(id);
            }
            // Breaks the closure <-> slot cycle.
            self.frame_slot.borrow_mut().take();
        }
    }

    /// A single pending callback; re-arming or dropping cancels the previous one.
    #[derive(Default)]
    pub struct DeadlineTimer {
        pending: Option<Timeout>,
    }

    impl DeadlineTimer {
        pub fn arm<F>(&mut self, delay_ms: f64, callback: F)
        where
            F: FnOnce() + 'static,
        {
            let delay = delay_ms.max(0.0).ceil().min(u32::MAX as f64) as u32;
            self.pending = Some(Timeout::new(delay, callback));
        }

        pub fn cancel(&mut self) {
            if let Some(timeout) = self.pending.take() {
                timeout.cancel();
            }
        }
    }

    /// Intersection observer for a single element.
    pub struct VisibilityObserver {
        observer: web_sys::IntersectionObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
    }

    impl VisibilityObserver {
        pub fn new<F>(element_id: &str, mut on_change: F) -> Option<Self>
        where
            F: FnMut(bool) + 'static,
        {
            let document = web_sys::window()?.document()?;
            let element = document.get_element_by_id(element_id)?;

            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        if let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() {
                            on_change(entry.is_intersecting());
                        }
                    }
                },
            );
            let observer =
                web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
            observer.observe(&element);
            Some(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for VisibilityObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use std::time::Instant;

    use once_cell::sync::Lazy;

    use super::Locale;
    use crate::core::scroll::SectionGeometry;

    static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

    pub fn now_ms() -> f64 {
        EPOCH.elapsed().as_secs_f64() * 1000.0
    }

    pub async fn sleep_ms(ms: u32) {
        tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
    }

    /// There is no layout outside the browser.
    pub fn section_geometry(_element_id: &str) -> Option<SectionGeometry> {
        None
    }

    pub fn apply_document_locale(_locale: Locale) {}

    pub struct ScrollSubscription;

    impl ScrollSubscription {
        pub fn new<F>(_max_rate_hz: f64, _on_frame: F) -> Option<Self>
        where
            F: FnMut(f64) + 'static,
        {
            None
        }
    }

    #[derive(Default)]
    pub struct DeadlineTimer;

    impl DeadlineTimer {
        /// Nothing schedules outside the browser; the callback is dropped.
        pub fn arm<F>(&mut self, _delay_ms: f64, _callback: F)
        where
            F: FnOnce() + 'static,
        {
        }

        pub fn cancel(&mut self) {}
    }

    pub struct VisibilityObserver;

    impl VisibilityObserver {
        pub fn new<F>(_element_id: &str, _on_change: F) -> Option<Self>
        where
            F: FnMut(bool) + 'static,
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_viewport_yields_no_geometry() {
        assert!(geometry_from(0.0, 100.0, 0.0).is_none());
        assert!(geometry_from(-20.0, 100.0, 800.0).is_some());
    }

    #[test]
    fn clock_is_monotonic() {
        let a = now_ms();
        let b = now_ms();
        assert!(b >= a);
    }
}
