//! Scroll event rate limiting.
//!
//! Scroll events arrive far more often than the page repaints. The throttle
//! coalesces them so at most one animation frame is pending at a time, and
//! drops frames that come sooner than the target rate allows.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDecision {
    Sample,
    Defer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameThrottle {
    min_interval_ms: f64,
    last_sample_ms: Option<f64>,
    frame_pending: bool,
}

impl FrameThrottle {
    pub fn new(max_rate_hz: f64) -> Self {
        let min_interval_ms = if max_rate_hz.is_finite() && max_rate_hz > 0.0 {
            1000.0 / max_rate_hz
        } else {
            0.0
        };
        Self {
            min_interval_ms,
            last_sample_ms: None,
            frame_pending: false,
        }
    }

    /// Record a scroll/resize event. Returns `true` when the caller must
    /// request an animation frame (none is pending yet).
    pub fn on_event(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Called from the animation frame callback.
    ///
    /// A frame that arrives too soon after the previous sample is deferred:
    /// the frame stays pending and the caller must request another one so
    /// the final scroll position is never lost.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> FrameDecision {
        match self.last_sample_ms {
            Some(last) if timestamp_ms - last < self.min_interval_ms => FrameDecision::Defer,
            _ => {
                self.frame_pending = false;
                self.last_sample_ms = Some(timestamp_ms);
                FrameDecision::Sample
            }
        }
    }

    /// Forget any pending frame, e.g. after the frame request was cancelled.
    pub fn cancel(&mut self) {
        self.frame_pending = false;
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bursts_request_one_frame() {
        let mut throttle = FrameThrottle::new(120.0);
        assert!(throttle.on_event());
        assert!(!throttle.on_event());
        assert!(!throttle.on_event());
        assert_eq!(throttle.on_frame(16.0), FrameDecision::Sample);
        assert!(throttle.on_event());
    }

    #[test]
    fn frames_faster_than_target_rate_are_skipped() {
        let mut throttle = FrameThrottle::new(120.0);
        throttle.on_event();
        assert_eq!(throttle.on_frame(0.0), FrameDecision::Sample);
        throttle.on_event();
        // 240Hz display: 4.17ms apart, below the 8.33ms floor.
        assert_eq!(throttle.on_frame(4.17), FrameDecision::Defer);
        assert!(throttle.frame_pending());
        assert!(!throttle.on_event());
        assert_eq!(throttle.on_frame(8.34), FrameDecision::Sample);
        assert!(!throttle.frame_pending());
    }

    #[test]
    fn cancel_clears_pending_frame() {
        let mut throttle = FrameThrottle::new(60.0);
        throttle.on_event();
        throttle.cancel();
        assert!(!throttle.frame_pending());
        assert!(throttle.on_event());
    }
}
