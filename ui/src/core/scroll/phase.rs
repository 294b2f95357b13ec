//! Section lifecycle: `Inactive -> Entering -> Active -> Exiting -> Inactive`.
//!
//! Entering and exiting are short timed animations. Crossing the zone edge
//! only counts once the new side has held for the settle delay, so jittery
//! scrolling right at the edge does not replay the entry animation.

use super::tuning::ScrollTuning;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionPhase {
    Inactive,
    Entering { since_ms: f64 },
    Active,
    Exiting { since_ms: f64 },
}

impl SectionPhase {
    /// Whether the controller should be driving the carousel.
    pub fn is_live(&self) -> bool {
        matches!(self, SectionPhase::Entering { .. } | SectionPhase::Active)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SectionPhase::Inactive => "scroll-section--inactive",
            SectionPhase::Entering { .. } => "scroll-section--entering",
            SectionPhase::Active => "scroll-section--active",
            SectionPhase::Exiting { .. } => "scroll-section--exiting",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseMachine {
    phase: SectionPhase,
    /// When the zone flag started disagreeing with the phase.
    crossing_since_ms: Option<f64>,
    settle_ms: f64,
    entry_ms: f64,
    exit_ms: f64,
}

impl PhaseMachine {
    pub fn new(tuning: &ScrollTuning) -> Self {
        Self {
            phase: SectionPhase::Inactive,
            crossing_since_ms: None,
            settle_ms: tuning.settle_delay_ms.max(0.0),
            entry_ms: tuning.entry_ms.max(0.0),
            exit_ms: tuning.exit_ms.max(0.0),
        }
    }

    pub fn phase(&self) -> SectionPhase {
        self.phase
    }

    /// Feed the latest zone membership. Returns the phase after the update.
    pub fn observe(&mut self, in_zone: bool, now_ms: f64) -> SectionPhase {
        self.finish_animations(now_ms);

        if in_zone == self.phase.is_live() {
            self.crossing_since_ms = None;
            return self.phase;
        }

        let since = *self.crossing_since_ms.get_or_insert(now_ms);
        if now_ms - since >= self.settle_ms {
            self.crossing_since_ms = None;
            self.phase = if in_zone {
                SectionPhase::Entering { since_ms: now_ms }
            } else {
                SectionPhase::Exiting { since_ms: now_ms }
            };
            self.finish_animations(now_ms);
        }
        self.phase
    }

    /// Advance timed animations and pending edge crossings without new
    /// scroll input.
    pub fn tick(&mut self, now_ms: f64) -> SectionPhase {
        if self.crossing_since_ms.is_some() {
            // A pending crossing always points at the other side of the edge.
            return self.observe(!self.phase.is_live(), now_ms);
        }
        self.finish_animations(now_ms);
        self.phase
    }

    /// Earliest time at which calling [`observe`](Self::observe) or
    /// [`tick`](Self::tick) again could change the phase.
    pub fn next_deadline(&self) -> Option<f64> {
        let animation = match self.phase {
            SectionPhase::Entering { since_ms } => Some(since_ms + self.entry_ms),
            SectionPhase::Exiting { since_ms } => Some(since_ms + self.exit_ms),
            _ => None,
        };
        let settle = self.crossing_since_ms.map(|since| since + self.settle_ms);
        match (animation, settle) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn finish_animations(&mut self, now_ms: f64) {
        match self.phase {
            SectionPhase::Entering { since_ms } if now_ms - since_ms >= self.entry_ms => {
                self.phase = SectionPhase::Active;
            }
            SectionPhase::Exiting { since_ms } if now_ms - since_ms >= self.exit_ms => {
                self.phase = SectionPhase::Inactive;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> PhaseMachine {
        PhaseMachine::new(&ScrollTuning {
            settle_delay_ms: 100.0,
            entry_ms: 300.0,
            exit_ms: 200.0,
            ..ScrollTuning::default()
        })
    }

    #[test]
    fn entry_waits_for_settle_then_animates() {
        let mut m = machine();
        assert_eq!(m.observe(true, 0.0), SectionPhase::Inactive);
        assert_eq!(m.next_deadline(), Some(100.0));
        assert_eq!(m.observe(true, 100.0), SectionPhase::Entering { since_ms: 100.0 });
        assert_eq!(m.next_deadline(), Some(400.0));
        assert_eq!(m.tick(400.0), SectionPhase::Active);
        assert_eq!(m.next_deadline(), None);
    }

    #[test]
    fn edge_jitter_never_enters() {
        let mut m = machine();
        for step in 0..20 {
            let t = step as f64 * 30.0;
            m.observe(step % 2 == 0, t);
        }
        assert_eq!(m.phase(), SectionPhase::Inactive);
    }

    #[test]
    fn exit_runs_symmetrically() {
        let mut m = machine();
        m.observe(true, 0.0);
        m.observe(true, 100.0);
        m.tick(400.0);
        m.observe(false, 500.0);
        assert_eq!(m.observe(false, 600.0), SectionPhase::Exiting { since_ms: 600.0 });
        assert_eq!(m.tick(800.0), SectionPhase::Inactive);
    }

    #[test]
    fn leaving_mid_entry_switches_to_exit() {
        let mut m = machine();
        m.observe(true, 0.0);
        m.observe(true, 100.0);
        m.observe(false, 150.0);
        assert_eq!(m.observe(false, 250.0), SectionPhase::Exiting { since_ms: 250.0 });
    }

    #[test]
    fn settled_crossing_completes_on_tick() {
        let mut m = machine();
        m.observe(true, 0.0);
        assert_eq!(m.tick(50.0), SectionPhase::Inactive);
        assert_eq!(m.tick(100.0), SectionPhase::Entering { since_ms: 100.0 });
    }

    #[test]
    fn zero_settle_flips_immediately() {
        let mut m = PhaseMachine::new(&ScrollTuning {
            settle_delay_ms: 0.0,
            entry_ms: 0.0,
            ..ScrollTuning::default()
        });
        assert_eq!(m.observe(true, 5.0), SectionPhase::Active);
    }
}
