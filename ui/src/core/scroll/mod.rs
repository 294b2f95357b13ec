//! Scroll-synchronized carousel control.
//!
//! Pipeline per animation frame:
//!
//! ```text
//! scroll event -> FrameThrottle -> SectionGeometry
//!   -> ActivationZone::progress  (0..=1)
//!   -> IndexResolver::resolve     (hysteresis)
//!   -> SlideCommand -> Carousel::slide_to
//!   -> interpolate_item_style     (opacity / scale / blur)
//! ```
//!
//! Everything here is pure and platform-agnostic; DOM access lives in
//! `core::platform` and the components.

pub mod carousel;
pub mod controller;
pub mod phase;
pub mod progress;
pub mod resolver;
pub mod sampler;
pub mod style;
pub mod tuning;
pub mod visibility;

pub use carousel::{slide_duration, Carousel, SlideCommand, TrackCarousel};
pub use controller::{FrameUpdate, ScrollCarouselController, SectionGeometry};
pub use phase::{PhaseMachine, SectionPhase};
pub use progress::{compute_progress, ActivationZone, SectionRect};
pub use resolver::{resolve_index, HysteresisBand, IndexResolver};
pub use sampler::{FrameDecision, FrameThrottle};
pub use style::{interpolate_item_style, ItemStyle};
pub use tuning::{ScrollTuning, StyleRange};
pub use visibility::VisibleSet;
