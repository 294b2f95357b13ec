//! Scroll-pinned sections whose slides follow the page scroll.
//!
//! One hook ([`use_scroll_carousel`]) drives every variant; the variants only
//! differ in markup and tuning.

mod hook;
mod journey;
mod layered_cards;
mod timeline;

pub use hook::{use_scroll_carousel, CarouselView};

use api::Locale;
use dioxus::prelude::*;

use crate::core::scroll::ScrollTuning;

/// One slide: a year or step label, text and an image.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineItem {
    pub label: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselVariant {
    Timeline,
    Journey,
    LayeredCards,
}

impl CarouselVariant {
    pub fn tuning(self) -> ScrollTuning {
        match self {
            CarouselVariant::Timeline => ScrollTuning::default(),
            CarouselVariant::Journey => ScrollTuning::journey(),
            CarouselVariant::LayeredCards => ScrollTuning::layered_cards(),
        }
    }

    fn modifier(self) -> &'static str {
        match self {
            CarouselVariant::Timeline => "timeline",
            CarouselVariant::Journey => "journey",
            CarouselVariant::LayeredCards => "cards",
        }
    }
}

/// Height of the pinned section: one viewport per slide plus one to scroll out.
fn section_height_css(item_count: usize) -> String {
    format!("height: {}vh;", (item_count.max(1) + 1) * 100)
}

#[component]
pub fn ScrollCarousel(
    id: String,
    variant: CarouselVariant,
    items: Vec<TimelineItem>,
    locale: ReadOnlySignal<Locale>,
    #[props(default)] heading: Option<String>,
) -> Element {
    let view = use_scroll_carousel(id.clone(), items.len(), variant.tuning());
    let phase_class = view.read().phase.css_class();
    let modifier = variant.modifier();
    let height = section_height_css(items.len());
    let rtl = locale().is_rtl();

    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        section {
            id: "{id}",
            class: "scroll-section scroll-section--{modifier} {phase_class}",
            style: "{height}",
            div { class: "scroll-section__sticky",
                if let Some(heading) = heading {
                    h2 { class: "scroll-section__heading", "{heading}" }
                }
                match variant {
                    CarouselVariant::Timeline => rsx! {
                        timeline::TimelineTrack { items: items.clone(), view, rtl }
                    },
                    CarouselVariant::Journey => rsx! {
                        journey::JourneyTrack { items: items.clone(), view, rtl }
                    },
                    CarouselVariant::LayeredCards => rsx! {
                        layered_cards::LayeredCards { section_id: id.clone(), items: items.clone(), view }
                    },
                }
            }
        }
    }
}
