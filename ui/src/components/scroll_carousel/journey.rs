use dioxus::prelude::*;

use super::{CarouselView, TimelineItem};

/// Path with one stop per item; stops behind the active one are marked passed.
#[component]
pub(super) fn JourneyTrack(
    items: Vec<TimelineItem>,
    view: Signal<CarouselView>,
    rtl: bool,
) -> Element {
    let view = view.read();
    let track_css = view.track.track_css(rtl);
    let path_fill = format!("--journey-progress: {:.4};", view.progress);

    rsx! {
        div { class: "journey__path", style: "{path_fill}",
            for index in 0..items.len() {
                span {
                    key: "{index}",
                    class: stop_class(index, view.active_index),
                }
            }
        }
        div { class: "journey__viewport",
            div { class: "journey__track", style: "{track_css}",
                for (index, item) in items.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "journey__slide",
                        style: view.styles.get(index).map(|s| s.to_css()).unwrap_or_default(),
                        div { class: "journey__media",
                            if !item.image.is_empty() {
                                img { src: "{item.image}", alt: "{item.title}", loading: "lazy" }
                            }
                        }
                        div { class: "journey__copy",
                            span { class: "journey__step", "{item.label}" }
                            h3 { "{item.title}" }
                            p { "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}

fn stop_class(index: usize, active: usize) -> &'static str {
    match index.cmp(&active) {
        std::cmp::Ordering::Less => "journey__stop journey__stop--passed",
        std::cmp::Ordering::Equal => "journey__stop journey__stop--active",
        std::cmp::Ordering::Greater => "journey__stop",
    }
}
