use dioxus::prelude::*;

use super::{CarouselView, TimelineItem};

#[component]
pub(super) fn TimelineTrack(
    items: Vec<TimelineItem>,
    view: Signal<CarouselView>,
    rtl: bool,
) -> Element {
    let view = view.read();
    let track_css = view.track.track_css(rtl);
    let bar_width = format!("width: {:.2}%;", view.progress * 100.0);

    rsx! {
        ol { class: "timeline__labels",
            for (index, item) in items.iter().enumerate() {
                li {
                    key: "{index}",
                    class: if index == view.active_index { "timeline__label timeline__label--active" } else { "timeline__label" },
                    "{item.label}"
                }
            }
        }
        div { class: "timeline__bar",
            div { class: "timeline__bar-fill", style: "{bar_width}" }
        }
        div { class: "timeline__viewport",
            div { class: "timeline__track", style: "{track_css}",
                for (index, item) in items.iter().enumerate() {
                    article {
                        key: "{index}",
                        class: "timeline__slide",
                        style: view.styles.get(index).map(|s| s.to_css()).unwrap_or_default(),
                        if !item.image.is_empty() {
                            img { class: "timeline__image", src: "{item.image}", alt: "{item.title}", loading: "lazy" }
                        }
                        div { class: "timeline__copy",
                            span { class: "timeline__year", "{item.label}" }
                            h3 { "{item.title}" }
                            p { "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}
