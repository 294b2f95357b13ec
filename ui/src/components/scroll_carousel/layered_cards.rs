use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::{CarouselView, TimelineItem};
use crate::core::platform::{Platform, VisibilityObserver};
use crate::core::scroll::VisibleSet;

/// Project cards stacked on top of each other; each card scales and fades in
/// over its own slice of the section.
///
/// Cards report visibility through their own intersection observer and only
/// visible cards get the interpolated style. Where observers are unavailable
/// every card is styled.
#[component]
pub(super) fn LayeredCards(
    section_id: String,
    items: Vec<TimelineItem>,
    view: Signal<CarouselView>,
) -> Element {
    let visible = use_signal(VisibleSet::default);
    let observing = Platform::current() == Platform::Web;
    let active = view.read().active_index;

    rsx! {
        div { class: "cards__stack",
            for (index, item) in items.iter().enumerate() {
                LayeredCard {
                    key: "{index}",
                    card_id: format!("{section_id}-card-{index}"),
                    index,
                    item: item.clone(),
                    view,
                    visible,
                    observing,
                    active: index == active,
                }
            }
        }
    }
}

#[component]
fn LayeredCard(
    card_id: String,
    index: usize,
    item: TimelineItem,
    view: Signal<CarouselView>,
    visible: Signal<VisibleSet>,
    observing: bool,
    active: bool,
) -> Element {
    let observer = use_hook(|| Rc::new(RefCell::new(None::<VisibilityObserver>)));

    {
        let observer = observer.clone();
        let card_id = card_id.clone();
        use_effect(move || {
            if observer.borrow().is_some() {
                return;
            }
            let mut visible = visible;
            *observer.borrow_mut() = VisibilityObserver::new(&card_id, move |is_visible| {
                if visible.peek().contains(index) != is_visible {
                    visible.write().set(index, is_visible);
                }
            });
        });
    }

    use_drop(move || {
        observer.borrow_mut().take();
    });

    let styled = !observing || visible.read().contains(index);
    let style = if styled {
        view.read()
            .styles
            .get(index)
            .map(|s| s.to_css())
            .unwrap_or_default()
    } else {
        String::new()
    };
    let depth = format!("z-index: {};", index + 1);

    rsx! {
        article {
            id: "{card_id}",
            class: if active { "cards__card cards__card--active" } else { "cards__card" },
            style: "{depth} {style}",
            if !item.image.is_empty() {
                img { class: "cards__image", src: "{item.image}", alt: "{item.title}", loading: "lazy" }
            }
            div { class: "cards__body",
                span { class: "cards__tag", "{item.label}" }
                h3 { "{item.title}" }
                p { "{item.description}" }
            }
        }
    }
}
