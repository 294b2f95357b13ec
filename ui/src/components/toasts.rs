use dioxus::prelude::*;

use crate::core::notify::{Notice, NoticeQueue};
use crate::core::platform::sleep_ms;
use crate::i18n::tr;
use crate::services::use_notices;
use crate::t;

/// Stack of active notices, newest last.
#[component]
pub fn Toasts() -> Element {
    let notices = use_notices();
    let items = notices.read().items().to_vec();

    rsx! {
        div { class: "toasts", role: "status", aria_live: "polite",
            for notice in items {
                Toast { key: "{notice.id}", notice }
            }
        }
    }
}

#[component]
fn Toast(notice: Notice) -> Element {
    let mut notices = use_notices();
    let id = notice.id;
    let kind_class = notice.kind.css_class();

    // Task is owned by this scope, so it is cancelled if the toast is dismissed first.
    use_hook(move || {
        spawn(async move {
            sleep_ms(NoticeQueue::DISPLAY_MS).await;
            notices.write().dismiss(id);
        })
    });

    rsx! {
        div { class: "toast {kind_class}",
            div { class: "toast__body",
                strong { {tr(notice.message_key)} }
                if let Some(detail) = notice.detail.as_ref() {
                    p { class: "toast__detail", "{detail}" }
                }
            }
            button {
                class: "toast__close",
                aria_label: t!("toast-dismiss"),
                onclick: move |_| {
                    notices.write().dismiss(id);
                },
                "×"
            }
        }
    }
}
