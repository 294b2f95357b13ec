use api::locale::localized_path;
use api::Locale;
use dioxus::prelude::*;

use crate::t;

#[component]
pub fn NotFound(locale: ReadOnlySignal<Locale>, #[props(default)] path: String) -> Element {
    if !path.is_empty() {
        tracing::debug!(%path, "no route matched");
    }
    let home = localized_path(locale(), "");

    rsx! {
        section { class: "page page-not-found",
            span { class: "page-not-found__code", "404" }
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body")} }
            Link { class: "button button--primary", to: home, {t!("not-found-home")} }
        }
    }
}

/// Fallback for the root error boundary.
pub fn render_error(errors: ErrorContext) -> Element {
    tracing::error!(?errors, "render failed");
    rsx! {
        section { class: "page page-error",
            h1 { {t!("error-title")} }
            p { {t!("error-body")} }
            a { class: "button button--primary", href: "/", {t!("not-found-home")} }
        }
    }
}
