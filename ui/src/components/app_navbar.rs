use api::locale::switch_locale;
use api::Locale;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know the platform's `Route` enum.
///
/// Each closure receives the active locale and the localized label and must
/// return a link whose only child is that label.
///
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     home: |locale, label| rsx!( Link { class: "navbar__link", to: Route::Home { lang: locale.code().into() }, "{label}" } ),
///     // ...
/// });
/// ```
///
/// Without a builder the navbar falls back to plain path links.
pub struct NavBuilder {
    pub home: fn(locale: Locale, label: &str) -> Element,
    pub about: fn(locale: Locale, label: &str) -> Element,
    pub projects: fn(locale: Locale, label: &str) -> Element,
    pub blogs: fn(locale: Locale, label: &str) -> Element,
    pub leasing: fn(locale: Locale, label: &str) -> Element,
    pub contact: fn(locale: Locale, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Site-relative paths in menu order, used when no builder is registered.
const FALLBACK_PATHS: [&str; 6] = ["", "about", "projects", "blogs", "leasing", "contact"];

/// Header with the localized menu and the language switch.
///
/// `current_path` is the route being shown; the switch keeps it and only
/// swaps the `/en` / `/ar` prefix.
#[component]
pub fn AppNavbar(locale: ReadOnlySignal<Locale>, current_path: String) -> Element {
    i18n::init();
    let locale = locale();
    let mut menu_open = use_signal(|| false);

    let labels = [
        t!("nav-home"),
        t!("nav-about"),
        t!("nav-projects"),
        t!("nav-blogs"),
        t!("nav-leasing"),
        t!("nav-contact"),
    ];

    let links: Vec<Element> = match NAV_BUILDER.get() {
        Some(b) => {
            let builders = [b.home, b.about, b.projects, b.blogs, b.leasing, b.contact];
            builders
                .iter()
                .zip(labels.iter())
                .map(|(build, label)| build(locale, label))
                .collect()
        }
        None => FALLBACK_PATHS
            .iter()
            .zip(labels.iter())
            .map(|(path, label)| {
                let to = api::locale::localized_path(locale, path);
                rsx! {
                    Link { class: "navbar__link", to, "{label}" }
                }
            })
            .collect(),
    };

    let other = locale.alternate();
    let switch_to = switch_locale(&current_path, other);
    let switch_label = match other {
        Locale::En => t!("nav-language-en"),
        Locale::Ar => t!("nav-language-ar"),
    };
    let other_code = other.code();
    let expanded = menu_open();
    let menu_class = if expanded {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", {t!("brand-name")} }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                button {
                    class: "navbar__toggle",
                    aria_label: t!("nav-menu-toggle"),
                    aria_expanded: "{expanded}",
                    onclick: move |_| menu_open.toggle(),
                    span { class: "navbar__toggle-bar" }
                }

                nav { class: "{menu_class}", onclick: move |_| menu_open.set(false),
                    for link in links {
                        {link}
                    }
                }

                div { class: "navbar__locale",
                    span { class: "visually-hidden", {t!("nav-language-label")} }
                    Link {
                        class: "navbar__locale-link",
                        to: switch_to,
                        id: "locale-switch-{other_code}",
                        "{switch_label}"
                    }
                }
            }
        }
    }
}
