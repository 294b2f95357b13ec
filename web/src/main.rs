use api::locale::{redirect_target, split_locale};
use api::Locale;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, Toasts};
use ui::core::platform::apply_document_locale;
use ui::i18n;
use ui::services::provide_site_services;
use ui::views::{
    render_error, About, BlogDetail, Blogs, Contact, Home, Leasing, NotFound, ProjectDetail,
    Projects, TeamMemberDetail,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[nest("/:lang")]
        #[layout(SiteLayout)]
            #[route("/", HomePage)]
            Home { lang: String },
            #[route("/about", AboutPage)]
            About { lang: String },
            #[route("/about/team/:slug", TeamMemberPage)]
            TeamMember { lang: String, slug: String },
            #[route("/projects", ProjectsPage)]
            Projects { lang: String },
            #[route("/projects/:slug", ProjectDetailPage)]
            ProjectDetail { lang: String, slug: String },
            #[route("/blogs", BlogsPage)]
            Blogs { lang: String },
            #[route("/blogs/:slug", BlogDetailPage)]
            BlogDetail { lang: String, slug: String },
            #[route("/contact", ContactPage)]
            Contact { lang: String },
            #[route("/leasing", LeasingPage)]
            Leasing { lang: String },
        #[end_layout]
    #[end_nest]
    #[redirect("/", || Route::Home { lang: Locale::default().code().to_string() })]
    #[route("/:..segments", NotFoundPage)]
    NotFound { segments: Vec<String> },
}

impl Route {
    fn lang(&self) -> Option<&str> {
        match self {
            Route::Home { lang }
            | Route::About { lang }
            | Route::Projects { lang }
            | Route::Blogs { lang }
            | Route::Contact { lang }
            | Route::Leasing { lang }
            | Route::ProjectDetail { lang, .. }
            | Route::BlogDetail { lang, .. }
            | Route::TeamMember { lang, .. } => Some(lang.as_str()),
            Route::NotFound { .. } => None,
        }
    }

    fn locale(&self) -> Option<Locale> {
        self.lang().and_then(Locale::parse)
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn lang_of(locale: Locale) -> String {
    locale.code().to_string()
}

fn nav_home(locale: Locale, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home { lang: lang_of(locale) },
        "{label}"
    })
}
fn nav_about(locale: Locale, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::About { lang: lang_of(locale) },
        "{label}"
    })
}
fn nav_projects(locale: Locale, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Projects { lang: lang_of(locale) },
        "{label}"
    })
}
fn nav_blogs(locale: Locale, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Blogs { lang: lang_of(locale) },
        "{label}"
    })
}
fn nav_leasing(locale: Locale, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Leasing { lang: lang_of(locale) },
        "{label}"
    })
}
fn nav_contact(locale: Locale, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Contact { lang: lang_of(locale) },
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        i18n::init();
        register_nav(NavBuilder {
            home: nav_home,
            about: nav_about,
            projects: nav_projects,
            blogs: nav_blogs,
            leasing: nav_leasing,
            contact: nav_contact,
        });
    }
    provide_site_services();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ErrorBoundary { handle_error: render_error,
            Router::<Route> {}
            Toasts {}
        }
    }
}

/// Chrome shared by every localized page. Owns the active language: it
/// follows the `/:lang` segment and bounces unknown prefixes to `/en/...`.
#[component]
fn SiteLayout(lang: String) -> Element {
    let _ = lang;
    let route = use_route::<Route>();
    let path = route.to_string();
    let locale = route.locale();
    let current_path = path.clone();

    if let Some(locale) = locale {
        i18n::set_locale(locale);
    }

    use_effect(use_reactive!(|(locale, path)| {
        match locale {
            Some(locale) => apply_document_locale(locale),
            None => {
                if let Some(target) = redirect_target(&path) {
                    tracing::debug!(%path, %target, "unknown locale prefix; redirecting");
                    navigator().replace(target);
                }
            }
        }
    }));

    let Some(locale) = locale else {
        return rsx! {};
    };

    rsx! {
        AppNavbar { locale, current_path }
        // Keyed by locale so every page re-renders its strings on a switch.
        main { key: "{locale}", class: "site-main", dir: locale.dir(),
            Outlet::<Route> {}
        }
    }
}

#[component]
fn HomePage(lang: String) -> Element {
    rsx! { Home { locale: page_locale(&lang) } }
}

#[component]
fn AboutPage(lang: String) -> Element {
    rsx! { About { locale: page_locale(&lang) } }
}

#[component]
fn TeamMemberPage(lang: String, slug: String) -> Element {
    rsx! { TeamMemberDetail { slug, locale: page_locale(&lang) } }
}

#[component]
fn ProjectsPage(lang: String) -> Element {
    rsx! { Projects { locale: page_locale(&lang) } }
}

#[component]
fn ProjectDetailPage(lang: String, slug: String) -> Element {
    rsx! { ProjectDetail { slug, locale: page_locale(&lang) } }
}

#[component]
fn BlogsPage(lang: String) -> Element {
    rsx! { Blogs { locale: page_locale(&lang) } }
}

#[component]
fn BlogDetailPage(lang: String, slug: String) -> Element {
    rsx! { BlogDetail { slug, locale: page_locale(&lang) } }
}

#[component]
fn ContactPage(lang: String) -> Element {
    rsx! { Contact { locale: page_locale(&lang) } }
}

#[component]
fn LeasingPage(lang: String) -> Element {
    rsx! { Leasing { locale: page_locale(&lang) } }
}

/// Unmatched paths: unprefixed ones are redirected to `/en/...`, the rest get the 404 page.
#[component]
fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let target = redirect_target(&path);
    let locale = split_locale(&path).0.unwrap_or_default();
    i18n::set_locale(locale);

    use_effect(use_reactive!(|(target, locale)| {
        match target {
            Some(target) => {
                navigator().replace(target);
            }
            None => apply_document_locale(locale),
        }
    }));

    rsx! {
        AppNavbar { locale, current_path: path.clone() }
        main { class: "site-main", dir: locale.dir(),
            NotFound { locale, path }
        }
    }
}

fn page_locale(lang: &str) -> Locale {
    Locale::parse(lang).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::sitemap::{DYNAMIC_SOURCES, STATIC_PATHS};
    use std::str::FromStr;

    fn resolves_to_a_page(path: &str) -> bool {
        matches!(Route::from_str(path), Ok(route) if route.lang().is_some())
    }

    #[test]
    fn every_sitemap_location_has_a_route() {
        for locale in Locale::ALL {
            for path in STATIC_PATHS {
                let url = api::locale::localized_path(locale, path);
                assert!(resolves_to_a_page(&url), "no route for {url}");
            }
            for source in DYNAMIC_SOURCES {
                let url = api::locale::localized_path(locale, &format!("{}/sample", source.route));
                assert!(resolves_to_a_page(&url), "no route for {url}");
            }
        }
    }

    #[test]
    fn unknown_pages_fall_through_to_not_found() {
        assert!(!resolves_to_a_page("/en/careers"));
    }
}
