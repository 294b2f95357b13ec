use api::content::Property;
use api::locale::localized_path;
use api::Locale;
use dioxus::prelude::*;

use crate::components::scroll_carousel::{CarouselVariant, ScrollCarousel};
use crate::services::use_site_content;
use crate::t;

use super::home::project_slide;
use super::{ContentMissing, Loading};

#[component]
pub fn Projects(locale: ReadOnlySignal<Locale>) -> Element {
    let properties = use_site_content(locale, |client, locale| async move {
        client.properties(locale).await
    });

    let Some(list) = properties.read().clone() else {
        return rsx! { Loading {} };
    };
    let featured: Vec<_> = list.iter().take(5).map(project_slide).collect();
    let count = list.len();

    rsx! {
        section { class: "page page-projects",
            div { class: "hero hero--plain",
                h1 { {t!("projects-title")} }
                p { {t!("projects-intro")} }
                span { class: "page-projects__count", {t!("projects-count", count = count)} }
            }

            if featured.len() > 1 {
                ScrollCarousel {
                    id: "projects-featured",
                    variant: CarouselVariant::LayeredCards,
                    items: featured,
                    locale,
                }
            }

            div { class: "card-grid",
                for property in list {
                    ProjectCard { key: "{property.slug}", property, locale: locale() }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(property: Property, locale: Locale) -> Element {
    let href = localized_path(locale, &format!("projects/{}", property.slug));
    rsx! {
        Link { class: "card", to: href,
            if !property.image.is_empty() {
                img { class: "card__image", src: "{property.image}", alt: "{property.title}", loading: "lazy" }
            }
            div { class: "card__body",
                if !property.status.is_empty() {
                    span { class: "card__badge", "{property.status}" }
                }
                h3 { "{property.title}" }
                span { class: "card__meta", "{property.location}" }
            }
        }
    }
}

#[component]
pub fn ProjectDetail(slug: ReadOnlySignal<String>, locale: ReadOnlySignal<Locale>) -> Element {
    let property = use_site_content(locale, move |client, locale| {
        let slug = slug();
        async move { client.property(&slug, locale).await }
    });

    let back = localized_path(locale(), "projects");
    let state = property.read().clone();

    match state {
        None => rsx! { Loading {} },
        Some(None) => rsx! { ContentMissing { back, label: t!("projects-back") } },
        Some(Some(property)) => rsx! {
            article { class: "page page-project",
                Link { class: "page__back", to: back, {t!("projects-back")} }
                if !property.image.is_empty() {
                    img { class: "page-project__hero", src: "{property.image}", alt: "{property.title}" }
                }
                header { class: "page-project__header",
                    h1 { "{property.title}" }
                    div { class: "page-project__meta",
                        span { "{property.location}" }
                        if !property.status.is_empty() {
                            span { class: "card__badge", "{property.status}" }
                        }
                    }
                }
                p { class: "page-project__description", "{property.description}" }
                if !property.gallery.is_empty() {
                    div { class: "gallery",
                        for (index, image) in property.gallery.iter().enumerate() {
                            img { key: "{index}", src: "{image}", alt: "{property.title}", loading: "lazy" }
                        }
                    }
                }
            }
        },
    }
}
