use api::content::TeamMember;
use api::locale::localized_path;
use api::Locale;
use dioxus::prelude::*;

use crate::components::scroll_carousel::{CarouselVariant, ScrollCarousel};
use crate::services::use_site_content;
use crate::t;

use super::{catalog_items, ContentMissing, Loading};

const JOURNEY_IMAGES: [&str; 4] = [
    "/assets/images/journey-1.jpg",
    "/assets/images/journey-2.jpg",
    "/assets/images/journey-3.jpg",
    "/assets/images/journey-4.jpg",
];

#[component]
pub fn About(locale: ReadOnlySignal<Locale>) -> Element {
    let team = use_site_content(locale, |client, locale| async move {
        client.team_members(locale).await
    });
    let journey = catalog_items("about-journey", &JOURNEY_IMAGES);
    let members = team.read().clone().unwrap_or_default();

    rsx! {
        section { class: "page page-about",
            div { class: "hero hero--plain",
                h1 { {t!("about-title")} }
                p { {t!("about-intro")} }
            }

            div { class: "about__values",
                article {
                    h3 { {t!("about-vision-title")} }
                    p { {t!("about-vision-body")} }
                }
                article {
                    h3 { {t!("about-mission-title")} }
                    p { {t!("about-mission-body")} }
                }
            }

            ScrollCarousel {
                id: "about-journey",
                variant: CarouselVariant::Journey,
                items: journey,
                locale,
                heading: t!("about-journey-title"),
            }

            if !members.is_empty() {
                section { id: "team", class: "team",
                    h2 { {t!("about-team-title")} }
                    div { class: "team__grid",
                        for member in members {
                            TeamCard { key: "{member.slug}", member, locale: locale() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TeamCard(member: TeamMember, locale: Locale) -> Element {
    let href = localized_path(locale, &format!("about/team/{}", member.slug));
    rsx! {
        Link { class: "team__member", to: href,
            if !member.image.is_empty() {
                img { src: "{member.image}", alt: "{member.name}", loading: "lazy" }
            }
            h3 { "{member.name}" }
            span { class: "team__role", "{member.role}" }
        }
    }
}

#[component]
pub fn TeamMemberDetail(slug: ReadOnlySignal<String>, locale: ReadOnlySignal<Locale>) -> Element {
    let member = use_site_content(locale, move |client, locale| {
        let slug = slug();
        async move { client.team_member(&slug, locale).await }
    });

    let back = format!("{}#team", localized_path(locale(), "about"));
    let state = member.read().clone();

    match state {
        None => rsx! { Loading {} },
        Some(None) => rsx! { ContentMissing { back, label: t!("about-team-back") } },
        Some(Some(member)) => rsx! {
            article { class: "page page-team-member",
                Link { class: "page__back", to: back, {t!("about-team-back")} }
                if !member.image.is_empty() {
                    img { class: "page-team-member__portrait", src: "{member.image}", alt: "{member.name}" }
                }
                h1 { "{member.name}" }
                span { class: "team__role", "{member.role}" }
                if !member.bio.is_empty() {
                    p { class: "page-team-member__bio", "{member.bio}" }
                }
            }
        },
    }
}
