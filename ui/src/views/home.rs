use api::content::{Banner, HomeContent, Property, Testimonial};
use api::locale::localized_path;
use api::Locale;
use dioxus::prelude::*;

use crate::components::scroll_carousel::{CarouselVariant, ScrollCarousel, TimelineItem};
use crate::services::use_site_content;
use crate::t;

use super::catalog_items;

const MILESTONE_IMAGES: [&str; 5] = [
    "/assets/images/milestone-1.jpg",
    "/assets/images/milestone-2.jpg",
    "/assets/images/milestone-3.jpg",
    "/assets/images/milestone-4.jpg",
    "/assets/images/milestone-5.jpg",
];

pub(crate) fn project_slide(property: &Property) -> TimelineItem {
    TimelineItem {
        label: property.location.clone(),
        title: property.title.clone(),
        description: property.description.clone(),
        image: property.image.clone(),
    }
}

#[component]
pub fn Home(locale: ReadOnlySignal<Locale>) -> Element {
    let content = use_site_content(locale, |client, locale| async move {
        client.home(locale).await
    });
    let milestones = catalog_items("home-milestone", &MILESTONE_IMAGES);

    let home = content.read().clone().unwrap_or_default();
    let HomeContent {
        banners,
        projects,
        testimonials,
    } = home;
    let project_slides: Vec<TimelineItem> = projects.iter().map(project_slide).collect();
    let projects_href = localized_path(locale(), "projects");
    let leasing_href = localized_path(locale(), "leasing");

    rsx! {
        section { class: "page page-home",
            if let Some(banner) = banners.first() {
                HeroBanner { banner: banner.clone() }
            } else {
                div { class: "hero hero--plain",
                    h1 { {t!("home-title")} }
                    p { {t!("home-tagline")} }
                }
            }

            div { class: "page-home__cta",
                Link { class: "button button--primary", to: projects_href, {t!("home-cta-projects")} }
                Link { class: "button button--ghost", to: leasing_href, {t!("home-cta-leasing")} }
            }

            ScrollCarousel {
                id: "home-milestones",
                variant: CarouselVariant::Timeline,
                items: milestones,
                locale,
                heading: t!("home-milestones-title"),
            }

            if !project_slides.is_empty() {
                ScrollCarousel {
                    id: "home-projects",
                    variant: CarouselVariant::LayeredCards,
                    items: project_slides,
                    locale,
                    heading: t!("home-projects-title"),
                }
            }

            if !testimonials.is_empty() {
                section { class: "testimonials",
                    h2 { {t!("home-testimonials-title")} }
                    div { class: "testimonials__list",
                        for (index, testimonial) in testimonials.into_iter().enumerate() {
                            TestimonialCard { key: "{index}", testimonial }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HeroBanner(banner: Banner) -> Element {
    let background = if banner.image.is_empty() {
        String::new()
    } else {
        format!("background-image: url('{}');", banner.image)
    };
    rsx! {
        div { class: "hero", style: "{background}",
            div { class: "hero__content",
                h1 { "{banner.title}" }
                if !banner.subtitle.is_empty() {
                    p { "{banner.subtitle}" }
                }
                if let Some(link) = banner.link.clone() {
                    a { class: "button button--primary", href: "{link}", {t!("home-banner-more")} }
                }
            }
        }
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> Element {
    rsx! {
        figure { class: "testimonial",
            if !testimonial.avatar.is_empty() {
                img { class: "testimonial__avatar", src: "{testimonial.avatar}", alt: "{testimonial.name}" }
            }
            blockquote { "{testimonial.quote}" }
            figcaption {
                strong { "{testimonial.name}" }
                if !testimonial.role.is_empty() {
                    span { class: "testimonial__role", "{testimonial.role}" }
                }
            }
        }
    }
}
