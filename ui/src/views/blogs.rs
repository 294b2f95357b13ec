use api::content::Blog;
use api::locale::localized_path;
use api::Locale;
use dioxus::prelude::*;

use crate::core::format::format_publish_date;
use crate::services::use_site_content;
use crate::t;

use super::{ContentMissing, Loading};

#[component]
pub fn Blogs(locale: ReadOnlySignal<Locale>) -> Element {
    let blogs = use_site_content(locale, |client, locale| async move {
        client.blogs(locale).await
    });

    let Some(posts) = blogs.read().clone() else {
        return rsx! { Loading {} };
    };

    rsx! {
        section { class: "page page-blogs",
            div { class: "hero hero--plain",
                h1 { {t!("blogs-title")} }
                p { {t!("blogs-intro")} }
            }
            if posts.is_empty() {
                p { class: "page__empty", {t!("blogs-empty")} }
            } else {
                div { class: "card-grid",
                    for post in posts {
                        BlogCard { key: "{post.slug}", post, locale: locale() }
                    }
                }
            }
        }
    }
}

fn publish_date(post: &Blog, locale: Locale) -> Option<String> {
    post.published_at
        .as_deref()
        .map(|raw| format_publish_date(raw, locale))
        .filter(|date| !date.is_empty())
}

#[component]
fn BlogCard(post: Blog, locale: Locale) -> Element {
    let href = localized_path(locale, &format!("blogs/{}", post.slug));
    let date = publish_date(&post, locale);
    rsx! {
        Link { class: "card card--blog", to: href,
            if !post.image.is_empty() {
                img { class: "card__image", src: "{post.image}", alt: "{post.title}", loading: "lazy" }
            }
            div { class: "card__body",
                if let Some(date) = date {
                    time { class: "card__meta", "{date}" }
                }
                h3 { "{post.title}" }
                p { "{post.excerpt}" }
                span { class: "card__more", {t!("blogs-read-more")} }
            }
        }
    }
}

#[component]
pub fn BlogDetail(slug: ReadOnlySignal<String>, locale: ReadOnlySignal<Locale>) -> Element {
    let blog = use_site_content(locale, move |client, locale| {
        let slug = slug();
        async move { client.blog(&slug, locale).await }
    });

    let back = localized_path(locale(), "blogs");
    let state = blog.read().clone();

    match state {
        None => rsx! { Loading {} },
        Some(None) => rsx! { ContentMissing { back, label: t!("blogs-back") } },
        Some(Some(post)) => {
            let date = publish_date(&post, locale());
            rsx! {
                article { class: "page page-blog",
                    Link { class: "page__back", to: back, {t!("blogs-back")} }
                    header {
                        h1 { "{post.title}" }
                        if let Some(date) = date {
                            time { class: "page-blog__date", "{date}" }
                        }
                    }
                    if !post.image.is_empty() {
                        img { class: "page-blog__hero", src: "{post.image}", alt: "{post.title}" }
                    }
                    // Body is HTML authored in the CMS.
                    div { class: "page-blog__body", dangerous_inner_html: "{post.body}" }
                }
            }
        }
    }
}
