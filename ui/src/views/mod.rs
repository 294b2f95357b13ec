mod about;
mod blogs;
mod contact;
mod home;
mod leasing;
mod not_found;
mod projects;

pub use about::{About, TeamMemberDetail};
pub use blogs::{BlogDetail, Blogs};
pub use contact::Contact;
pub use home::Home;
pub use leasing::Leasing;
pub use not_found::{render_error, NotFound};
pub use projects::{ProjectDetail, Projects};

use dioxus::prelude::*;

use crate::components::scroll_carousel::TimelineItem;
use crate::i18n::tr;
use crate::t;

/// Slides whose text lives in the translation catalog under
/// `{prefix}-{n}-label`, `-title` and `-description` (n from 1).
pub(crate) fn catalog_items(prefix: &str, images: &[&str]) -> Vec<TimelineItem> {
    images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let n = index + 1;
            TimelineItem {
                label: tr(&format!("{prefix}-{n}-label")),
                title: tr(&format!("{prefix}-{n}-title")),
                description: tr(&format!("{prefix}-{n}-description")),
                image: (*image).to_string(),
            }
        })
        .collect()
}

#[component]
fn Loading() -> Element {
    rsx! {
        div { class: "page page-loading", aria_busy: "true",
            span { class: "spinner" }
            span { class: "visually-hidden", {t!("loading")} }
        }
    }
}

#[component]
fn ContentMissing(back: String, label: String) -> Element {
    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("content-missing-title")} }
            p { {t!("content-missing-body")} }
            Link { class: "button button--ghost", to: back, "{label}" }
        }
    }
}
