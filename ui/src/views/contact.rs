use api::Locale;
use dioxus::prelude::*;

use crate::components::lead_wizard::ContactForm;
use crate::services::use_site_content;
use crate::t;

#[component]
pub fn Contact(locale: ReadOnlySignal<Locale>) -> Element {
    let banner = use_site_content(locale, |client, locale| async move {
        client.contact_banner(locale).await
    });
    let banner = banner.read().clone().unwrap_or_default();
    let background = if banner.image.is_empty() {
        String::new()
    } else {
        format!("background-image: url('{}');", banner.image)
    };
    let title = if banner.title.is_empty() {
        t!("contact-title")
    } else {
        banner.title.clone()
    };

    rsx! {
        section { class: "page page-contact",
            div { class: "hero", style: "{background}",
                div { class: "hero__content",
                    h1 { "{title}" }
                    if !banner.subtitle.is_empty() {
                        p { "{banner.subtitle}" }
                    }
                }
            }
            div { class: "page-contact__layout",
                aside { class: "page-contact__details",
                    h2 { {t!("contact-details-title")} }
                    if !banner.phone.is_empty() {
                        p {
                            span { class: "page-contact__label", {t!("contact-phone")} }
                            a { href: "tel:{banner.phone}", dir: "ltr", "{banner.phone}" }
                        }
                    }
                    if !banner.email.is_empty() {
                        p {
                            span { class: "page-contact__label", {t!("contact-email")} }
                            a { href: "mailto:{banner.email}", "{banner.email}" }
                        }
                    }
                    if !banner.address.is_empty() {
                        p {
                            span { class: "page-contact__label", {t!("contact-address")} }
                            "{banner.address}"
                        }
                    }
                }
                div { class: "page-contact__form",
                    ContactForm { locale }
                }
            }
        }
    }
}
