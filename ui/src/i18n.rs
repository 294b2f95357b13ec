//! Internationalization (i18n) support for `manzil-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/manzil-ui.ftl   (fallback/reference)
//!   ar-SA/manzil-ui.ftl
//! ```
//!
//! The active language follows the URL prefix, not the browser: the site
//! layout calls [`set_locale`] whenever the route's `/en` or `/ar` changes.
//! Static keys go through `t!`; keys built at runtime (form field labels,
//! select options) go through [`tr`].
use std::sync::atomic::{AtomicU8, Ordering};

use api::Locale;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("projects-count", count = 3)
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "manzil-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = Locale::En
        .fluent_tag()
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Arabic strings must not pick up bidi isolation marks around arguments
    // inside already right-to-left text.
    loader.set_use_isolating(false);
    loader
});

const UNSET: u8 = u8::MAX;
static ACTIVE: AtomicU8 = AtomicU8::new(UNSET);

fn locale_slot(locale: Locale) -> u8 {
    match locale {
        Locale::En => 0,
        Locale::Ar => 1,
    }
}

/// Load the fallback bundle (idempotent).
pub fn init() {
    if ACTIVE.load(Ordering::Acquire) == UNSET {
        set_locale(Locale::default());
    }
}

/// Switch the active bundle. Cheap when `locale` is already active.
///
/// The active slot only moves once the loader has actually switched, so a
/// failed selection is retried on the next call.
pub fn set_locale(locale: Locale) {
    let slot = locale_slot(locale);
    if ACTIVE.load(Ordering::Acquire) == slot {
        return;
    }
    let Ok(lang) = locale.fluent_tag().parse::<LanguageIdentifier>() else {
        return;
    };
    match i18n_embed::select(&*LOADER, &Localizations, &[lang]) {
        Ok(_) => ACTIVE.store(slot, Ordering::Release),
        Err(err) => {
            tracing::warn!(
                locale = %locale,
                error = %err,
                "failed selecting language; continuing with fallback"
            );
        }
    }
}

/// Runtime-keyed lookup. Missing keys come back as the key itself, which
/// keeps a half-translated page readable.
pub fn tr(key: &str) -> String {
    init();
    if LOADER.has(key) {
        LOADER.get(key)
    } else {
        key.to_string()
    }
}

/// Translation key for a form field label: `company_name` -> `field-company-name`.
pub fn field_label_key(field: &str) -> String {
    format!("field-{}", field.replace('_', "-"))
}

/// Translation key for a select option:
/// (`category`, `food-and-beverage`) -> `option-category-food-and-beverage`.
pub fn option_label_key(field: &str, option: &str) -> String {
    format!("option-{}-{}", field.replace('_', "-"), option)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "ar-SA"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "nav-home");
        assert_eq!(s, "Home");
    }

    #[test]
    fn runtime_keys_are_derived_from_field_names() {
        assert_eq!(field_label_key("company_email"), "field-company-email");
        assert_eq!(
            option_label_key("target_market", "youth"),
            "option-target-market-youth"
        );
    }

    #[test]
    fn unknown_runtime_key_falls_back_to_itself() {
        assert_eq!(tr("no-such-message"), "no-such-message");
    }
}
