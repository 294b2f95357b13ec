//! The loader and the active-locale bookkeeping must agree after every switch.
//! Kept in its own test binary: it flips the process-wide loader to Arabic.

use api::Locale;
use i18n_embed::LanguageLoader;
use ui::i18n::{set_locale, tr, LOADER};

fn loader_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_default()
}

#[test]
fn switching_back_and_forth_keeps_loader_in_step() {
    set_locale(Locale::Ar);
    assert_eq!(loader_language(), "ar-SA");
    assert_eq!(tr("nav-home"), "الرئيسية");

    // A repeated call is a no-op and must not desynchronize anything.
    set_locale(Locale::Ar);
    assert_eq!(loader_language(), "ar-SA");

    set_locale(Locale::En);
    assert_eq!(loader_language(), "en-US");
    assert_eq!(tr("nav-home"), "Home");

    set_locale(Locale::Ar);
    assert_eq!(tr("nav-home"), "الرئيسية");
}
