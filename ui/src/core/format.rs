//! Formatting helpers for content shown on the pages.

use api::Locale;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const AR_MONTHS: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
    "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
];

/// Parse API dates: full RFC 3339 timestamps or bare `YYYY-MM-DD`.
pub fn parse_content_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts.date());
    }
    Date::parse(raw.get(..10)?, format_description!("[year]-[month]-[day]")).ok()
}

/// `12 March 2026` / `12 مارس 2026`. Unparseable input is shown as-is.
pub fn format_publish_date(raw: &str, locale: Locale) -> String {
    let Some(date) = parse_content_date(raw) else {
        return raw.trim().to_string();
    };
    let month_index = u8::from(date.month()) as usize - 1;
    let month = match locale {
        Locale::En => date.month().to_string(),
        Locale::Ar => AR_MONTHS[month_index].to_string(),
    };
    format!("{} {} {}", date.day(), month, date.year())
}
