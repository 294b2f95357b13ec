//! Locale selection by URL prefix.
//!
//! Every page lives under `/en/...` or `/ar/...`. Requests without a prefix
//! are redirected to the English tree, except for files and machine endpoints
//! that must stay at the root.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    /// Short code used in URL prefixes and the API `lang` header.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Fluent language tag of the matching translation bundle.
    pub fn fluent_tag(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Ar => "ar-SA",
        }
    }

    /// Value for the document `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Ar => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Ar)
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" => Some(Locale::En),
            "ar" | "ar-sa" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// The other supported locale (used by the language toggle).
    pub fn alternate(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale `{}`", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// Split `/ar/projects/x` into `(Some(Ar), "/projects/x")`.
/// Paths without a known prefix come back untouched with `None`.
pub fn split_locale(path: &str) -> (Option<Locale>, &str) {
    let trimmed = path.trim_start_matches('/');
    let (head, tail) = match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, ""),
    };
    match Locale::parse(head) {
        Some(locale) if head.len() == 2 => (Some(locale), if tail.is_empty() { "/" } else { tail }),
        _ => (None, path),
    }
}

/// Build the localized form of a site-relative path.
pub fn localized_path(locale: Locale, path: &str) -> String {
    let rest = path.trim_start_matches('/');
    if rest.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{}", locale.code(), rest)
    }
}

/// Swap the locale prefix of `path`, keeping the rest of the route.
pub fn switch_locale(path: &str, locale: Locale) -> String {
    let (_, rest) = split_locale(path);
    localized_path(locale, rest)
}

const PASSTHROUGH_PREFIXES: &[&str] = &["/assets/", "/api/", "/_dioxus/", "/wasm/"];
const PASSTHROUGH_PATHS: &[&str] = &["/sitemap.xml", "/robots.txt", "/favicon.ico"];

/// Where an unprefixed request should be redirected, if anywhere.
///
/// `uri` may carry a query string; it is preserved on the target.
pub fn redirect_target(uri: &str) -> Option<String> {
    let (path, query) = match uri.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (uri, None),
    };
    let path = if path.is_empty() { "/" } else { path };

    if split_locale(path).0.is_some() {
        return None;
    }
    if PASSTHROUGH_PATHS.contains(&path)
        || PASSTHROUGH_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
        || looks_like_file(path)
    {
        return None;
    }

    let mut target = localized_path(Locale::default(), strip_foreign_prefix(path));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    Some(target)
}

/// Drop an unsupported language prefix (`/fr/about` -> `/about`) so the
/// redirect lands on the same page in the default locale.
fn strip_foreign_prefix(path: &str) -> &str {
    let trimmed = path.trim_start_matches('/');
    let (head, tail) = match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, ""),
    };
    if head.len() == 2 && head.chars().all(|c| c.is_ascii_alphabetic()) {
        if tail.is_empty() {
            "/"
        } else {
            tail
        }
    } else {
        path
    }
}

fn looks_like_file(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .map(|segment| segment.contains('.'))
        .unwrap_or(false)
}
