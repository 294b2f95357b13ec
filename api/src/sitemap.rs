//! `sitemap.xml` generation.
//!
//! Static pages are listed for every locale. Blog posts, projects and team
//! members are added from the content API; a source that fails to load is
//! skipped with a warning so the sitemap always renders.

use std::fmt::Write as _;

use url::Url;

use crate::client::{ContentClient, SlugRecord, BLOGS_PATH, PROPERTIES_PATH, TEAM_MEMBERS_PATH};
use crate::locale::{localized_path, Locale};

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Site-relative pages that exist in every locale.
pub const STATIC_PATHS: &[&str] = &["", "about", "projects", "blogs", "contact", "leasing"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<String>,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

/// A dynamic content source and the route prefix its slugs live under.
#[derive(Debug, Clone, Copy)]
pub struct DynamicSource {
    pub api_path: &'static str,
    pub route: &'static str,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

pub const DYNAMIC_SOURCES: &[DynamicSource] = &[
    DynamicSource {
        api_path: BLOGS_PATH,
        route: "blogs",
        changefreq: ChangeFreq::Weekly,
        priority: 0.7,
    },
    DynamicSource {
        api_path: PROPERTIES_PATH,
        route: "projects",
        changefreq: ChangeFreq::Weekly,
        priority: 0.8,
    },
    DynamicSource {
        api_path: TEAM_MEMBERS_PATH,
        route: "about/team",
        changefreq: ChangeFreq::Monthly,
        priority: 0.5,
    },
];

fn absolute(site_url: &Url, path: &str) -> String {
    let relative = path.trim_start_matches('/');
    site_url
        .join(relative)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| format!("{}{}", site_url, relative))
}

pub fn static_entries(site_url: &Url) -> Vec<SitemapEntry> {
    let mut entries = Vec::with_capacity(STATIC_PATHS.len() * Locale::ALL.len());
    for path in STATIC_PATHS {
        for locale in Locale::ALL {
            entries.push(SitemapEntry {
                loc: absolute(site_url, &localized_path(locale, path)),
                lastmod: None,
                changefreq: if path.is_empty() {
                    ChangeFreq::Daily
                } else {
                    ChangeFreq::Weekly
                },
                priority: if path.is_empty() { 1.0 } else { 0.8 },
            });
        }
    }
    entries
}

pub fn dynamic_entries(
    site_url: &Url,
    source: &DynamicSource,
    records: &[SlugRecord],
) -> Vec<SitemapEntry> {
    records
        .iter()
        .filter(|record| !record.slug.trim().is_empty())
        .flat_map(|record| {
            Locale::ALL.into_iter().map(move |locale| SitemapEntry {
                loc: absolute(
                    site_url,
                    &localized_path(locale, &format!("{}/{}", source.route, record.slug.trim())),
                ),
                lastmod: record.updated_at.clone(),
                changefreq: source.changefreq,
                priority: source.priority,
            })
        })
        .collect()
}

pub fn render_urlset(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(128 + entries.len() * 160);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(xml, "<urlset xmlns=\"{SITEMAP_NS}\">");
    for entry in entries {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&entry.loc));
        if let Some(lastmod) = &entry.lastmod {
            let _ = writeln!(xml, "    <lastmod>{}</lastmod>", escape_xml(lastmod));
        }
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", entry.changefreq.as_str());
        let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Collect every entry, fetching dynamic sources concurrently.
pub async fn collect_entries(client: &ContentClient, site_url: &Url) -> Vec<SitemapEntry> {
    let mut entries = static_entries(site_url);

    let fetches = DYNAMIC_SOURCES
        .iter()
        .map(|source| async move { (source, client.slugs(source.api_path).await) });
    for (source, outcome) in futures::future::join_all(fetches).await {
        match outcome {
            Ok(records) => entries.extend(dynamic_entries(site_url, source, &records)),
            Err(err) => {
                tracing::warn!(
                    source = source.api_path,
                    error = %err,
                    "sitemap source unavailable; listing static pages only"
                );
            }
        }
    }
    entries
}

pub async fn generate(client: &ContentClient, site_url: &Url) -> String {
    let entries = collect_entries(client, site_url).await;
    tracing::info!(urls = entries.len(), "sitemap generated");
    render_urlset(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Url {
        Url::parse("https://www.manzil.example/").unwrap()
    }

    #[test]
    fn static_entries_cover_every_locale() {
        let entries = static_entries(&site());
        assert_eq!(entries.len(), STATIC_PATHS.len() * 2);
        assert!(entries.iter().any(|e| e.loc == "https://www.manzil.example/en"));
        assert!(entries.iter().any(|e| e.loc == "https://www.manzil.example/ar/leasing"));
    }

    #[test]
    fn blank_slugs_are_skipped() {
        let records = vec![
            SlugRecord {
                slug: "launch-day".into(),
                updated_at: Some("2026-03-01".into()),
            },
            SlugRecord {
                slug: "   ".into(),
                updated_at: None,
            },
        ];
        let entries = dynamic_entries(&site(), &DYNAMIC_SOURCES[0], &records);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].loc, "https://www.manzil.example/en/blogs/launch-day");
        assert_eq!(entries[1].lastmod.as_deref(), Some("2026-03-01"));
    }

    #[test]
    fn locations_are_escaped() {
        let xml = render_urlset(&[SitemapEntry {
            loc: "https://x.test/en/blogs/a&b".into(),
            lastmod: None,
            changefreq: ChangeFreq::Weekly,
            priority: 0.7,
        }]);
        assert!(xml.contains("<loc>https://x.test/en/blogs/a&amp;b</loc>"));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert!(xml.starts_with("<?xml"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
