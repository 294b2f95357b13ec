//! Content shapes returned by the remote API.
//!
//! The API is consumed loosely: every field defaults when absent, unknown
//! fields are ignored, and list payloads may come wrapped in a `data`
//! envelope or bare. Shape drift degrades to empty sections, never to an error.

use serde::{Deserialize, Deserializer, Serialize};

/// Either `{ "data": T }` or a bare `T`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Envelope<T>(pub T);

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<'de, T> Deserialize<'de> for Envelope<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let inner = match value {
            serde_json::Value::Object(mut map) if map.contains_key("data") => {
                map.remove("data").unwrap_or_default()
            }
            other => other,
        };
        if inner.is_null() {
            return Ok(Envelope(T::default()));
        }
        T::deserialize(inner)
            .map(Envelope)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Banner {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub status: String,
    pub image: String,
    pub gallery: Vec<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blog {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub image: String,
    pub published_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub slug: String,
    pub name: String,
    pub role: String,
    pub image: String,
    pub bio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeContent {
    pub banners: Vec<Banner>,
    pub projects: Vec<Property>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactBanner {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl HomeContent {
    pub fn is_empty(&self) -> bool {
        self.banners.is_empty() && self.projects.is_empty() && self.testimonials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_accepts_wrapped_and_bare_lists() {
        let wrapped: Envelope<Vec<Blog>> =
            serde_json::from_value(json!({ "data": [{ "slug": "a" }] })).unwrap();
        let bare: Envelope<Vec<Blog>> = serde_json::from_value(json!([{ "slug": "a" }])).unwrap();
        assert_eq!(wrapped, bare);
        assert_eq!(wrapped.into_inner()[0].slug, "a");
    }

    #[test]
    fn null_data_becomes_default() {
        let empty: Envelope<HomeContent> = serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(empty.into_inner().is_empty());
    }

    #[test]
    fn missing_and_unknown_fields_are_tolerated() {
        let property: Property = serde_json::from_value(json!({
            "slug": "marina-tower",
            "title": "Marina Tower",
            "floors": 42
        }))
        .unwrap();
        assert_eq!(property.slug, "marina-tower");
        assert!(property.gallery.is_empty());
        assert_eq!(property.updated_at, None);
    }
}
