//! Thin JSON wrapper around the content API.
//!
//! Every request carries a `lang` header so the API answers in the visitor's
//! locale. Reads used for rendering go through [`ContentClient::get_or_default`]:
//! a failed fetch is logged and the page renders without that section.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::content::{Blog, ContactBanner, Envelope, HomeContent, Property, TeamMember};
use crate::error::{ApiError, Result};
use crate::locale::Locale;

pub const LANG_HEADER: &str = "lang";

pub const HOME_PATH: &str = "home";
pub const BLOGS_PATH: &str = "blogs";
pub const PROPERTIES_PATH: &str = "properties";
pub const TEAM_MEMBERS_PATH: &str = "team-members";
pub const CONTACT_BANNER_PATH: &str = "contact-us-banner";
pub const LEASING_FORM_PATH: &str = "leasing-application-forms";
pub const CONTACT_FORM_PATH: &str = "contact-us-forms";

#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ContentClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET {api}/{path}?{params}` decoded as `T`.
    pub async fn get_data<T>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        locale: Locale,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path)?;
        tracing::debug!(%url, lang = locale.code(), "content GET");

        let response = self
            .http
            .get(url)
            .query(params)
            .header(LANG_HEADER, locale.code())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// `POST {api}/{path}` with a JSON body. Only success or failure matters.
    pub async fn post_data<B>(&self, path: &str, body: &B, locale: Locale) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint(path)?;
        tracing::debug!(%url, lang = locale.code(), "content POST");

        let response = self
            .http
            .post(url)
            .header(LANG_HEADER, locale.code())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            })
        }
    }

    /// Fetch for rendering: on any failure log and fall back to `T::default()`.
    pub async fn get_or_default<T>(&self, path: &str, params: &[(&str, &str)], locale: Locale) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.get_data::<Envelope<T>>(path, params, locale).await {
            Ok(envelope) => envelope.into_inner(),
            Err(err) if err.is_transient() => {
                tracing::warn!(
                    path,
                    lang = locale.code(),
                    error = %err,
                    "content fetch failed; rendering defaults"
                );
                T::default()
            }
            Err(err) => {
                tracing::error!(
                    path,
                    lang = locale.code(),
                    error = %err,
                    "content rejected; rendering defaults"
                );
                T::default()
            }
        }
    }

    pub async fn home(&self, locale: Locale) -> HomeContent {
        self.get_or_default(HOME_PATH, &[], locale).await
    }

    pub async fn blogs(&self, locale: Locale) -> Vec<Blog> {
        self.get_or_default(BLOGS_PATH, &[], locale).await
    }

    pub async fn blog(&self, slug: &str, locale: Locale) -> Option<Blog> {
        let path = format!("{BLOGS_PATH}/{slug}");
        let blog: Blog = self.get_or_default(&path, &[], locale).await;
        (!blog.slug.is_empty() || !blog.title.is_empty()).then_some(blog)
    }

    pub async fn properties(&self, locale: Locale) -> Vec<Property> {
        self.get_or_default(PROPERTIES_PATH, &[], locale).await
    }

    pub async fn property(&self, slug: &str, locale: Locale) -> Option<Property> {
        let path = format!("{PROPERTIES_PATH}/{slug}");
        let property: Property = self.get_or_default(&path, &[], locale).await;
        (!property.slug.is_empty() || !property.title.is_empty()).then_some(property)
    }

    pub async fn team_members(&self, locale: Locale) -> Vec<TeamMember> {
        self.get_or_default(TEAM_MEMBERS_PATH, &[], locale).await
    }

    pub async fn team_member(&self, slug: &str, locale: Locale) -> Option<TeamMember> {
        let path = format!("{TEAM_MEMBERS_PATH}/{slug}");
        let member: TeamMember = self.get_or_default(&path, &[], locale).await;
        (!member.slug.is_empty() || !member.name.is_empty()).then_some(member)
    }

    pub async fn contact_banner(&self, locale: Locale) -> ContactBanner {
        self.get_or_default(CONTACT_BANNER_PATH, &[], locale).await
    }

    /// Strict list fetch used by the sitemap, which needs to know about failures.
    pub async fn slugs(&self, path: &str) -> Result<Vec<SlugRecord>> {
        let envelope: Envelope<Vec<SlugRecord>> = self.get_data(path, &[], Locale::En).await?;
        Ok(envelope.into_inner())
    }

    pub async fn submit_leasing_form<B>(&self, payload: &B, locale: Locale) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.post_data(LEASING_FORM_PATH, payload, locale).await
    }

    pub async fn submit_contact_form<B>(&self, payload: &B, locale: Locale) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.post_data(CONTACT_FORM_PATH, payload, locale).await
    }
}

/// Minimal projection of any listed resource: its slug and last change.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct SlugRecord {
    pub slug: String,
    pub updated_at: Option<String>,
}
