//! Endpoint configuration for the content API and the public site.
//!
//! Values are read from the environment at runtime, then from the same
//! variables captured at build time (the only option inside the browser),
//! and finally fall back to the production defaults.

use std::time::Duration;

use url::Url;

use crate::error::{ApiError, Result};

pub const DEFAULT_API_URL: &str = "https://api.manzil.example/api/";
pub const DEFAULT_SITE_URL: &str = "https://www.manzil.example/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const API_URL_VAR: &str = "MANZIL_API_URL";
const SITE_URL_VAR: &str = "MANZIL_SITE_URL";
const TIMEOUT_VAR: &str = "MANZIL_API_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base of the content API. Always ends with `/` so endpoint paths join under it.
    pub api_url: Url,
    /// Public origin used for absolute links in the sitemap.
    pub site_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(api_url: &str, site_url: &str) -> Result<Self> {
        Ok(Self {
            api_url: parse_base(api_url)?,
            site_url: parse_base(site_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn from_env() -> Result<Self> {
        let api_url = lookup(API_URL_VAR, option_env!("MANZIL_API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let site_url = lookup(SITE_URL_VAR, option_env!("MANZIL_SITE_URL"))
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());

        let mut config = Self::new(&api_url, &site_url)?;
        if let Some(raw) = lookup(TIMEOUT_VAR, option_env!("MANZIL_API_TIMEOUT_SECS")) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ApiError::Config {
                message: format!("{TIMEOUT_VAR} must be a whole number of seconds, got `{raw}`"),
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve an endpoint path (`"blogs"`, `"/properties"`) against the API base.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.api_url.join(path.trim_start_matches('/'))?)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API url is valid"),
            site_url: Url::parse(DEFAULT_SITE_URL).expect("default site url is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn lookup(var: &str, baked: Option<&'static str>) -> Option<String> {
    std::env::var(var)
        .ok()
        .or_else(|| baked.map(str::to_string))
        .filter(|value| !value.trim().is_empty())
}

fn parse_base(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Config {
            message: "base URL must not be empty".into(),
        });
    }
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Ok(Url::parse(&with_slash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_urls_gain_trailing_slash() {
        let config = ApiConfig::new("https://cms.test/api", "https://site.test").unwrap();
        assert_eq!(config.api_url.as_str(), "https://cms.test/api/");
        assert_eq!(config.site_url.as_str(), "https://site.test/");
    }

    #[test]
    fn endpoints_join_under_the_base_path() {
        let config = ApiConfig::new("https://cms.test/api/", "https://site.test/").unwrap();
        assert_eq!(
            config.endpoint("/blogs").unwrap().as_str(),
            "https://cms.test/api/blogs"
        );
        assert_eq!(
            config.endpoint("contact-us-banner").unwrap().as_str(),
            "https://cms.test/api/contact-us-banner"
        );
    }

    #[test]
    fn empty_base_is_rejected() {
        assert!(matches!(
            ApiConfig::new("  ", "https://site.test/"),
            Err(ApiError::Config { .. })
        ));
    }
}
