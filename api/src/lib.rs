//! Content API access for the Manzil site.
//!
//! Everything the pages need from outside the browser lives here: the thin
//! HTTP wrapper around the remote content API, the loosely-typed content
//! models, locale routing rules and sitemap generation. The optional `server`
//! feature adds the small axum service that answers `/sitemap.xml` and
//! redirects unprefixed paths to a locale.

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod locale;
pub mod sitemap;

#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod server;

pub use client::ContentClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use locale::Locale;
