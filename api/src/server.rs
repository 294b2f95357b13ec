//! HTTP surface for crawlers: `/sitemap.xml`, `/robots.txt`, and the
//! redirect that sends unprefixed paths into the English tree.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::middleware::{from_fn, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;

use crate::client::ContentClient;
use crate::locale::redirect_target;
use crate::sitemap;

#[derive(Clone)]
pub struct SiteState {
    pub client: Arc<ContentClient>,
}

impl SiteState {
    pub fn new(client: ContentClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

pub fn router(state: SiteState) -> Router {
    Router::new()
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/robots.txt", get(robots_txt))
        .fallback(not_found)
        .layer(from_fn(locale_redirect))
        .with_state(state)
}

async fn sitemap_xml(State(state): State<SiteState>) -> Response {
    let site_url = state.client.config().site_url.clone();
    let xml = sitemap::generate(&state.client, &site_url).await;
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
        .into_response()
}

async fn robots_txt(State(state): State<SiteState>) -> Response {
    let sitemap_url = state
        .client
        .config()
        .site_url
        .join("sitemap.xml")
        .map(|url| url.to_string())
        .unwrap_or_else(|_| "/sitemap.xml".to_string());
    let body = format!("User-agent: *\nAllow: /\n\nSitemap: {sitemap_url}\n");
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "not found").into_response()
}

/// Redirect `/about` to `/en/about`; everything else continues down the stack.
pub async fn locale_redirect(request: Request<Body>, next: Next) -> Response {
    let uri = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    match redirect_target(&uri) {
        Some(target) => {
            tracing::debug!(from = %uri, to = %target, "locale redirect");
            let mut response = Redirect::temporary(&target).into_response();
            response
                .headers_mut()
                .insert(header::VARY, HeaderValue::from_static("Accept-Language"));
            response
        }
        None => next.run(request).await,
    }
}
