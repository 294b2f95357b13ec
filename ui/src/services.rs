//! Site-wide context: the content client and the toast queue.
//!
//! The platform root calls [`provide_site_services`] once; views and
//! components pull what they need through the `use_*` accessors.

use std::future::Future;

use api::{ContentClient, Locale};
use dioxus::prelude::*;

use crate::core::notify::{Notice, NoticeQueue};

#[derive(Clone)]
pub struct SiteServices {
    /// `None` when the API configuration could not be built; views then
    /// render their empty states.
    pub client: Option<ContentClient>,
}

pub fn provide_site_services() {
    use_context_provider(|| Signal::new(NoticeQueue::default()));
    use_context_provider(|| {
        let client = match ContentClient::from_env() {
            Ok(client) => {
                tracing::debug!(api_url = %client.config().api_url, "content client ready");
                Some(client)
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    "content client unavailable; pages render without remote content"
                );
                None
            }
        };
        SiteServices { client }
    });
}

pub fn use_notices() -> Signal<NoticeQueue> {
    use_context::<Signal<NoticeQueue>>()
}

pub fn use_content_client() -> Option<ContentClient> {
    try_use_context::<SiteServices>().and_then(|services| services.client)
}

pub fn push_notice(mut queue: Signal<NoticeQueue>, notice: Notice) {
    if notice.is_error() {
        tracing::warn!(key = notice.message_key, detail = ?notice.detail, "error notice raised");
    }
    queue.write().push(notice);
}

/// Fetch remote content for the current locale, refetching when it changes.
///
/// Without a client the resource resolves to `T::default()`, matching the
/// degrade-to-empty behavior of the client's own helpers.
pub fn use_site_content<T, F, Fut>(locale: ReadOnlySignal<Locale>, fetch: F) -> Resource<T>
where
    T: Default + 'static,
    F: Fn(ContentClient, Locale) -> Fut + 'static,
    Fut: Future<Output = T> + 'static,
{
    let client = use_content_client();
    use_resource(move || {
        let locale = locale();
        let pending = client.clone().map(|client| fetch(client, locale));
        async move {
            match pending {
                Some(pending) => pending.await,
                None => T::default(),
            }
        }
    })
}
