//! Content API endpoint as a [`FormSink`].

use api::{ApiError, ContentClient, Locale};

use super::wizard::FormSink;

#[derive(Debug, Clone)]
pub struct ApiFormSink {
    client: ContentClient,
    locale: Locale,
    path: &'static str,
}

impl ApiFormSink {
    pub fn new(client: ContentClient, locale: Locale, path: &'static str) -> Self {
        Self {
            client,
            locale,
            path,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

impl FormSink for ApiFormSink {
    type Error = ApiError;

    async fn send(&self, payload: &serde_json::Value) -> Result<(), ApiError> {
        self.client.post_data(self.path, payload, self.locale).await
    }
}
