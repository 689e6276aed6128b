// src/integrations/gplinks/client.rs
//
// GPLinks URL shortener client. Best-effort by contract: any API error,
// timeout, or unexpected payload falls back to the original URL.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::integrations::gplinks::LinkShortener;

const GPLINKS_API_URL: &str = "https://api.gplinks.com/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct GpLinksShortener {
    http: Client,
    api_token: String,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct GpLinksResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default, rename = "shortenedUrl")]
    shortened_url: Option<String>,
}

impl GpLinksShortener {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self::with_api_url(api_token, GPLINKS_API_URL)
    }

    pub fn with_api_url(api_token: impl Into<String>, api_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            api_token: api_token.into(),
            api_url: api_url.into(),
        }
    }

    async fn try_shorten(&self, url: &str) -> Option<String> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[("api", self.api_token.as_str()), ("url", url)])
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            log::warn!("GPLinks returned {} for {}", response.status(), url);
            return None;
        }

        let body: GpLinksResponse = response.json().await.ok()?;
        if body.status.as_deref() == Some("success") {
            body.shortened_url
        } else {
            log::warn!("GPLinks rejected {}: status {:?}", url, body.status);
            None
        }
    }
}

#[async_trait]
impl LinkShortener for GpLinksShortener {
    async fn shorten(&self, url: &str) -> String {
        match self.try_shorten(url).await {
            Some(short) => short,
            None => url.to_string(),
        }
    }
}
