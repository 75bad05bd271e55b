use std::{borrow::Cow, num::NonZeroU32, sync::Arc};

use bytes::Bytes;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use reqwest::{StatusCode, Url};

use crate::{
    region::Platform,
    types::{RiotApiError, RiotApiResponse},
};

use super::metrics::RequestMetrics;

type DirectLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Low level Riot API client: builds endpoint URLs and performs GET requests.
#[derive(Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    limiter: Option<DirectLimiter>,
    /// Riot API Key
    key: String,
    /// Replaces `https://{platform}.api.riotgames.com` when set.
    base_url: Option<String>,
    metrics: Arc<RequestMetrics>,
}

impl ApiClient {
    /// Path shared by every League of Legends endpoint.
    const LOL_ROUTE: &'static str = "lol";

    pub fn new(api_key: String) -> Self {
        Self::with_http_client(api_key, reqwest::Client::new())
    }

    /// Build a client on top of an existing HTTP session.
    pub fn with_http_client(api_key: String, client: reqwest::Client) -> Self {
        Self {
            client,
            limiter: None,
            key: api_key,
            base_url: None,
            metrics: RequestMetrics::new(),
        }
    }

    /// Send every request to `base_url` instead of the platform host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    /// Wait for a free slot before each request so that at most `per_second`
    /// requests are issued every second.
    pub fn with_rate_limit(mut self, per_second: NonZeroU32) -> Self {
        self.limiter = Some(RateLimiter::direct(Quota::per_second(per_second)));
        self
    }

    pub fn metrics(&self) -> Arc<RequestMetrics> {
        self.metrics.clone()
    }

    fn base_url(&self, platform: Platform) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => format!("https://{}", platform.host()),
        }
    }

    /// Full URL of `endpoint`, with `segment` percent-encoded and appended to it.
    ///
    /// Static `params` come first in the query string, followed by the API key.
    pub fn endpoint_url(
        &self,
        platform: Platform,
        endpoint: &str,
        segment: Option<&str>,
        params: &[(&str, &str)],
    ) -> RiotApiResponse<Url> {
        let mut raw = format!(
            "{}/{}/{}",
            self.base_url(platform),
            Self::LOL_ROUTE,
            endpoint.trim_matches('/'),
        );
        if let Some(segment) = segment {
            // URL parsing resolves `.`/`..` even when percent-encoded, so they are never sent.
            if matches!(segment, "" | "." | "..") {
                return Err(RiotApiError::InvalidSegment(segment.to_string()));
            }
            raw.push('/');
            raw.push_str(&urlencoding::encode(segment));
        }

        let mut url = Url::parse(&raw).map_err(|_| RiotApiError::InvalidUrl(raw))?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("api_key", &self.key);

        Ok(url)
    }

    /// Perform one GET request and return the raw body of a `200 OK` response.
    pub async fn request(&self, url: Url) -> RiotApiResponse<Bytes> {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
        let n = self.metrics.inc();
        tracing::trace!("[RIOT::CLIENT] #{} GET {}", n, redact_key(&url));

        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(RiotApiError::Reqwest)?;
        match res.status() {
            StatusCode::OK => res.bytes().await.map_err(RiotApiError::Reqwest),
            status => {
                tracing::debug!("[RIOT::CLIENT] request failed with {}", status);
                Err(RiotApiError::Status(status))
            }
        }
    }
}

/// Copy of `url` safe to log: the API key is masked.
fn redact_key(url: &Url) -> Url {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" { Cow::Borrowed("***") } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}
