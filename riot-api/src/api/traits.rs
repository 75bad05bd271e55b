use std::fmt::Debug;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;

use crate::{
    region::Platform,
    types::{Payload, RiotApiResponse},
};

/// Trait implemented by structures capable of performing raw HTTP requests to the riot API.
///
/// Endpoint families are built on top of it through default methods.
#[async_trait]
pub trait ApiRequest: Send + Sync + Debug {
    fn endpoint_url(
        &self,
        platform: Platform,
        endpoint: &str,
        segment: Option<&str>,
        params: &[(&str, &str)],
    ) -> RiotApiResponse<Url>;

    async fn request(&self, url: Url) -> RiotApiResponse<Bytes>;

    /// GET `endpoint` on `platform` and decode the JSON body.
    async fn get(
        &self,
        platform: Platform,
        endpoint: &str,
        segment: Option<&str>,
        params: &[(&str, &str)],
    ) -> RiotApiResponse<Payload> {
        let url = self.endpoint_url(platform, endpoint, segment, params)?;
        let raw = self.request(url).await?;

        Ok(serde_json::from_slice(&raw)?)
    }
}
