use std::{num::NonZeroU32, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;

use crate::{region::Platform, types::RiotApiResponse};

use super::{client::ApiClient, metrics::RequestMetrics, traits::ApiRequest};

pub mod champion_mastery_v3;
pub mod champion_v3;
pub mod league_v3;
pub mod static_data_v3;
pub mod summoner_v3;

pub use champion_mastery_v3::ChampionMasteryApi;
pub use champion_v3::ChampionApi;
pub use league_v3::LeagueApi;
pub use static_data_v3::StaticDataApi;
pub use summoner_v3::SummonerApi;

/// Every LoL API family exposed by the wrapper.
pub trait LolApiFull:
    StaticDataApi + ChampionApi + SummonerApi + ChampionMasteryApi + LeagueApi
{
}

/// High level client implementing all LoL APIs.
#[derive(Debug)]
pub struct LolApiClient(ApiClient);

impl LolApiClient {
    /// Create a new API client using the provided key.
    pub fn new(api_key: String) -> Self {
        Self(ApiClient::new(api_key))
    }

    /// Create a new API client sharing an existing HTTP session.
    pub fn with_http_client(api_key: String, client: reqwest::Client) -> Self {
        Self(ApiClient::with_http_client(api_key, client))
    }

    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self(self.0.with_base_url(base_url))
    }

    pub fn with_rate_limit(self, per_second: NonZeroU32) -> Self {
        Self(self.0.with_rate_limit(per_second))
    }

    pub fn metrics(&self) -> Arc<RequestMetrics> {
        self.0.metrics()
    }
}

#[async_trait]
impl ApiRequest for LolApiClient {
    fn endpoint_url(
        &self,
        platform: Platform,
        endpoint: &str,
        segment: Option<&str>,
        params: &[(&str, &str)],
    ) -> RiotApiResponse<Url> {
        self.0.endpoint_url(platform, endpoint, segment, params)
    }

    async fn request(&self, url: Url) -> RiotApiResponse<Bytes> {
        self.0.request(url).await
    }
}

impl StaticDataApi for LolApiClient {}
impl ChampionApi for LolApiClient {}
impl SummonerApi for LolApiClient {}
impl ChampionMasteryApi for LolApiClient {}
impl LeagueApi for LolApiClient {}
impl LolApiFull for LolApiClient {}
