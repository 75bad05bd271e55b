use async_trait::async_trait;

use crate::{
    api::traits::ApiRequest,
    region::Platform,
    types::{Payload, RiotApiResponse},
};

/// Riot Champion-V3 API.
#[async_trait]
pub trait ChampionApi: ApiRequest {
    /// Status of every champion on the platform (free-to-play rotation, ranked availability...).
    async fn get_champions(&self, platform: Platform) -> RiotApiResponse<Payload> {
        tracing::trace!("[CHAMPION-V3 API] get_champions in {:?}", platform);

        self.get(platform, "platform/v3/champions", None, &[]).await
    }
}
