use async_trait::async_trait;

use crate::{
    region::Platform,
    types::{Payload, RiotApiResponse},
};

use super::summoner_v3::SummonerApi;

/// Riot Champion-Mastery-V3 API.
#[async_trait]
pub trait ChampionMasteryApi: SummonerApi {
    /// Champion masteries of a summoner.
    ///
    /// Issues two requests: one to Summoner-V3 to resolve the summoner ID, then
    /// one to Champion-Mastery-V3.
    async fn get_champion_mastery(
        &self,
        summoner_name: &str,
        platform: Platform,
    ) -> RiotApiResponse<Payload> {
        tracing::trace!(
            "[CHAMPION-MASTERY-V3 API] get_champion_mastery {} in {:?}",
            summoner_name,
            platform
        );

        let summoner_id = self.get_summoner_id(summoner_name, platform).await?.to_string();
        self.get(
            platform,
            "champion-mastery/v3/champion-masteries/by-summoner",
            Some(summoner_id.as_str()),
            &[],
        )
        .await
    }
}
