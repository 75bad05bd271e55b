use async_trait::async_trait;

use crate::{
    region::Platform,
    types::{Payload, RiotApiResponse},
};

use super::summoner_v3::SummonerApi;

/// Riot League-V3 API.
#[async_trait]
pub trait LeagueApi: SummonerApi {
    /// League positions of a summoner, one entry per ranked queue.
    ///
    /// Resolves the summoner ID through Summoner-V3 first.
    async fn get_summoner_league(
        &self,
        summoner_name: &str,
        platform: Platform,
    ) -> RiotApiResponse<Payload> {
        tracing::trace!(
            "[LEAGUE-V3 API] get_summoner_league {} in {:?}",
            summoner_name,
            platform
        );

        let summoner_id = self.get_summoner_id(summoner_name, platform).await?.to_string();
        self.get(
            platform,
            "league/v3/positions/by-summoner",
            Some(summoner_id.as_str()),
            &[],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::{api::lol::fake::FakeApi, types::RiotApiError};

    #[tokio::test]
    async fn get_summoner_league_chains_summoner_lookup() {
        let api = FakeApi::new(vec![
            Ok(r#"{"id":23,"name":"Rekkles"}"#),
            Ok(r#"[{"queueType":"RANKED_SOLO_5x5","tier":"CHALLENGER","rank":"I","leaguePoints":812}]"#),
        ]);

        let leagues = api
            .get_summoner_league("Rekkles", Platform::Euw1)
            .await
            .unwrap();

        assert_eq!(leagues.str("0.tier"), Some("CHALLENGER"));
        assert_eq!(
            api.paths(),
            vec![
                "/lol/summoner/v3/summoners/by-name/Rekkles?api_key=KEY",
                "/lol/league/v3/positions/by-summoner/23?api_key=KEY",
            ]
        );
    }

    #[tokio::test]
    async fn second_call_failure_is_reported() {
        let api = FakeApi::new(vec![
            Ok(r#"{"id":23}"#),
            Err(StatusCode::SERVICE_UNAVAILABLE),
        ]);

        let err = api
            .get_summoner_league("Rekkles", Platform::Euw1)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn summoner_without_id_skips_league_request() {
        let api = FakeApi::new(vec![Ok(r#"{"name":"Rekkles"}"#)]);

        let res = api.get_summoner_league("Rekkles", Platform::Euw1).await;

        assert!(matches!(res, Err(RiotApiError::MissingField("id"))));
        assert_eq!(api.paths().len(), 1);
    }
}
