use async_trait::async_trait;

use crate::{
    api::traits::ApiRequest,
    region::Platform,
    types::{Payload, RiotApiError, RiotApiResponse},
};

/// Riot Summoner-V3 API.
#[async_trait]
pub trait SummonerApi: ApiRequest {
    /// Summoner profile looked up by its name.
    async fn get_summoner(&self, summoner_name: &str, platform: Platform) -> RiotApiResponse<Payload> {
        tracing::trace!(
            "[SUMMONER-V3 API] get_summoner {} in {:?}",
            summoner_name,
            platform
        );

        self.get(
            platform,
            "summoner/v3/summoners/by-name",
            Some(summoner_name),
            &[],
        )
        .await
    }

    /// Numeric summoner ID used as key by the other v3 endpoints.
    async fn get_summoner_id(&self, summoner_name: &str, platform: Platform) -> RiotApiResponse<u64> {
        let summoner = self.get_summoner(summoner_name, platform).await?;

        summoner.u64("id").ok_or(RiotApiError::MissingField("id"))
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::api::lol::fake::FakeApi;

    #[tokio::test]
    async fn get_summoner_escapes_name() {
        let api = FakeApi::new(vec![Ok(r#"{"id":42,"name":"Le Conservateur"}"#)]);

        let summoner = api
            .get_summoner("Le Conservateur", Platform::Euw1)
            .await
            .unwrap();

        assert_eq!(summoner.str("name"), Some("Le Conservateur"));
        assert_eq!(
            api.paths(),
            vec!["/lol/summoner/v3/summoners/by-name/Le%20Conservateur?api_key=KEY"]
        );
    }

    #[tokio::test]
    async fn get_summoner_id_reads_id_field() {
        let api = FakeApi::new(vec![Ok(r#"{"id":19887289,"accountId":1}"#)]);

        let id = api.get_summoner_id("Doublelift", Platform::Na1).await.unwrap();

        assert_eq!(id, 19887289);
    }

    #[tokio::test]
    async fn get_summoner_id_requires_numeric_id() {
        let api = FakeApi::new(vec![Ok(r#"{"id":"not-a-number"}"#)]);

        let res = api.get_summoner_id("Doublelift", Platform::Na1).await;

        assert!(matches!(res, Err(RiotApiError::MissingField("id"))));
    }

    #[tokio::test]
    async fn dot_names_are_rejected_before_any_request() {
        let api = FakeApi::new(vec![]);

        let res = api.get_summoner("..", Platform::Na1).await;

        assert!(matches!(res, Err(RiotApiError::InvalidSegment(ref s)) if s == ".."));
        assert!(api.paths().is_empty());
    }

    #[tokio::test]
    async fn unknown_summoner_is_a_status_error() {
        let api = FakeApi::new(vec![Err(StatusCode::NOT_FOUND)]);

        let err = api.get_summoner("nobody", Platform::Na1).await.unwrap_err();

        assert!(matches!(err, RiotApiError::Status(StatusCode::NOT_FOUND)));
    }
}
