use async_trait::async_trait;

use crate::{
    api::traits::ApiRequest,
    region::Platform,
    types::{Payload, RiotApiResponse},
};

/// Parameters requesting the full champion data set.
const CHAMPION_PARAMS: [(&str, &str); 3] =
    [("locale", "en_US"), ("champData", "all"), ("tags", "all")];

/// Riot LoL-Static-Data-V3 API.
#[async_trait]
pub trait StaticDataApi: ApiRequest {
    /// Data of every champion.
    async fn get_all_champions(&self, platform: Platform) -> RiotApiResponse<Payload> {
        tracing::trace!("[STATIC-DATA-V3 API] get_all_champions in {:?}", platform);

        self.get(platform, "static-data/v3/champions", None, &CHAMPION_PARAMS)
            .await
    }

    async fn get_champion(&self, champion_id: u32, platform: Platform) -> RiotApiResponse<Payload> {
        tracing::trace!(
            "[STATIC-DATA-V3 API] get_champion {} in {:?}",
            champion_id,
            platform
        );

        let id = champion_id.to_string();
        self.get(
            platform,
            "static-data/v3/champions",
            Some(id.as_str()),
            &CHAMPION_PARAMS,
        )
        .await
    }

    async fn get_item(&self, item_id: u32, platform: Platform) -> RiotApiResponse<Payload> {
        tracing::trace!("[STATIC-DATA-V3 API] get_item {} in {:?}", item_id, platform);

        let id = item_id.to_string();
        self.get(platform, "static-data/v3/items", Some(id.as_str()), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::{api::lol::fake::FakeApi, types::RiotApiError};

    #[tokio::test]
    async fn get_all_champions_requests_full_data() {
        let api = FakeApi::new(vec![Ok(r#"{"type":"champion","data":{}}"#)]);

        let champions = api.get_all_champions(Platform::default()).await.unwrap();

        assert_eq!(champions.str("type"), Some("champion"));
        assert_eq!(
            api.paths(),
            vec!["/lol/static-data/v3/champions?locale=en_US&champData=all&tags=all&api_key=KEY"]
        );
        let host = api.requested.lock().unwrap()[0].host_str().map(String::from);
        assert_eq!(host.as_deref(), Some("na1.api.riotgames.com"));
    }

    #[tokio::test]
    async fn get_champion_uses_id_segment() {
        let api = FakeApi::new(vec![Ok(r#"{"id":266,"key":"Aatrox","name":"Aatrox"}"#)]);

        let champion = api.get_champion(266, Platform::Euw1).await.unwrap();

        assert_eq!(champion.str("name"), Some("Aatrox"));
        assert_eq!(
            api.paths(),
            vec!["/lol/static-data/v3/champions/266?locale=en_US&champData=all&tags=all&api_key=KEY"]
        );
    }

    #[tokio::test]
    async fn get_item_honours_platform() {
        let api = FakeApi::new(vec![Ok(r#"{"id":1001,"name":"Boots of Speed"}"#)]);

        let item = api.get_item(1001, Platform::Kr).await.unwrap();

        assert_eq!(item.u64("id"), Some(1001));
        let url = api.requested.lock().unwrap()[0].clone();
        assert_eq!(url.host_str(), Some("kr.api.riotgames.com"));
        assert_eq!(url.path(), "/lol/static-data/v3/items/1001");
    }

    #[tokio::test]
    async fn undecodable_body_is_a_serde_error() {
        let api = FakeApi::new(vec![Ok("<html>oops</html>")]);

        let res = api.get_item(1001, Platform::Na1).await;

        assert!(matches!(res, Err(RiotApiError::Serde(_))));
    }

    #[tokio::test]
    async fn status_error_is_propagated() {
        let api = FakeApi::new(vec![Err(StatusCode::NOT_FOUND)]);

        let err = api.get_champion(9999, Platform::Na1).await.unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }
}
