pub mod client;
pub mod lol;
pub mod metrics;
pub mod traits;

pub use lol::{
    ChampionApi, ChampionMasteryApi, LeagueApi, LolApiClient, LolApiFull, StaticDataApi,
    SummonerApi,
};
