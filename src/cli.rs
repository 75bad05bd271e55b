use clap::{Parser, Subcommand};
use serde_json::Value;
use talon_riot_api::{LolApiClient, LolApiFull, Payload, Platform};
use tracing::{debug, info};

use crate::{config::Config, error::AppError};

/// Query the League of Legends API from the command line.
#[derive(Parser, Debug)]
#[command(name = "talon", version, about)]
pub struct Cli {
    /// Platform to run the request on (na1, euw1, kr...). Defaults to TALON_PLATFORM or na1.
    #[arg(short, long, global = true)]
    pub region: Option<Platform>,

    /// Only print the value found at this dotted path (e.g. `data.Aatrox.title`).
    #[arg(short, long, global = true)]
    pub path: Option<String>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Cmd {
    /// Summoner profile by name.
    Summoner { name: String },
    /// Static data of one champion.
    Champion { id: u32 },
    /// Static data of every champion.
    Champions,
    /// Static data of one item.
    Item { id: u32 },
    /// Champion status, including the free-to-play rotation.
    Rotation,
    /// Champion masteries of a summoner.
    Mastery { name: String },
    /// League positions of a summoner.
    League { name: String },
}

impl Cmd {
    async fn fetch(&self, api: &impl LolApiFull, platform: Platform) -> Result<Payload, AppError> {
        let payload = match self {
            Cmd::Summoner { name } => api.get_summoner(name, platform).await?,
            Cmd::Champion { id } => api.get_champion(*id, platform).await?,
            Cmd::Champions => api.get_all_champions(platform).await?,
            Cmd::Item { id } => api.get_item(*id, platform).await?,
            Cmd::Rotation => api.get_champions(platform).await?,
            Cmd::Mastery { name } => api.get_champion_mastery(name, platform).await?,
            Cmd::League { name } => api.get_summoner_league(name, platform).await?,
        };

        Ok(payload)
    }
}

impl Cli {
    pub async fn run(self, config: Config) -> Result<(), AppError> {
        let platform = self.region.unwrap_or(config.platform);
        let api = build_client(&config);

        info!("🛰️ {:?} on {} ({})", self.cmd, platform, platform.display_name());
        let payload = self.cmd.fetch(&api, platform).await?;
        debug!("{} request(s) executed", api.metrics().count());

        println!("{}", render(&payload, self.path.as_deref())?);

        Ok(())
    }
}

fn build_client(config: &Config) -> LolApiClient {
    let mut api = LolApiClient::new(config.riot_api_key.clone());
    if let Some(url) = &config.riot_api_base_url {
        api = api.with_base_url(url.clone());
    }
    if let Some(limit) = config.riot_rate_limit_per_second {
        api = api.with_rate_limit(limit);
    }
    api
}

/// Pretty JSON of `payload`, or of the value at `path`. Strings are printed bare.
fn render(payload: &Payload, path: Option<&str>) -> Result<String, AppError> {
    let value = match path {
        Some(path) => payload
            .get(path)
            .ok_or_else(|| AppError::PathNotFound(path.to_string()))?,
        None => payload.as_value(),
    };

    match value {
        Value::String(s) => Ok(s.clone()),
        other => Ok(serde_json::to_string_pretty(other)?),
    }
}
