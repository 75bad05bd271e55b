use std::env;
use std::num::NonZeroU32;

use talon_riot_api::Platform;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub platform: Platform,
    pub riot_rate_limit_per_second: Option<NonZeroU32>,
    pub riot_api_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let riot_api_key = env::var("RIOT_API_KEY")
            .map_err(|_| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let platform = match env::var("TALON_PLATFORM") {
            Ok(v) => v
                .parse()
                .map_err(|_| AppError::Config(format!("TALON_PLATFORM: unknown platform {v}")))?,
            Err(_) => Platform::default(),
        };

        let riot_rate_limit_per_second = env::var("RIOT_RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new);

        let riot_api_base_url = env::var("RIOT_API_BASE_URL")
            .ok()
            .filter(|v| !v.is_empty());

        Ok(Self {
            riot_api_key,
            platform,
            riot_rate_limit_per_second,
            riot_api_base_url,
        })
    }
}
