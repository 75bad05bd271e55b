use talon_riot_api::RiotApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Riot API error: {0}")]
    RiotApi(#[from] RiotApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No value at path `{0}` in the response")]
    PathNotFound(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
