use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Riot API returned a non-200 code. Error code: {0}")]
    Status(reqwest::StatusCode),

    #[error("Error occurred while decoding data: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid path segment: {0:?}")]
    InvalidSegment(String),

    #[error("Unknown platform: {0}")]
    InvalidPlatform(String),

    #[error("Field `{0}` is missing from the Riot API response")]
    MissingField(&'static str),
}

impl RiotApiError {
    /// Upstream HTTP status, if this error was caused by a non-200 response.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// A call to Riot API can either result in a success with the success type or fail with a [`RiotApiError`].
pub type RiotApiResponse<T> = Result<T, RiotApiError>;

/// Verbatim JSON returned by the Riot API, with dotted-path access.
///
/// `payload.get("data.Aatrox.stats.hp")` walks objects by key and arrays by
/// index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Value);

impl Payload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return Some(&self.0);
        }

        path.split('.').try_fold(&self.0, |node, key| match node {
            Value::Object(map) => map.get(key),
            Value::Array(seq) => key.parse::<usize>().ok().and_then(|i| seq.get(i)),
            _ => None,
        })
    }

    pub fn str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    pub fn i64(&self, path: &str) -> Option<i64> {
        self.get(path).and_then(Value::as_i64)
    }

    pub fn u64(&self, path: &str) -> Option<u64> {
        self.get(path).and_then(Value::as_u64)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl Deref for Payload {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Payload> for Value {
    fn from(payload: Payload) -> Self {
        payload.0
    }
}
