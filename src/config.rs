use std::env;
use std::time::Duration;

use tracing::debug;

use crate::error::{FeedError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api-football-v1.p.rapidapi.com/v3";
pub const DEFAULT_API_HOST: &str = "api-football-v1.p.rapidapi.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const API_KEY_VAR: &str = "MATCHFEED_API_KEY";
const BASE_URL_VAR: &str = "MATCHFEED_BASE_URL";
const API_HOST_VAR: &str = "MATCHFEED_API_HOST";
const TIMEOUT_VAR: &str = "MATCHFEED_TIMEOUT_SECS";

/// Connection settings for the fixture API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_host: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Settings for the public RapidAPI endpoint with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load settings from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded environment file");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = value(API_KEY_VAR).ok_or(FeedError::MissingApiKey)?;
        let mut config = Self::new(api_key);
        if let Some(base_url) = value(BASE_URL_VAR) {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(api_host) = value(API_HOST_VAR) {
            config.api_host = api_host;
        }
        if let Some(timeout) = value(TIMEOUT_VAR) {
            let secs = timeout.parse().map_err(|_| FeedError::InvalidConfig {
                key: TIMEOUT_VAR,
                value: timeout.clone(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}
