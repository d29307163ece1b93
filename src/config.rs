use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("METRICS_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if api_url.trim().is_empty() {
            return Err(Error::Config(
                "METRICS_API_URL is set but empty".to_string(),
            ));
        }

        let timeout_secs = env::var("METRICS_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }
}
