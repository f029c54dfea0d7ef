use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the property search endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl SearchConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Load from the environment, reading a `.env` file first if present.
    ///
    /// `HOUSING_API_BASE_URL` is required; `HOUSING_API_TIMEOUT_SECS` and
    /// `HOUSING_API_USER_AGENT` are optional.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let base_url = env::var("HOUSING_API_BASE_URL").context("HOUSING_API_BASE_URL is not set")?;
        let mut config = Self::new(base_url);

        if let Ok(secs) = env::var("HOUSING_API_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("HOUSING_API_TIMEOUT_SECS is not a number: {secs:?}"))?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(agent) = env::var("HOUSING_API_USER_AGENT") {
            config.user_agent = agent;
        }

        Ok(config)
    }

    /// Full URL of the listing search route
    pub fn list_url(&self) -> String {
        format!("{}/property/list", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_ignores_trailing_slash() {
        assert_eq!(
            SearchConfig::new("http://localhost:8080/").list_url(),
            "http://localhost:8080/property/list"
        );
        assert_eq!(
            SearchConfig::new("https://api.example.com/v1").list_url(),
            "https://api.example.com/v1/property/list"
        );
    }

    #[test]
    fn defaults() {
        let config = SearchConfig::new("http://localhost");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("housing-filter/"));
    }
}
