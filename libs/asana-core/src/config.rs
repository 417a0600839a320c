use std::env;

use crate::errors::{ApiError, Result};

/// Default base URL for the public Asana REST API
pub const DEFAULT_BASE_URL: &str = "https://app.asana.com/api/1.0";

const DEFAULT_USER_AGENT: &str = concat!("asana-core/", env!("CARGO_PKG_VERSION"));

/// Asana Client Configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub access_token: String,
    pub base_url: String,
    pub user_agent: String,
}

impl ClientConfig {
    /// Create new client configuration with a personal access token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Override the API base URL (e.g. a mock server in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the user-agent header sent with every request
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Load configuration from the environment
    ///
    /// Reads `ASANA_ACCESS_TOKEN` (required) and `ASANA_BASE_URL` (optional).
    pub fn from_env() -> Result<Self> {
        let token = env::var("ASANA_ACCESS_TOKEN")
            .map_err(|_| ApiError::Config("ASANA_ACCESS_TOKEN is not set".into()))?;

        let mut config = Self::new(token);
        if let Ok(base_url) = env::var("ASANA_BASE_URL") {
            config.base_url = base_url;
        }

        Ok(config)
    }
}
