use crate::request::API_BASE_URL;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Repo Search/0.1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`crate::github::GitHubClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Unauthenticated requests work against the public API at a lower rate limit
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
