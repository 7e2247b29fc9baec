use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Abbreviated user record embedded in a repository search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerUser {
    pub login: String,
    pub avatar_url: String,
    /// API URL of the user, suitable for a user details lookup
    pub url: String,
}

/// Repository as returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: OwnerUser,
    pub watchers_count: u32,
    pub forks_count: u32,
    pub open_issues_count: u32,
    pub html_url: String,
    pub updated_at: String,
    pub stargazers_count: u32,
    pub created_at: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl Repository {
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Full user record from the users endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub followers: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoriesResponse {
    pub total_count: i64,
    pub incomplete_results: bool,
    pub items: Vec<Repository>,
}

/// Rate limit state reported by the API on each response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitState {
    pub remaining: u32,
    pub limit: u32,
    pub reset_time: DateTime<Utc>,
    pub is_limited: bool,
}

impl RateLimitState {
    /// Responses without `X-RateLimit-Remaining` report the default, unlimited state.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(remaining) = header_value::<u32>(headers, "X-RateLimit-Remaining") else {
            return Self::default();
        };
        let limit = header_value::<u32>(headers, "X-RateLimit-Limit").unwrap_or(60);
        let reset_time = header_value::<i64>(headers, "X-RateLimit-Reset")
            .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
            .unwrap_or_else(|| Utc::now() + chrono::Duration::hours(1));

        RateLimitState {
            remaining,
            limit,
            reset_time,
            is_limited: remaining == 0,
        }
    }
}

impl Default for RateLimitState {
    fn default() -> Self {
        Self {
            remaining: 60,
            limit: 60,
            reset_time: Utc::now() + chrono::Duration::hours(1),
            is_limited: false,
        }
    }
}

fn header_value<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<T>().ok())
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
