use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::models::{RateLimitState, RepositoriesResponse, User};
use crate::request::ApiRequest;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{debug, warn};
use url::Url;

/// Source of repository search results
pub trait RepositoryService {
    fn search_repositories(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<RepositoriesResponse>> + Send;
}

pub struct GitHubClient {
    client: Client,
    config: ClientConfig,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(GitHubClient { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Start a request against this client's base URL
    pub fn request(&self, endpoint: Endpoint) -> ApiRequest {
        ApiRequest::new(endpoint).with_base_url(self.config.base_url.clone())
    }

    async fn make_request(&self, request: &ApiRequest) -> Result<Response> {
        let url = request.url()?;
        debug!(%request, "Sending GitHub API request");

        let mut builder = self
            .client
            .request(request.http_method(), url.clone())
            .header("Accept", "application/vnd.github.v3+json");
        if let Some(token) = &self.config.token {
            builder = builder.header("Authorization", format!("token {}", token));
        }

        let response = builder.send().await?;
        let rate_limit = RateLimitState::from_headers(response.headers());

        match response.status() {
            StatusCode::OK => {
                if rate_limit.remaining < 10 {
                    warn!(remaining = rate_limit.remaining, "Rate limit low");
                }
                Ok(response)
            }
            StatusCode::NOT_FOUND => Err(Error::NotFound(format!("Resource not found: {}", url))),
            StatusCode::FORBIDDEN if rate_limit.is_limited => {
                Err(Error::RateLimitExceeded(format!(
                    "API rate limit exceeded. Reset at: {}",
                    rate_limit.reset_time
                )))
            }
            StatusCode::FORBIDDEN => {
                let error_text = error_message(response).await;
                Err(Error::Api(format!("Forbidden: {}", error_text)))
            }
            status => {
                let error_text = error_message(response).await;
                Err(Error::Api(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }

    /// Issue a single GET for `request` and decode the JSON body into `T`
    pub async fn execute<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T> {
        let (value, _) = self.execute_with_rate_limit(request).await?;
        Ok(value)
    }

    pub async fn execute_with_rate_limit<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<(T, RateLimitState)> {
        let response = self.make_request(request).await?;
        let rate_limit = RateLimitState::from_headers(response.headers());

        let body = response.bytes().await?;
        let value = serde_json::from_slice(&body)?;

        Ok((value, rate_limit))
    }

    pub async fn search_repositories(&self, query: &str) -> Result<RepositoriesResponse> {
        let request = self
            .request(Endpoint::SearchRepositories)
            .with_query_param("q", query);
        let response: RepositoriesResponse = self.execute(&request).await?;

        debug!(
            query,
            total_count = response.total_count,
            items = response.items.len(),
            "Search finished"
        );
        Ok(response)
    }

    pub async fn get_user(&self, login: &str) -> Result<User> {
        let request = self.request(Endpoint::Users).with_path_component(login);
        self.execute(&request).await
    }

    /// Fetch a user from an API URL such as the `url` of an owner record
    pub async fn get_user_by_url(&self, url: &str) -> Result<User> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
        let request = ApiRequest::parse_url(&parsed, &self.config.base_url)?;

        if request.endpoint() != Endpoint::Users || request.path_components().len() != 1 {
            return Err(Error::InvalidUrl(format!("Not a user URL: {}", url)));
        }

        self.execute(&request).await
    }
}

impl RepositoryService for GitHubClient {
    async fn search_repositories(&self, query: &str) -> Result<RepositoriesResponse> {
        GitHubClient::search_repositories(self, query).await
    }
}

async fn error_message(response: Response) -> String {
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| json.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or(body)
}
