use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use std::fmt;
use url::{form_urlencoded, Url};

pub const API_BASE_URL: &str = "https://api.github.com";

/// A GET request against the GitHub API, described as an endpoint, optional path components,
/// and optional query parameters.
///
/// `https://api.github.com/search/repositories?q=tetris&sort=stars` is
/// `Endpoint::SearchRepositories` with the params `q=tetris` and `sort=stars`.
/// `https://api.github.com/users/mojombo` is `Endpoint::Users` with the path component
/// `mojombo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    base_url: String,
    endpoint: Endpoint,
    path_components: Vec<String>,
    query_params: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        ApiRequest {
            base_url: API_BASE_URL.to_string(),
            endpoint,
            path_components: Vec::new(),
            query_params: Vec::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_path_component(mut self, component: impl Into<String>) -> Self {
        self.path_components.push(component.into());
        self
    }

    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn path_components(&self) -> &[String] {
        &self.path_components
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query_params
    }

    /// Only GET is used against this API.
    pub fn http_method(&self) -> reqwest::Method {
        reqwest::Method::GET
    }

    pub fn url_string(&self) -> String {
        let mut url = format!("{}/{}", self.base_url, self.endpoint.as_str());

        for component in &self.path_components {
            url.push('/');
            url.push_str(&urlencoding::encode(component));
        }

        if !self.query_params.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query_params.iter())
                .finish();
            url.push('?');
            url.push_str(&query);
        }

        url
    }

    /// Components are percent-encoded, so `/`, `?` and `#` stay inside their segment. Empty and
    /// dot components are rejected since they would collapse into a different path.
    pub fn url(&self) -> Result<Url> {
        if let Some(component) = self
            .path_components
            .iter()
            .find(|c| matches!(c.as_str(), "" | "." | ".."))
        {
            return Err(Error::InvalidUrl(format!(
                "Invalid path component {:?} in {}",
                component,
                self.url_string()
            )));
        }

        let url_string = self.url_string();
        Url::parse(&url_string).map_err(|e| Error::InvalidUrl(format!("{}: {}", url_string, e)))
    }

    /// Parse a URL under the public GitHub API base back into a request.
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
        Self::parse_url(&parsed, API_BASE_URL)
    }

    /// Parse a URL under `base_url` back into a request. Path segments after the endpoint become
    /// path components and query pairs become query params; pairs without `=` are skipped.
    pub fn parse_url(url: &Url, base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;
        let foreign = || Error::ForeignUrl {
            base: base_url.to_string(),
            url: url.to_string(),
        };

        if url.origin() != base.origin() {
            return Err(foreign());
        }

        let base_path = base.path().trim_end_matches('/');
        let relative = url.path().strip_prefix(base_path).ok_or_else(foreign)?;
        if !relative.is_empty() && !relative.starts_with('/') {
            return Err(foreign());
        }
        let relative = relative.trim_start_matches('/');

        let (endpoint, rest) = Endpoint::strip_from(relative)
            .ok_or_else(|| Error::UnknownEndpoint(relative.to_string()))?;

        let path_components = rest
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                urlencoding::decode(segment)
                    .map(|decoded| decoded.into_owned())
                    .map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        let query_params: Vec<(String, String)> = url
            .query()
            .map(|query| {
                query
                    .split('&')
                    .filter(|pair| pair.contains('='))
                    .flat_map(|pair| form_urlencoded::parse(pair.as_bytes()))
                    .map(|(name, value)| (name.into_owned(), value.into_owned()))
                    .collect()
            })
            .unwrap_or_default();

        Ok(ApiRequest {
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoint,
            path_components,
            query_params,
        })
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.http_method(), self.url_string())
    }
}
