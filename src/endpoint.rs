use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Fixed GitHub API path segment appended to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SearchRepositories,
    Users,
}

impl Endpoint {
    pub const ALL: [Endpoint; 2] = [Endpoint::SearchRepositories, Endpoint::Users];

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::SearchRepositories => "search/repositories",
            Endpoint::Users => "users",
        }
    }

    /// Match the endpoint at the start of `path`, returning it together with the rest of the
    /// path. Longer endpoints win, and a match must end on a `/` boundary.
    pub fn strip_from(path: &str) -> Option<(Endpoint, &str)> {
        let mut candidates = Self::ALL;
        candidates.sort_by_key(|e| std::cmp::Reverse(e.as_str().len()));

        candidates.into_iter().find_map(|endpoint| {
            let rest = path.strip_prefix(endpoint.as_str())?;
            if rest.is_empty() || rest.starts_with('/') {
                Some((endpoint, rest.trim_start_matches('/')))
            } else {
                None
            }
        })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| Error::UnknownEndpoint(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefers_full_segment() {
        let (endpoint, rest) = Endpoint::strip_from("search/repositories").unwrap();
        assert_eq!(endpoint, Endpoint::SearchRepositories);
        assert_eq!(rest, "");

        let (endpoint, rest) = Endpoint::strip_from("users/mojombo").unwrap();
        assert_eq!(endpoint, Endpoint::Users);
        assert_eq!(rest, "mojombo");
    }

    #[test]
    fn test_strip_requires_boundary() {
        assert!(Endpoint::strip_from("usersfoo").is_none());
        assert!(Endpoint::strip_from("search").is_none());
        assert!(Endpoint::strip_from("search/code").is_none());
    }
}
