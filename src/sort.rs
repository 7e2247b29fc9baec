use crate::error::{Error, Result};
use crate::models::Repository;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Client-side ordering key for a fetched repository list. Every key sorts descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortType {
    #[default]
    Stars,
    Forks,
    Updated,
}

impl SortType {
    /// Map a scope-button index to a sort type; unknown indices fall back to stars.
    pub fn from_index(index: usize) -> Self {
        match index {
            1 => SortType::Forks,
            2 => SortType::Updated,
            _ => SortType::Stars,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortType::Stars => "stars",
            SortType::Forks => "forks",
            SortType::Updated => "updated",
        }
    }

    fn compare(&self, a: &Repository, b: &Repository) -> Ordering {
        match self {
            SortType::Stars => b.stargazers_count.cmp(&a.stargazers_count),
            SortType::Forks => b.forks_count.cmp(&a.forks_count),
            // Unparseable dates go last
            SortType::Updated => match (a.updated_at(), b.updated_at()) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stars" => Ok(SortType::Stars),
            "forks" => Ok(SortType::Forks),
            "updated" => Ok(SortType::Updated),
            other => Err(Error::UnknownSortType(other.to_string())),
        }
    }
}

/// Stable sort; repositories with equal keys keep their fetched order.
pub fn sort_in_place(repositories: &mut [Repository], sort_type: SortType) {
    repositories.sort_by(|a, b| sort_type.compare(a, b));
}

pub fn sort_repositories(repositories: &[Repository], sort_type: SortType) -> Vec<Repository> {
    let mut sorted = repositories.to_vec();
    sort_in_place(&mut sorted, sort_type);
    sorted
}
