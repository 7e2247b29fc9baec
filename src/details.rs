use crate::models::{OwnerUser, Repository, User};
use chrono::{DateTime, Utc};
use std::fmt;

pub const NO_INFO: &str = "No info";
pub const CORRUPTED_DATE: &str = "Corrupted date";

/// A labelled value in a details summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub title: &'static str,
    pub value: String,
}

impl Field {
    fn new(title: &'static str, value: impl Into<String>) -> Self {
        Field {
            title,
            value: value.into(),
        }
    }

    /// Value as displayed; empty values read "No info".
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            NO_INFO
        } else {
            &self.value
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.display_value())
    }
}

pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| CORRUPTED_DATE.to_string())
}

/// One line of the repository list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRow {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub repository_url: String,
    pub stars: String,
    pub watchers: String,
    pub forks: String,
    pub issues: String,
}

impl From<&Repository> for RepositoryRow {
    fn from(repository: &Repository) -> Self {
        RepositoryRow {
            id: repository.id,
            title: repository.name.clone(),
            author: repository.owner.login.clone(),
            repository_url: repository.html_url.clone(),
            stars: format!("Stars: {}", repository.stargazers_count),
            watchers: format!("Watchers: {}", repository.watchers_count),
            forks: format!("Forks: {}", repository.forks_count),
            issues: format!("Open issues: {}", repository.open_issues_count),
        }
    }
}

impl fmt::Display for RepositoryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} by {}", self.title, self.author)?;
        write!(
            f,
            "  {} | {} | {} | {}",
            self.stars, self.watchers, self.forks, self.issues
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryDetails {
    pub info: Vec<Field>,
    pub dates: Vec<Field>,
    pub owner: OwnerUser,
    pub repository_url: String,
}

impl From<&Repository> for RepositoryDetails {
    fn from(repository: &Repository) -> Self {
        RepositoryDetails {
            info: vec![
                Field::new("Name", repository.name.clone()),
                Field::new("Author", repository.owner.login.clone()),
                Field::new("Forks", repository.forks_count.to_string()),
                Field::new("Watchers", repository.watchers_count.to_string()),
                Field::new("Open issues", repository.open_issues_count.to_string()),
                Field::new("Stars", repository.stargazers_count.to_string()),
            ],
            dates: vec![
                Field::new("Last update", format_date(repository.updated_at())),
                Field::new("Created at", format_date(repository.created_at())),
            ],
            owner: repository.owner.clone(),
            repository_url: repository.html_url.clone(),
        }
    }
}

impl fmt::Display for RepositoryDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in self.info.iter().chain(&self.dates) {
            writeln!(f, "{}", field)?;
        }
        writeln!(f, "Owner: {} ({})", self.owner.login, self.owner.url)?;
        write!(f, "Open repository link: {}", self.repository_url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub avatar_url: String,
    pub info: Vec<Field>,
    pub profile_url: String,
}

impl From<&User> for UserDetails {
    fn from(user: &User) -> Self {
        UserDetails {
            avatar_url: user.avatar_url.clone(),
            info: vec![
                Field::new("Name", user.name.clone().unwrap_or_default()),
                Field::new("Bio", user.bio.clone().unwrap_or_default()),
                Field::new("Login id", user.login.clone()),
                Field::new("Location", user.location.clone().unwrap_or_default()),
                Field::new("Followers", user.followers.to_string()),
                Field::new("User id", user.id.to_string()),
            ],
            profile_url: user.html_url.clone(),
        }
    }
}

impl fmt::Display for UserDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.info {
            writeln!(f, "{}", field)?;
        }
        writeln!(f, "Avatar: {}", self.avatar_url)?;
        write!(f, "Git profile: {}", self.profile_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = DateTime::parse_from_rfc3339("2023-02-26T10:15:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_date(Some(date)), "26.02.2023");
        assert_eq!(format_date(None), CORRUPTED_DATE);
    }

    #[test]
    fn test_empty_field_reads_no_info() {
        let field = Field::new("Bio", "");
        assert_eq!(field.display_value(), NO_INFO);
        assert_eq!(field.to_string(), "Bio: No info");
    }
}
