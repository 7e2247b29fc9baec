use crate::config::{ClientConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::request::API_BASE_URL;
use crate::sort::SortType;
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "repo-search")]
#[command(about = "Search GitHub repositories and inspect repository and user details")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub API token (optional, raises the rate limit)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = API_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "GITHUB_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search repositories by name
    Search {
        query: String,

        /// Sort order applied to the fetched results
        #[arg(long, value_enum, default_value_t = SortType::Stars)]
        sort: SortType,

        /// Show at most this many repositories
        #[arg(long)]
        limit: Option<usize>,

        /// Print the full details of every repository
        #[arg(long)]
        details: bool,
    },

    /// Show a user by login or API URL
    User { user: String },

    /// Parse a GitHub API URL and print the request it describes
    Url { url: String },
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            token: self.token.clone().filter(|t| !t.is_empty()),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}
