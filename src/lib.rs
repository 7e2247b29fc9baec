pub mod cli;
pub mod config;
pub mod details;
pub mod endpoint;
pub mod error;
pub mod github;
pub mod models;
pub mod request;
pub mod search;
pub mod sort;

pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use github::{GitHubClient, RepositoryService};
pub use request::ApiRequest;
pub use sort::SortType;
