use anyhow::Context;
use clap::Parser;
use colored::*;
use repo_search::cli::{Cli, Command};
use repo_search::details::{RepositoryDetails, RepositoryRow, UserDetails};
use repo_search::search::{SearchInput, SearchOutput, SearchSession, PLACEHOLDER_MESSAGE};
use repo_search::{ApiRequest, GitHubClient, SortType};
use tracing_subscriber::EnvFilter;
use url::Url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.client_config();

    match cli.command {
        Command::Search {
            query,
            sort,
            limit,
            details,
        } => {
            let client = GitHubClient::new(config).context("Failed to create GitHub client")?;
            run_search(client, query, sort, limit, details).await
        }
        Command::User { user } => {
            let client = GitHubClient::new(config).context("Failed to create GitHub client")?;
            let result = if user.starts_with("http://") || user.starts_with("https://") {
                client.get_user_by_url(&user).await
            } else {
                client.get_user(&user).await
            };
            let fetched = result.with_context(|| format!("Failed to load user {}", user))?;

            println!("{}", fetched.login.bold().green());
            println!("{}", "=".repeat(50).dimmed());
            println!("{}", UserDetails::from(&fetched));
            Ok(())
        }
        Command::Url { url } => {
            let parsed = Url::parse(&url).with_context(|| format!("Invalid URL: {}", url))?;
            let request = ApiRequest::parse_url(&parsed, &config.base_url)?;

            println!("{} {}", "endpoint:".bold(), request.endpoint());
            for component in request.path_components() {
                println!("{} {}", "path:".bold(), component);
            }
            for (name, value) in request.query_params() {
                println!("{} {}={}", "query:".bold(), name, value);
            }
            println!("{} {}", "request:".bold(), request);
            Ok(())
        }
    }
}

async fn run_search(
    client: GitHubClient,
    query: String,
    sort: SortType,
    limit: Option<usize>,
    details: bool,
) -> anyhow::Result<()> {
    let mut session = SearchSession::new(client).with_sort_type(sort);

    for output in session.handle(SearchInput::Search(Some(query.clone()))).await {
        match output {
            SearchOutput::BeganLoading => {
                println!("🔍 Searching repositories for '{}'...", query.cyan());
            }
            SearchOutput::FailedToLoad => {
                anyhow::bail!("No repositories loaded for '{}'", query);
            }
            SearchOutput::Ignored => {
                println!("{}", PLACEHOLDER_MESSAGE.yellow());
                return Ok(());
            }
            SearchOutput::Finished | SearchOutput::Cancelled => {}
        }
    }

    let repositories = session.repositories();
    let shown = limit.unwrap_or(repositories.len()).min(repositories.len());

    println!(
        "{}",
        format!(
            "Showing {} of {} repositories, sorted by {}",
            shown,
            repositories.len(),
            session.sort_type()
        )
        .bold()
        .green()
    );
    println!("{}\n", "=".repeat(50).dimmed());

    for repository in &repositories[..shown] {
        if details {
            println!("{}", RepositoryDetails::from(repository));
        } else {
            println!("{}", RepositoryRow::from(repository));
        }
        println!();
    }

    Ok(())
}
