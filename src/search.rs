use crate::github::RepositoryService;
use crate::models::Repository;
use crate::sort::{sort_in_place, SortType};
use tracing::{info, warn};

/// Events driving a repository search session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    Search(Option<String>),
    Cancel,
    Sort(SortType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutput {
    BeganLoading,
    FailedToLoad,
    Finished,
    Cancelled,
    /// The input had no effect (blank query, or a search already in flight)
    Ignored,
}

pub const PLACEHOLDER_MESSAGE: &str = "Try searching for repo.";

/// State of the repository list: the fetched results, kept sorted by the selected sort type.
pub struct SearchSession<S> {
    service: S,
    repositories: Vec<Repository>,
    sort_type: SortType,
    is_loading: bool,
    is_initial: bool,
}

impl<S: RepositoryService> SearchSession<S> {
    pub fn new(service: S) -> Self {
        SearchSession {
            service,
            repositories: Vec::new(),
            sort_type: SortType::default(),
            is_loading: false,
            is_initial: true,
        }
    }

    pub fn with_sort_type(mut self, sort_type: SortType) -> Self {
        self.sort_type = sort_type;
        self
    }

    /// Apply one input and return the outputs it produced, in order. A search that starts
    /// yields `BeganLoading` followed by `Finished` or `FailedToLoad`.
    pub async fn handle(&mut self, input: SearchInput) -> Vec<SearchOutput> {
        match input {
            SearchInput::Search(query) => self.search(query.as_deref()).await,
            SearchInput::Sort(sort_type) => {
                self.sort_type = sort_type;
                sort_in_place(&mut self.repositories, sort_type);
                vec![SearchOutput::Finished]
            }
            SearchInput::Cancel => {
                self.repositories.clear();
                self.is_loading = false;
                self.is_initial = true;
                vec![SearchOutput::Cancelled]
            }
        }
    }

    async fn search(&mut self, query: Option<&str>) -> Vec<SearchOutput> {
        let query = match query {
            Some(query) if !query.trim().is_empty() => query,
            _ => return vec![SearchOutput::Ignored],
        };
        if self.is_loading {
            return vec![SearchOutput::Ignored];
        }

        self.is_loading = true;
        self.is_initial = false;
        info!(query, "Searching repositories");

        let result = self.service.search_repositories(query).await;
        self.is_loading = false;

        let finished = match result {
            Ok(response) if response.total_count > 0 => {
                self.repositories = response.items;
                sort_in_place(&mut self.repositories, self.sort_type);
                SearchOutput::Finished
            }
            Ok(_) => {
                info!(query, "No repositories found");
                self.repositories.clear();
                SearchOutput::FailedToLoad
            }
            Err(e) => {
                warn!(query, error = %e, "Repository search failed");
                self.repositories.clear();
                SearchOutput::FailedToLoad
            }
        };

        vec![SearchOutput::BeganLoading, finished]
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn sort_type(&self) -> SortType {
        self.sort_type
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn shows_placeholder(&self) -> bool {
        self.repositories.is_empty() && self.is_initial
    }
}
