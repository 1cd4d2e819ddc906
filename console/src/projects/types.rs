//! State, actions and environment of the projects table.

use super::filters::ProjectFilters;
use super::params::{DEFAULT_PAGE_SIZE, Pagination, TableParams};
use crate::notification::Notification;
use admin_console_api::{ApiError, Paginated, Project, ProjectListQuery, ProjectsApi, SortOrder};
use admin_console_core::environment::Clock;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Projects table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectsConfig {
    /// Quiet period before a search edit is committed.
    ///
    /// Default: 1000 ms
    pub search_debounce: Duration,

    /// Rows per page on a fresh table.
    ///
    /// Default: 10
    pub default_page_size: NonZeroU32,

    /// Go back to the first page when a filter is submitted.
    ///
    /// Default: false (the page number is kept)
    pub reset_page_on_filter: bool,
}

impl ProjectsConfig {
    /// Create configuration with defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search_debounce: Duration::from_millis(1000),
            default_page_size: DEFAULT_PAGE_SIZE,
            reset_page_on_filter: false,
        }
    }

    /// Set the search debounce window.
    #[must_use]
    pub const fn with_search_debounce(mut self, debounce: Duration) -> Self {
        self.search_debounce = debounce;
        self
    }

    /// Set the default page size.
    #[must_use]
    pub const fn with_default_page_size(mut self, page_size: NonZeroU32) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Reset pagination on filter submit.
    #[must_use]
    pub const fn with_reset_page_on_filter(mut self, reset: bool) -> Self {
        self.reset_page_on_filter = reset;
        self
    }
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment dependencies for the projects reducer
#[derive(Clone)]
pub struct ProjectsEnvironment {
    /// Project service
    pub api: Arc<dyn ProjectsApi>,
    /// Clock for notification timestamps
    pub clock: Arc<dyn Clock>,
    /// Table configuration
    pub config: ProjectsConfig,
}

impl ProjectsEnvironment {
    /// Creates a new `ProjectsEnvironment` with default configuration
    #[must_use]
    pub fn new(api: Arc<dyn ProjectsApi>, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            clock,
            config: ProjectsConfig::default(),
        }
    }

    /// Replace the configuration
    #[must_use]
    pub const fn with_config(mut self, config: ProjectsConfig) -> Self {
        self.config = config;
        self
    }
}

/// State of the projects page
#[derive(Clone, Debug)]
pub struct ProjectsState {
    /// Parameters of the current query
    pub params: TableParams,
    /// Search box contents, committed into `params` after the debounce
    pub search: String,
    /// Selected row ids, in selection order
    pub selection: Vec<String>,
    /// Rows of the last applied page
    pub items: Vec<Project>,
    /// Total rows matching the last applied query
    pub total: u64,
    /// A list request is in flight
    pub loading: bool,
    /// A delete request is in flight
    pub deleting: bool,
    /// Generation of the latest issued list request
    pub generation: u64,
    /// Query of the latest issued list request
    pub issued_query: Option<ProjectListQuery>,
    /// Error of the last list request, cleared on success
    pub error: Option<ApiError>,
    /// Pending notifications
    pub notifications: Vec<Notification>,
}

impl ProjectsState {
    /// Fresh table: first page, empty search, nothing loaded
    #[must_use]
    pub fn new(config: &ProjectsConfig) -> Self {
        Self::with_params(TableParams::new(config.default_page_size))
    }

    /// Table starting from `params`; the search box mirrors the committed search
    #[must_use]
    pub fn with_params(params: TableParams) -> Self {
        Self {
            search: params.filters.search.clone().unwrap_or_default(),
            params,
            selection: Vec::new(),
            items: Vec::new(),
            total: 0,
            loading: false,
            deleting: false,
            generation: 0,
            issued_query: None,
            error: None,
            notifications: Vec::new(),
        }
    }

    /// Whether `id` is selected
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.iter().any(|selected| selected == id)
    }

    /// Number of pages for the last applied total
    #[must_use]
    pub fn page_count(&self) -> u64 {
        self.total
            .div_ceil(u64::from(self.params.pagination.page_size.get()))
    }
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self::new(&ProjectsConfig::default())
    }
}

/// Actions for the projects table
#[derive(Clone, Debug)]
pub enum ProjectsAction {
    // ========== Queries ==========
    /// Fetch the page for the current parameters
    Load,

    /// Fetch again even if the parameters did not change
    Refetch,

    /// A list request finished
    PageLoaded {
        /// Generation the request was issued under
        generation: u64,
        /// Query that was sent
        query: ProjectListQuery,
        /// Outcome
        result: Result<Paginated<Project>, ApiError>,
    },

    // ========== Table parameters ==========
    /// The search box changed
    SearchChanged(String),

    /// The search box was quiet for the debounce window
    SearchCommitted(String),

    /// The filter form was submitted (or reset, with empty filters)
    FilterSubmitted(ProjectFilters),

    /// The user picked another page or page size
    PaginationChanged(Pagination),

    /// The user sorted a column
    SortChanged {
        /// Sort column, `None` to unsort
        field: Option<String>,
        /// Direction
        order: Option<SortOrder>,
    },

    // ========== Selection ==========
    /// Row selection changed
    SelectionChanged(Vec<String>),

    /// Row selection was cleared
    SelectionCleared,

    // ========== Deletion ==========
    /// Delete one project
    DeleteRequested(String),

    /// Delete every selected project
    DeleteManyRequested,

    /// The server confirmed the delete
    Deleted {
        /// Ids removed
        ids: Vec<String>,
    },

    /// The delete failed; nothing was removed
    DeleteFailed {
        /// Ids that were requested
        ids: Vec<String>,
        /// Failure
        error: ApiError,
    },

    /// The view showed the pending notifications
    NotificationsDismissed,
}
