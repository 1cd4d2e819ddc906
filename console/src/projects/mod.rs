//! Projects table feature
//!
//! A reducer over [`ProjectsState`] covering debounced search, filter submit,
//! pagination, sort, row selection, latest-request-wins fetching and
//! single/bulk deletion.

pub mod filters;
pub mod params;
pub mod reducer;
pub mod types;

pub use filters::{FilterError, FilterField, ProjectFilters};
pub use params::{DEFAULT_PAGE_SIZE, Pagination, TableParams};
pub use reducer::{FETCH, ProjectsReducer, SEARCH_DEBOUNCE};
pub use types::{ProjectsAction, ProjectsConfig, ProjectsEnvironment, ProjectsState};
