//! # Admin Console
//!
//! The console's pages as reducers: a dashboard of summary counters and a
//! projects table with search, filters, pagination and deletion.
//!
//! - Table parameters are an explicit state value, replaced on every interaction
//! - Search edits commit after a quiet period (1000 ms by default)
//! - Only the latest list request may update the table
//! - Errors become transient notifications
//!
//! # Quick Start
//!
//! ```no_run
//! use admin_console::projects::{
//!     ProjectsAction, ProjectsEnvironment, ProjectsReducer, ProjectsState,
//! };
//! use admin_console_api::{HttpClient, ProjectService};
//! use admin_console_core::environment::SystemClock;
//! use admin_console_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let http = HttpClient::from_env()?;
//! let env = ProjectsEnvironment::new(Arc::new(ProjectService::new(http)), Arc::new(SystemClock));
//! let store = Store::new(ProjectsState::default(), ProjectsReducer::new(), env);
//!
//! store.send(ProjectsAction::Load).await?.wait().await;
//!
//! let state = store.state(Clone::clone).await;
//! println!("{} of {} projects", state.items.len(), state.total);
//! # Ok(())
//! # }
//! ```

pub mod dashboard;
pub mod filter_form;
pub mod notification;
pub mod projects;

// Re-export commonly used types
pub use dashboard::{DashboardAction, DashboardEnvironment, DashboardReducer, DashboardState};
pub use filter_form::ProjectsFilterForm;
pub use notification::{Notification, NotificationKind};
pub use projects::{
    ProjectFilters, ProjectsAction, ProjectsConfig, ProjectsEnvironment, ProjectsReducer,
    ProjectsState, TableParams,
};
