//! # Admin Console API Client
//!
//! Typed client for the admin backend: an HTTP adapter, the response code
//! taxonomy, and one service per resource.
//!
//! ## Example
//!
//! ```no_run
//! use admin_console_api::{HttpClient, ProjectListQuery, ProjectService, ProjectsApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Base URL and token from ADMIN_API_BASE_URL / ADMIN_API_TOKEN
//!     let http = HttpClient::from_env()?;
//!     let projects = ProjectService::new(http);
//!
//!     let page = projects.get_paginated(ProjectListQuery::default()).await?;
//!     println!("{} of {} projects", page.items.len(), page.total);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - Repeated-key array query serialization (`statuses=A&statuses=B`)
//! - Error envelopes normalized to [`ApiError`] with a [`ResponseCode`]
//! - Service traits ([`DashboardApi`], [`ProjectsApi`]) for dependency injection

pub mod client;
pub mod code;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod projects;
pub mod query;
pub mod types;

// Re-export main types for convenience
pub use client::{ApiResponse, HttpClient, RequestSpec};
pub use code::ResponseCode;
pub use config::ApiConfig;
pub use dashboard::{DashboardApi, DashboardData, DashboardService};
pub use error::ApiError;
pub use projects::{
    Project, ProjectCounts, ProjectListQuery, ProjectMember, ProjectService, ProjectStatus,
    ProjectUser, ProjectsApi, normalize_ids,
};
pub use query::QueryParams;
pub use types::{ApiFuture, Paginated, SortOrder};
