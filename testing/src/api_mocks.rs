//! In-memory implementations of the API service traits
//!
//! Provides fast, deterministic doubles for reducer and store tests:
//! - [`InMemoryProjectsApi`]: filterable project table with call recording
//! - [`StaticDashboardApi`]: fixed dashboard answer

#![allow(clippy::missing_panics_doc)] // Lock poisoning only follows a panicking test

use admin_console_api::{
    ApiError, ApiFuture, DashboardApi, DashboardData, Paginated, Project, ProjectCounts,
    ProjectListQuery, ProjectMember, ProjectStatus, ProjectUser, ProjectsApi, ResponseCode,
    normalize_ids,
};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// A project with one owner and no optional fields
///
/// Creation times are spaced one minute apart by the numeric suffix of `id`
/// so sorted fixtures stay predictable.
#[must_use]
pub fn project_fixture(id: &str, name: &str, status: ProjectStatus) -> Project {
    let minutes: i64 = id
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .unwrap_or(0);

    Project {
        id: id.to_string(),
        name: name.to_string(),
        status,
        location: None,
        members: vec![ProjectMember {
            user: ProjectUser {
                id: format!("owner-{id}"),
                first_name: "Owner".to_string(),
                last_name: None,
                avatar_image_file_url: None,
            },
        }],
        counts: ProjectCounts::default(),
        description: None,
        image_file_id: None,
        image_file_url: None,
        created_at: DateTime::<Utc>::from_timestamp(minutes * 60, 0).unwrap_or_default(),
    }
}

#[derive(Debug, Default)]
struct Inner {
    projects: Vec<Project>,
    queries: Vec<ProjectListQuery>,
    deleted: Vec<String>,
    delete_many_calls: Vec<Vec<String>>,
    failures: VecDeque<ApiError>,
    latencies: VecDeque<Duration>,
}

/// In-memory project table implementing [`ProjectsApi`]
///
/// Clones share the same table, so a test can keep a handle while the
/// environment owns another.
///
/// # Example
///
/// ```
/// use admin_console_api::{ProjectListQuery, ProjectStatus, ProjectsApi};
/// use admin_console_testing::{InMemoryProjectsApi, project_fixture};
///
/// # async fn example() {
/// let api = InMemoryProjectsApi::with_projects(vec![
///     project_fixture("p1", "Farm", ProjectStatus::Active),
/// ]);
///
/// let page = api.get_paginated(ProjectListQuery::default()).await.unwrap();
/// assert_eq!(page.total, 1);
/// assert_eq!(api.queries().len(), 1);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectsApi {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryProjectsApi {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table seeded with `projects`, in server order
    #[must_use]
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let api = Self::new();
        api.lock().projects = projects;
        api
    }

    /// `count` active projects with ids `p1..=pN`
    #[must_use]
    pub fn seeded(count: usize) -> Self {
        Self::with_projects(
            (1..=count)
                .map(|n| project_fixture(&format!("p{n}"), &format!("Project {n}"), ProjectStatus::Active))
                .collect(),
        )
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make the next call (of any kind) fail with `error`
    pub fn fail_next(&self, error: ApiError) {
        self.lock().failures.push_back(error);
    }

    /// Delay the next list call by `latency`
    ///
    /// Queued latencies apply to list calls in order; calls without one answer
    /// immediately.
    pub fn delay_next_list(&self, latency: Duration) {
        self.lock().latencies.push_back(latency);
    }

    /// Every list query received, in call order
    #[must_use]
    pub fn queries(&self) -> Vec<ProjectListQuery> {
        self.lock().queries.clone()
    }

    /// The most recent list query
    #[must_use]
    pub fn last_query(&self) -> Option<ProjectListQuery> {
        self.lock().queries.last().cloned()
    }

    /// Ids removed through `delete`
    #[must_use]
    pub fn deleted(&self) -> Vec<String> {
        self.lock().deleted.clone()
    }

    /// Id lists passed to `delete_many` that reached the table
    #[must_use]
    pub fn delete_many_calls(&self) -> Vec<Vec<String>> {
        self.lock().delete_many_calls.clone()
    }

    /// Ids currently in the table
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.lock().projects.iter().map(|p| p.id.clone()).collect()
    }

    fn take_failure(&self) -> Result<(), ApiError> {
        self.lock().failures.pop_front().map_or(Ok(()), Err)
    }

    fn not_found(id: &str) -> ApiError {
        ApiError::api(ResponseCode::NotFound, 404, format!("project {id} not found"))
    }

    fn matches(project: &Project, query: &ProjectListQuery) -> bool {
        let search_ok = query.search.as_deref().is_none_or(|search| {
            search.is_empty() || project.name.to_lowercase().contains(&search.to_lowercase())
        });
        let status_ok = query
            .statuses
            .as_deref()
            .is_none_or(|statuses| statuses.is_empty() || statuses.contains(&project.status));
        search_ok && status_ok
    }
}

impl ProjectsApi for InMemoryProjectsApi {
    fn get_paginated(&self, query: ProjectListQuery) -> ApiFuture<'_, Paginated<Project>> {
        Box::pin(async move {
            let latency = {
                let mut inner = self.lock();
                inner.queries.push(query.clone());
                inner.latencies.pop_front()
            };
            if let Some(latency) = latency {
                tokio::time::sleep(latency).await;
            }
            self.take_failure()?;

            let inner = self.lock();
            let matching: Vec<&Project> = inner
                .projects
                .iter()
                .filter(|project| Self::matches(project, &query))
                .collect();

            let skip = usize::try_from(query.skip).unwrap_or(usize::MAX);
            let take = usize::try_from(query.take).unwrap_or(usize::MAX);
            Ok(Paginated {
                total: matching.len() as u64,
                items: matching.into_iter().skip(skip).take(take).cloned().collect(),
            })
        })
    }

    fn delete(&self, id: String) -> ApiFuture<'_, ()> {
        Box::pin(async move {
            self.take_failure()?;

            let mut inner = self.lock();
            let position = inner
                .projects
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| Self::not_found(&id))?;
            inner.projects.remove(position);
            inner.deleted.push(id);
            Ok(())
        })
    }

    fn delete_many(&self, ids: Vec<String>) -> ApiFuture<'_, ()> {
        Box::pin(async move {
            let ids = normalize_ids(ids);
            if ids.is_empty() {
                return Ok(());
            }
            self.take_failure()?;

            let mut inner = self.lock();
            inner.delete_many_calls.push(ids.clone());

            // All-or-nothing
            if let Some(missing) = ids.iter().find(|id| !inner.projects.iter().any(|p| &p.id == *id)) {
                return Err(Self::not_found(missing));
            }
            inner.projects.retain(|p| !ids.contains(&p.id));
            inner.deleted.extend(ids);
            Ok(())
        })
    }
}

/// [`DashboardApi`] answering with a fixed result
#[derive(Debug, Clone)]
pub struct StaticDashboardApi {
    result: Result<DashboardData, ApiError>,
    calls: Arc<Mutex<usize>>,
}

impl StaticDashboardApi {
    /// Always succeed with `data`
    #[must_use]
    pub fn ok(data: DashboardData) -> Self {
        Self {
            result: Ok(data),
            calls: Arc::default(),
        }
    }

    /// Always fail with `error`
    #[must_use]
    pub fn failing(error: ApiError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::default(),
        }
    }

    /// Number of `get_data` calls so far
    #[must_use]
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DashboardApi for StaticDashboardApi {
    fn get_data(&self) -> ApiFuture<'_, DashboardData> {
        *self.calls.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        let result = self.result.clone();
        Box::pin(async move { result })
    }
}
