//! Project resource: model, list query and service

use crate::client::{HttpClient, RequestSpec};
use crate::query::QueryParams;
use crate::types::{ApiFuture, Paginated, SortOrder};
use chrono::{DateTime, Utc};
use serde::de::{self, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// `GET` list endpoint
pub const LIST_PATH: &str = "/api/projects/admin/list";

/// `DELETE` single endpoint (id appended as a path segment)
pub const DELETE_PATH: &str = "/api/projects/admin/delete";

/// `DELETE` bulk endpoint
pub const DELETE_MANY_PATH: &str = "/api/projects/admin/delete-many";

/// Default page size when none is given
pub const DEFAULT_TAKE: u32 = 10;

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectStatus {
    /// `ACTIVE`
    Active,
    /// `INACTIVE`
    Inactive,
}

impl ProjectStatus {
    /// Every status, in display order
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }

    /// Display label (translation key)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            _ => Err(format!("unknown project status {s:?}")),
        }
    }
}

/// A user referenced from a project membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUser {
    /// User id
    pub id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Avatar URL
    #[serde(default)]
    pub avatar_image_file_url: Option<String>,
}

impl ProjectUser {
    /// `first last`, or just `first`
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {last}", self.first_name),
            _ => self.first_name.clone(),
        }
    }

    /// Avatar fallback letter
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.first_name.chars().next()
    }
}

/// Project membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    /// The member
    pub user: ProjectUser,
}

/// Relation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCounts {
    /// Gateways attached to the project
    pub gateways: u64,
}

/// A project as returned by the admin list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique id
    pub id: String,
    /// Display name
    pub name: String,
    /// Lifecycle status
    pub status: ProjectStatus,
    /// Coordinates
    #[serde(default)]
    pub location: Option<(f64, f64)>,
    /// Members; the first one is the owner. Never empty.
    #[serde(deserialize_with = "non_empty_members")]
    pub members: Vec<ProjectMember>,
    /// Relation counters
    #[serde(rename = "_count")]
    pub counts: ProjectCounts,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Cover image file id
    #[serde(default)]
    pub image_file_id: Option<String>,
    /// Cover image URL
    #[serde(default)]
    pub image_file_url: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Number of gateways
    #[must_use]
    pub const fn gateways_count(&self) -> u64 {
        self.counts.gateways
    }

    /// The first member
    #[must_use]
    pub fn owner(&self) -> Option<&ProjectUser> {
        self.members.first().map(|member| &member.user)
    }
}

fn non_empty_members<'de, D>(deserializer: D) -> Result<Vec<ProjectMember>, D::Error>
where
    D: Deserializer<'de>,
{
    let members = Vec::<ProjectMember>::deserialize(deserializer)?;
    if members.is_empty() {
        return Err(de::Error::invalid_length(0, &"at least one member"));
    }
    Ok(members)
}

/// Query sent to the list endpoint
///
/// Built from the table state; `skip = (page - 1) * take`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectListQuery {
    /// Page size, > 0
    pub take: u32,
    /// Rows to skip
    pub skip: u64,
    /// Free text search; an empty string is still sent
    pub search: Option<String>,
    /// Status filter; `None` means no filter
    pub statuses: Option<Vec<ProjectStatus>>,
    /// Sort column
    pub sort: Option<String>,
    /// Sort direction
    pub order: Option<SortOrder>,
}

impl ProjectListQuery {
    /// First page of `take` rows, no filters
    #[must_use]
    pub const fn new(take: u32) -> Self {
        Self {
            take,
            skip: 0,
            search: None,
            statuses: None,
            sort: None,
            order: None,
        }
    }

    /// Query parameters in wire order (`take, skip, filters…, sort, order`)
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("take", self.take)
            .with("skip", self.skip)
            .with_opt("search", self.search.as_deref())
            .with_repeated(
                "statuses",
                self.statuses.iter().flatten().map(|status| status.as_str()),
            )
            .with_opt("sort", self.sort.as_deref())
            .with_opt("order", self.order)
    }
}

impl Default for ProjectListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_TAKE)
    }
}

/// Deduplicate ids, keeping first occurrences in order
#[must_use]
pub fn normalize_ids<I, S>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    ids.into_iter()
        .map(Into::into)
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Project resource
///
/// `delete` of an id that no longer exists fails with the backend's
/// `NOT_FOUND` code. `delete_many` is all-or-nothing; an empty id set is a
/// successful no-op.
pub trait ProjectsApi: Send + Sync {
    /// `GET /api/projects/admin/list`
    fn get_paginated(&self, query: ProjectListQuery) -> ApiFuture<'_, Paginated<Project>>;

    /// `DELETE /api/projects/admin/delete/{id}`
    fn delete(&self, id: String) -> ApiFuture<'_, ()>;

    /// `DELETE /api/projects/admin/delete-many` with body `{ "ids": [...] }`
    fn delete_many(&self, ids: Vec<String>) -> ApiFuture<'_, ()>;
}

/// HTTP implementation of [`ProjectsApi`]
#[derive(Debug, Clone)]
pub struct ProjectService {
    http: HttpClient,
}

impl ProjectService {
    /// Create the service on top of a shared client
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl ProjectsApi for ProjectService {
    fn get_paginated(&self, query: ProjectListQuery) -> ApiFuture<'_, Paginated<Project>> {
        Box::pin(async move {
            let spec = RequestSpec::get(LIST_PATH).with_params(query.to_params());
            let mut page = self.http.request::<Paginated<Project>>(spec).await?.data;

            let take = usize::try_from(query.take).unwrap_or(usize::MAX);
            if page.items.len() > take {
                tracing::warn!(
                    take = query.take,
                    received = page.items.len(),
                    "Server returned more rows than requested, truncating"
                );
                page.items.truncate(take);
            }

            Ok(page)
        })
    }

    fn delete(&self, id: String) -> ApiFuture<'_, ()> {
        Box::pin(async move {
            let spec = RequestSpec::delete(DELETE_PATH).with_segment(id);
            self.http.request::<IgnoredAny>(spec).await?;
            Ok(())
        })
    }

    fn delete_many(&self, ids: Vec<String>) -> ApiFuture<'_, ()> {
        Box::pin(async move {
            let ids = normalize_ids(ids);
            if ids.is_empty() {
                tracing::debug!("delete_many called with no ids, nothing to do");
                return Ok(());
            }

            let spec =
                RequestSpec::delete(DELETE_MANY_PATH).with_json(serde_json::json!({ "ids": ids }));
            self.http.request::<IgnoredAny>(spec).await?;
            Ok(())
        })
    }
}
