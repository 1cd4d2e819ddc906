//! Reducer for the projects table.
//!
//! Every parameter change installs a new [`TableParams`] value and refetches
//! when the derived query differs from the one last issued. List requests are
//! numbered; a result is applied only if it belongs to the latest request, so
//! a slow response can never overwrite a newer one.

use super::params::{Pagination, TableParams};
use super::types::{ProjectsAction, ProjectsEnvironment, ProjectsState};
use crate::notification::{DELETED_SUCCESSFULLY, Notification};
use admin_console_api::normalize_ids;
use admin_console_core::{
    SmallVec, async_effect, debounce,
    effect::{Effect, EffectId},
    reducer::Reducer,
    smallvec,
};
use std::sync::Arc;

/// Cancellation id of the in-flight list request
pub const FETCH: EffectId = EffectId::new("projects/fetch");

/// Cancellation id of the pending search commit
pub const SEARCH_DEBOUNCE: EffectId = EffectId::new("projects/search-debounce");

/// Reducer for the projects table
#[derive(Clone, Debug, Default)]
pub struct ProjectsReducer;

impl ProjectsReducer {
    /// Creates a new `ProjectsReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Issue a list request for the current parameters
    fn fetch(
        state: &mut ProjectsState,
        env: &ProjectsEnvironment,
    ) -> SmallVec<[Effect<ProjectsAction>; 4]> {
        state.generation += 1;
        state.loading = true;

        let generation = state.generation;
        let query = state.params.query();
        state.issued_query = Some(query.clone());

        tracing::debug!(generation, take = query.take, skip = query.skip, "Fetching projects");

        let api = Arc::clone(&env.api);
        smallvec![
            async_effect! {
                let result = api.get_paginated(query.clone()).await;
                Some(ProjectsAction::PageLoaded { generation, query, result })
            }
            .cancellable(FETCH)
        ]
    }

    /// Install new parameters, fetching if the query changed
    fn apply_params(
        state: &mut ProjectsState,
        params: TableParams,
        env: &ProjectsEnvironment,
    ) -> SmallVec<[Effect<ProjectsAction>; 4]> {
        state.params = params;

        if state.issued_query.as_ref() == Some(&state.params.query()) {
            tracing::trace!("Query unchanged, not refetching");
            return SmallVec::new();
        }
        Self::fetch(state, env)
    }

    /// Issue a delete for `ids`
    fn delete(
        state: &mut ProjectsState,
        ids: Vec<String>,
        env: &ProjectsEnvironment,
    ) -> SmallVec<[Effect<ProjectsAction>; 4]> {
        state.deleting = true;
        tracing::debug!(count = ids.len(), "Deleting projects");

        let api = Arc::clone(&env.api);
        smallvec![async_effect! {
            let result = match ids.as_slice() {
                [id] => api.delete(id.clone()).await,
                _ => api.delete_many(ids.clone()).await,
            };
            Some(match result {
                Ok(()) => ProjectsAction::Deleted { ids },
                Err(error) => ProjectsAction::DeleteFailed { ids, error },
            })
        }]
    }
}

impl Reducer for ProjectsReducer {
    type State = ProjectsState;
    type Action = ProjectsAction;
    type Environment = ProjectsEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per table interaction
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Queries ==========
            ProjectsAction::Load | ProjectsAction::Refetch => Self::fetch(state, env),

            ProjectsAction::PageLoaded {
                generation,
                query,
                result,
            } => {
                if generation != state.generation {
                    tracing::debug!(
                        generation,
                        latest = state.generation,
                        "Dropping stale page"
                    );
                    return SmallVec::new();
                }

                state.loading = false;
                match result {
                    Ok(page) => {
                        tracing::debug!(
                            generation,
                            rows = page.items.len(),
                            total = page.total,
                            skip = query.skip,
                            "Page loaded"
                        );
                        state.items = page.items;
                        state.total = page.total;
                        state.error = None;
                    },
                    Err(error) => {
                        tracing::warn!(generation, %error, "Failed to load projects");
                        state
                            .notifications
                            .push(Notification::from_error(&error, env.clock.now()));
                        state.error = Some(error);
                    },
                }
                SmallVec::new()
            },

            // ========== Table parameters ==========
            ProjectsAction::SearchChanged(text) => {
                state.search.clone_from(&text);
                smallvec![debounce! {
                    id: SEARCH_DEBOUNCE,
                    duration: env.config.search_debounce,
                    action: ProjectsAction::SearchCommitted(text)
                }]
            },

            ProjectsAction::SearchCommitted(text) => {
                // A newer edit is pending and will commit itself
                if text != state.search {
                    tracing::trace!("Ignoring superseded search commit");
                    return SmallVec::new();
                }
                let params = state.params.with_search(text);
                Self::apply_params(state, params, env)
            },

            ProjectsAction::FilterSubmitted(filters) => {
                let mut params = state.params.with_filters(filters);
                if env.config.reset_page_on_filter {
                    params = params.with_pagination(Pagination::first(
                        state.params.pagination.page_size,
                    ));
                }
                Self::apply_params(state, params, env)
            },

            ProjectsAction::PaginationChanged(pagination) => {
                let params = state.params.with_pagination(pagination);
                Self::apply_params(state, params, env)
            },

            ProjectsAction::SortChanged { field, order } => {
                let params = state.params.with_sort(field, order);
                Self::apply_params(state, params, env)
            },

            // ========== Selection ==========
            ProjectsAction::SelectionChanged(ids) => {
                state.selection = normalize_ids(ids);
                SmallVec::new()
            },

            ProjectsAction::SelectionCleared => {
                state.selection.clear();
                SmallVec::new()
            },

            // ========== Deletion ==========
            ProjectsAction::DeleteRequested(id) => Self::delete(state, vec![id], env),

            ProjectsAction::DeleteManyRequested => {
                if state.selection.is_empty() {
                    tracing::debug!("Nothing selected, skipping delete");
                    return SmallVec::new();
                }
                let ids = state.selection.clone();
                Self::delete(state, ids, env)
            },

            ProjectsAction::Deleted { ids } => {
                tracing::info!(count = ids.len(), "Projects deleted");
                state.deleting = false;

                let before = state.items.len();
                state.items.retain(|project| !ids.contains(&project.id));
                let removed = (before - state.items.len()) as u64;
                state.total = state.total.saturating_sub(removed);
                state.selection.retain(|id| !ids.contains(id));

                state
                    .notifications
                    .push(Notification::success(DELETED_SUCCESSFULLY, env.clock.now()));
                Self::fetch(state, env)
            },

            ProjectsAction::DeleteFailed { ids, error } => {
                tracing::warn!(count = ids.len(), %error, "Delete failed");
                state.deleting = false;
                state
                    .notifications
                    .push(Notification::from_error(&error, env.clock.now()));
                SmallVec::new()
            },

            ProjectsAction::NotificationsDismissed => {
                state.notifications.clear();
                SmallVec::new()
            },
        }
    }
}
