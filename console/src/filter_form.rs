//! Projects filter form
//!
//! Holds the status multi-select. Submitting yields the typed filters to send
//! with [`ProjectsAction::FilterSubmitted`](crate::projects::ProjectsAction);
//! a cleared selection is sent as an absent field, never as an empty list.

use crate::projects::filters::{FilterError, FilterField, ProjectFilters, normalize_statuses};
use admin_console_api::ProjectStatus;

/// Form state of the projects filter popover
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectsFilterForm {
    statuses: Vec<ProjectStatus>,
}

impl ProjectsFilterForm {
    /// Empty form
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statuses: Vec::new(),
        }
    }

    /// Options of the status select as `(label, value)`
    #[must_use]
    pub fn status_options() -> [(&'static str, &'static str); 2] {
        ProjectStatus::ALL.map(|status| (status.label(), status.as_str()))
    }

    /// Currently selected statuses
    #[must_use]
    pub fn statuses(&self) -> &[ProjectStatus] {
        &self.statuses
    }

    /// Replace the selection
    pub fn set_statuses(&mut self, statuses: Vec<ProjectStatus>) {
        self.statuses = normalize_statuses(statuses).unwrap_or_default();
    }

    /// Select `status` if absent, deselect it otherwise
    pub fn toggle_status(&mut self, status: ProjectStatus) {
        if let Some(position) = self.statuses.iter().position(|s| *s == status) {
            self.statuses.remove(position);
        } else {
            self.statuses.push(status);
        }
    }

    /// Clear the selection (the select's clear button)
    pub fn clear_statuses(&mut self) {
        self.statuses.clear();
    }

    /// Set a field from untyped input
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownField`] for keys the form does not hold
    /// (including `search`, which lives in the search box) and
    /// [`FilterError::UnknownStatus`] for invalid statuses. The form is left
    /// unchanged on error.
    pub fn set_field<S: AsRef<str>>(&mut self, key: &str, values: &[S]) -> Result<(), FilterError> {
        match FilterField::parse(key, values)? {
            FilterField::Statuses(statuses) => {
                self.set_statuses(statuses);
                Ok(())
            },
            FilterField::Search(_) => Err(FilterError::UnknownField(key.to_string())),
        }
    }

    /// Filters for the current form values
    #[must_use]
    pub fn submit(&self) -> ProjectFilters {
        ProjectFilters::from_fields([FilterField::Statuses(self.statuses.clone())])
    }

    /// Clear the form and return the empty filter set
    pub fn reset(&mut self) -> ProjectFilters {
        self.clear_statuses();
        ProjectFilters::default()
    }
}
