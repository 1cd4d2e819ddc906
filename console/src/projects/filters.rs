//! Typed project filters
//!
//! Untyped key/value input (query strings, CLI flags, form payloads) is parsed
//! at the boundary into [`FilterField`] values. Unknown keys and unknown status
//! strings are rejected here and never reach the network.

use admin_console_api::ProjectStatus;
use thiserror::Error;

/// Validation failures for filter input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Key is not a project filter
    #[error("Unknown filter field: {0}")]
    UnknownField(String),

    /// Value is not a project status
    #[error("Unknown project status: {0}")]
    UnknownStatus(String),

    /// Field takes exactly one value
    #[error("Filter field {field} takes a single value, got {count}")]
    ExpectedSingleValue {
        /// Offending field
        field: &'static str,
        /// Number of values supplied
        count: usize,
    },
}

/// One filter field with its typed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterField {
    /// Free text search
    Search(String),
    /// Status multi-select; empty means no filter
    Statuses(Vec<ProjectStatus>),
}

impl FilterField {
    /// Wire/form key of the field
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Search(_) => "search",
            Self::Statuses(_) => "statuses",
        }
    }

    /// Parse an untyped `key = values` entry
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] for unknown keys, unknown statuses, or several
    /// values on a single-valued field.
    pub fn parse<S: AsRef<str>>(key: &str, values: &[S]) -> Result<Self, FilterError> {
        match key {
            "search" => match values {
                [] => Ok(Self::Search(String::new())),
                [value] => Ok(Self::Search(value.as_ref().to_string())),
                _ => Err(FilterError::ExpectedSingleValue {
                    field: "search",
                    count: values.len(),
                }),
            },
            "statuses" => values
                .iter()
                .map(|value| {
                    let value = value.as_ref();
                    value
                        .parse::<ProjectStatus>()
                        .map_err(|_| FilterError::UnknownStatus(value.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Statuses),
            other => Err(FilterError::UnknownField(other.to_string())),
        }
    }
}

/// The filter part of the table parameters
///
/// Only set fields are sent. A status filter is either absent or non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProjectFilters {
    /// Committed search text
    pub search: Option<String>,
    /// Selected statuses
    pub statuses: Option<Vec<ProjectStatus>>,
}

impl ProjectFilters {
    /// Filters with only a search term
    #[must_use]
    pub fn with_search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            statuses: None,
        }
    }

    /// Whether no field is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.search.is_none() && self.statuses.is_none()
    }

    /// Set one field
    pub fn apply(&mut self, field: FilterField) {
        match field {
            FilterField::Search(search) => self.search = Some(search),
            FilterField::Statuses(statuses) => self.statuses = normalize_statuses(statuses),
        }
    }

    /// Build filters from typed fields; later fields win
    #[must_use]
    pub fn from_fields(fields: impl IntoIterator<Item = FilterField>) -> Self {
        let mut filters = Self::default();
        for field in fields {
            filters.apply(field);
        }
        filters
    }

    /// Parse untyped `(key, values)` entries
    ///
    /// # Errors
    ///
    /// Returns the first [`FilterError`] encountered.
    pub fn parse<'a, I, S>(entries: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (&'a str, &'a [S])>,
        S: AsRef<str> + 'a,
    {
        entries
            .into_iter()
            .map(|(key, values)| FilterField::parse(key, values))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_fields)
    }
}

/// Deduplicate, keeping first occurrences; empty becomes absent
pub(crate) fn normalize_statuses(statuses: Vec<ProjectStatus>) -> Option<Vec<ProjectStatus>> {
    let mut unique = Vec::with_capacity(statuses.len());
    for status in statuses {
        if !unique.contains(&status) {
            unique.push(status);
        }
    }
    (!unique.is_empty()).then_some(unique)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_fields() {
        let statuses = ["INACTIVE", "ACTIVE"];
        let search = ["farm"];
        let filters = ProjectFilters::parse([
            ("statuses", &statuses[..]),
            ("search", &search[..]),
        ])
        .unwrap();

        assert_eq!(filters.search.as_deref(), Some("farm"));
        assert_eq!(
            filters.statuses,
            Some(vec![ProjectStatus::Inactive, ProjectStatus::Active])
        );
    }

    #[test]
    fn rejects_unknown_key() {
        let error = FilterField::parse("roles", &["ADMIN"]).unwrap_err();
        assert_eq!(error, FilterError::UnknownField("roles".to_string()));
    }

    #[test]
    fn rejects_unknown_status() {
        let error = FilterField::parse("statuses", &["ACTIVE", "archived"]).unwrap_err();
        assert_eq!(error, FilterError::UnknownStatus("archived".to_string()));
        assert_eq!(error.to_string(), "Unknown project status: archived");
    }

    #[test]
    fn rejects_several_search_terms() {
        assert!(matches!(
            FilterField::parse("search", &["a", "b"]),
            Err(FilterError::ExpectedSingleValue { field: "search", count: 2 })
        ));
    }

    #[test]
    fn empty_status_selection_is_absent() {
        let filters = ProjectFilters::from_fields([FilterField::Statuses(Vec::new())]);
        assert_eq!(filters.statuses, None);
        assert!(filters.is_empty());
    }

    #[test]
    fn duplicate_statuses_collapse() {
        let filters = ProjectFilters::from_fields([FilterField::Statuses(vec![
            ProjectStatus::Active,
            ProjectStatus::Active,
        ])]);
        assert_eq!(filters.statuses, Some(vec![ProjectStatus::Active]));
    }
}
