//! Table parameters and the list query derived from them

use super::filters::ProjectFilters;
use admin_console_api::{ProjectListQuery, SortOrder};
use std::num::NonZeroU32;

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(size) => size,
    None => NonZeroU32::MIN,
};

/// Current page and page size, both at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pagination {
    /// 1-based page number
    pub current: NonZeroU32,
    /// Rows per page
    pub page_size: NonZeroU32,
}

impl Pagination {
    /// `None` if either value is zero
    #[must_use]
    pub fn new(current: u32, page_size: u32) -> Option<Self> {
        Some(Self {
            current: NonZeroU32::new(current)?,
            page_size: NonZeroU32::new(page_size)?,
        })
    }

    /// First page of `page_size` rows
    #[must_use]
    pub const fn first(page_size: NonZeroU32) -> Self {
        Self {
            current: NonZeroU32::MIN,
            page_size,
        }
    }

    /// Rows before the current page
    #[must_use]
    pub fn skip(&self) -> u64 {
        u64::from(self.current.get() - 1) * u64::from(self.page_size.get())
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Everything that determines the list query
///
/// Values are replaced wholesale: every `with_*` returns a new value and the
/// reducer swaps it into state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableParams {
    /// Page selection
    pub pagination: Pagination,
    /// Active filters
    pub filters: ProjectFilters,
    /// Sort column
    pub sort_field: Option<String>,
    /// Sort direction
    pub sort_order: Option<SortOrder>,
}

impl TableParams {
    /// First page of `page_size` rows with an empty committed search
    #[must_use]
    pub fn new(page_size: NonZeroU32) -> Self {
        Self {
            pagination: Pagination::first(page_size),
            filters: ProjectFilters::with_search(""),
            sort_field: None,
            sort_order: None,
        }
    }

    /// Same parameters with `filters` replacing the current ones
    #[must_use]
    pub fn with_filters(&self, filters: ProjectFilters) -> Self {
        Self {
            filters,
            ..self.clone()
        }
    }

    /// Same parameters with a new committed search term
    #[must_use]
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            filters: ProjectFilters {
                search: Some(search.into()),
                ..self.filters.clone()
            },
            ..self.clone()
        }
    }

    /// Same parameters on another page
    #[must_use]
    pub fn with_pagination(&self, pagination: Pagination) -> Self {
        Self {
            pagination,
            ..self.clone()
        }
    }

    /// Same parameters with a new sort
    #[must_use]
    pub fn with_sort(&self, field: Option<String>, order: Option<SortOrder>) -> Self {
        Self {
            sort_field: field,
            sort_order: order,
            ..self.clone()
        }
    }

    /// The list query: `take`, `skip`, the filters, then sort and order
    #[must_use]
    pub fn query(&self) -> ProjectListQuery {
        ProjectListQuery {
            take: self.pagination.page_size.get(),
            skip: self.pagination.skip(),
            search: self.filters.search.clone(),
            statuses: self.filters.statuses.clone(),
            sort: self.sort_field.clone(),
            order: self.sort_order,
        }
    }
}

impl Default for TableParams {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
