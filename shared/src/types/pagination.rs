//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page_number: u32,

    /// Number of items per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_number: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl Pagination {
    /// Create a new pagination, clamping both values to at least 1
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page_number.saturating_sub(1) as usize) * self.page_size as usize
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.page_number == 1
    }
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Current page number
    pub page_number: u32,

    /// Items per page
    pub page_size: u32,

    /// Number of items on this page
    pub count: usize,

    /// Total number of items across all pages
    pub total: usize,

    /// Total number of pages
    pub total_pages: u32,

    /// Whether a previous page exists
    pub has_previous_page: bool,

    /// Whether a next page exists
    pub has_next_page: bool,

    /// The actual data items
    pub data: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Create a paginated response for one page slice.
    ///
    /// `data` is the slice for the requested page and `total` the size of the
    /// whole (already filtered) collection. The next-page flag is derived from
    /// whether items remain past the end of this slice, so an out-of-range
    /// page yields an empty slice with `has_next_page == false`.
    pub fn new(data: Vec<T>, pagination: Pagination, total: usize) -> Self {
        let end = pagination.offset() + data.len();

        Self {
            page_number: pagination.page_number,
            page_size: pagination.page_size,
            count: data.len(),
            total,
            total_pages: total_pages(total, pagination.page_size),
            has_previous_page: pagination.page_number > 1,
            has_next_page: end < total,
            data,
        }
    }

    /// Transform the data items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            page_number: self.page_number,
            page_size: self.page_size,
            count: self.count,
            total: self.total,
            total_pages: self.total_pages,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
            data: self.data.into_iter().map(f).collect(),
        }
    }

    /// Check if the page is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn total_pages(total: usize, page_size: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((total + page_size as usize - 1) / page_size as usize) as u32
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}
