//! Pagination types for list endpoints.
//!
//! Pages are 0-indexed on both the table state and the wire, matching the
//! table contract that a page-size change resets to page zero.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (0-indexed).
    #[serde(default)]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_per_page() -> u32 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: default_per_page(),
        }
    }
}

impl PageRequest {
    /// Offset of the first item on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.per_page)
    }

    /// Maximum number of items on this page.
    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items in the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number (0-indexed).
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages (at least 1).
    pub total_pages: u32,
}

impl PageMeta {
    /// Computes metadata for a page over `total` items.
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let per = u64::from(per_page.max(1));
        let total_pages = ((total + per - 1) / per).max(1) as u32;
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_based() {
        let request = PageRequest {
            page: 0,
            per_page: 25,
        };
        assert_eq!(request.offset(), 0);
        assert_eq!(request.limit(), 25);

        let request = PageRequest {
            page: 3,
            per_page: 25,
        };
        assert_eq!(request.offset(), 75);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PageMeta::new(0, 10, 0).total_pages, 1);
        assert_eq!(PageMeta::new(0, 10, 10).total_pages, 1);
        assert_eq!(PageMeta::new(0, 10, 11).total_pages, 2);
        assert_eq!(PageMeta::new(0, 10, 99).total_pages, 10);
    }

    #[test]
    fn request_defaults() {
        let request = PageRequest::default();
        assert_eq!(request.page, 0);
        assert_eq!(request.per_page, 10);
    }
}
