//! Page-based pagination utilities.
//!
//! Every list endpoint accepts `page` and `page_size` query parameters and
//! returns a [`PaginatedResponse`] envelope. Rows are ordered by creation
//! time descending.

use serde::{Deserialize, Serialize};

/// Default number of items per page when the client does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on `page_size` to keep list queries cheap.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Pagination parameters parsed from the query string.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PaginationParams {
    /// Normalized 1-based page number. Values below 1 clamp to 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Normalized page size. Values below 1 (or absent) fall back to
    /// [`DEFAULT_PAGE_SIZE`]; values above [`MAX_PAGE_SIZE`] clamp down.
    pub fn page_size(&self) -> i64 {
        let size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size < 1 {
            DEFAULT_PAGE_SIZE
        } else {
            size.min(MAX_PAGE_SIZE)
        }
    }

    /// Row offset for the normalized page.
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.page_size()
    }
}

/// Generic envelope for paginated list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    pub total: i64,
    pub current_page: i64,
    pub total_pages: i64,
}

impl<T> PaginatedResponse<T> {
    /// Build a response envelope from a page of results and the total row
    /// count. `total_pages` is `ceil(total / page_size)`.
    pub fn new(results: Vec<T>, total: i64, params: &PaginationParams) -> Self {
        let page_size = params.page_size();
        let total_pages = (total + page_size - 1) / page_size;
        Self {
            results,
            total,
            current_page: params.page(),
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<i64>, page_size: Option<i64>) -> PaginationParams {
        PaginationParams { page, page_size }
    }

    #[test]
    fn test_defaults() {
        let p = params(None, None);
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_page_below_one_clamps() {
        assert_eq!(params(Some(0), None).page(), 1);
        assert_eq!(params(Some(-5), None).page(), 1);
    }

    #[test]
    fn test_page_size_below_one_uses_default() {
        assert_eq!(params(None, Some(0)).page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(params(None, Some(-1)).page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_size_caps_at_max() {
        assert_eq!(params(None, Some(10_000)).page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_offset() {
        assert_eq!(params(Some(2), Some(10)).offset(), 10);
        assert_eq!(params(Some(3), Some(25)).offset(), 50);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let p = params(Some(2), Some(10));
        let resp = PaginatedResponse::new(vec![1, 2, 3], 25, &p);
        assert_eq!(resp.total, 25);
        assert_eq!(resp.current_page, 2);
        assert_eq!(resp.total_pages, 3);
    }

    #[test]
    fn test_total_pages_exact_division() {
        let p = params(Some(1), Some(10));
        let resp = PaginatedResponse::new(Vec::<i32>::new(), 20, &p);
        assert_eq!(resp.total_pages, 2);
    }

    #[test]
    fn test_total_pages_empty() {
        let p = params(None, None);
        let resp = PaginatedResponse::new(Vec::<i32>::new(), 0, &p);
        assert_eq!(resp.total_pages, 0);
    }

    #[test]
    fn test_serializes_expected_shape() {
        let p = params(Some(1), Some(2));
        let resp = PaginatedResponse::new(vec!["a", "b"], 5, &p);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["results"], serde_json::json!(["a", "b"]));
        assert_eq!(json["total"], 5);
        assert_eq!(json["current_page"], 1);
        assert_eq!(json["total_pages"], 3);
    }
}
