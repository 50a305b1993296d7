//! Pagination metadata for list endpoints.

use serde::{Deserialize, Serialize};

/// Server-computed pagination state for the most recent list fetch.
///
/// The cursor is 1-indexed. `has_next`/`has_prev` come from the server and
/// are trusted as-is; `is_consistent` checks them against the page counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_blogs: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Default for Pagination {
    /// Page 1 of 1, empty, no neighbors. This is the state before any
    /// successful list fetch and the state `clear_blogs` resets to.
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_blogs: 0,
            has_next: false,
            has_prev: false,
        }
    }
}

impl Pagination {
    /// Returns true if the navigation flags agree with the page counters:
    /// `has_next` iff `current_page < total_pages`, `has_prev` iff
    /// `current_page > 1`.
    pub fn is_consistent(&self) -> bool {
        self.has_next == (self.current_page < self.total_pages)
            && self.has_prev == (self.current_page > 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_consistent() {
        let p = Pagination::default();
        assert_eq!(p.current_page, 1);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.total_blogs, 0);
        assert!(p.is_consistent());
    }

    #[test]
    fn test_first_of_three_pages() {
        let p = Pagination {
            current_page: 1,
            total_pages: 3,
            total_blogs: 30,
            has_next: true,
            has_prev: false,
        };
        assert!(p.is_consistent());
    }

    #[test]
    fn test_middle_page_has_both_neighbors() {
        let p = Pagination {
            current_page: 2,
            total_pages: 3,
            total_blogs: 30,
            has_next: true,
            has_prev: true,
        };
        assert!(p.is_consistent());
    }

    #[test]
    fn test_inconsistent_flags_detected() {
        let p = Pagination {
            current_page: 3,
            total_pages: 3,
            total_blogs: 30,
            has_next: true,
            has_prev: true,
        };
        assert!(!p.is_consistent());
    }

    /// Wire format uses camelCase and `totalBlogs`.
    #[test]
    fn test_deserializes_from_wire_format() {
        let p: Pagination = serde_json::from_str(
            r#"{"currentPage":2,"totalPages":5,"totalBlogs":55,"hasNext":true,"hasPrev":true}"#,
        )
        .unwrap();
        assert_eq!(p.current_page, 2);
        assert_eq!(p.total_blogs, 55);
        assert!(p.is_consistent());
    }
}
