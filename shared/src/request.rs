//! Request types shared by every paginated list call

use serde::{Deserialize, Serialize};

/// Pagination and ordering parameters.
///
/// `page` is 1-based on the wire; the server answers with a zero-based
/// index in [`PageResult`](crate::PageResult).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Sort direction (true = descending)
    pub sort_descending: bool,
    /// Page number (1-based)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Sort field
    pub sort_field: String,
}

impl PageRequest {
    /// First page with the given size, sorted by creation time descending
    pub fn first(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            ..Self::default()
        }
    }

    /// Same query, pointed at another (1-based) page
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Same query, sorted by another field
    pub fn sorted_by(mut self, field: impl Into<String>, descending: bool) -> Self {
        self.sort_field = field.into();
        self.sort_descending = descending;
        self
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            sort_descending: true,
            page: 1,
            page_size: 20,
            sort_field: "created_at".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let req = PageRequest::first(10).sorted_by("name", false);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["page"], 1);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["sortField"], "name");
        assert_eq!(json["sortDescending"], false);
    }
}
