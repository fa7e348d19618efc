//! API Response types
//!
//! Every back-office endpoint answers with the same envelope:
//!
//! ```json
//! {
//!     "code": 200,
//!     "message": "success",
//!     "data": { ... }
//! }
//! ```
//!
//! `code` is a business status, independent of the transport status code.

use serde::{Deserialize, Serialize};

/// Business code signalling success.
pub const CODE_SUCCESS: i32 = 200;

/// Business code signalling an expired or missing session.
pub const CODE_UNAUTHORIZED: i32 = 401;

/// Unified API response envelope.
///
/// A body without a `code` field decodes with `code == 0`, meaning
/// "no business status present" — callers treat that as neither
/// success nor failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Business status (200 = success)
    #[serde(default)]
    pub code: i32,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Response payload (absent on errors and on void operations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Create a successful envelope
    pub fn ok(data: T) -> Self {
        Self {
            code: CODE_SUCCESS,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error envelope
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Whether the business status signals success
    pub fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }
}

impl ApiEnvelope<()> {
    /// Create a successful envelope with no payload
    pub fn ok_empty() -> Self {
        Self {
            code: CODE_SUCCESS,
            message: "success".to_string(),
            data: None,
        }
    }
}

/// One page of a list result.
///
/// The wire uses Spring-style keys: `number` is the zero-based page
/// index, while every [`PageRequest`](crate::PageRequest) is 1-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    /// Zero-based page index
    #[serde(rename = "number")]
    pub page_index: u32,
    /// Items per page
    pub size: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// Total number of items across all pages
    pub total_elements: u64,
    /// Items on this page
    pub content: Vec<T>,
}

impl<T> PageResult<T> {
    /// 1-based page number for display
    pub fn display_page(&self) -> u32 {
        self.page_index + 1
    }

    /// Whether this is the last page
    pub fn is_last(&self) -> bool {
        self.total_pages == 0 || self.page_index + 1 >= self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_code_decodes_as_no_status() {
        let env: ApiEnvelope<String> = serde_json::from_str(r#"{"data":"x"}"#).unwrap();
        assert_eq!(env.code, 0);
        assert!(!env.is_success());
        assert_eq!(env.data.as_deref(), Some("x"));
    }

    #[test]
    fn envelope_round_trips() {
        let json = r#"{"code":404,"message":"not found","data":null}"#;
        let env: ApiEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(env.code, 404);
        assert_eq!(env.message, "not found");
        assert!(env.data.is_none() || env.data == Some(serde_json::Value::Null));
    }

    #[test]
    fn page_result_display_page_is_one_based() {
        let json = r#"{
            "number": 0,
            "size": 20,
            "totalPages": 3,
            "totalElements": 42,
            "content": [1, 2, 3]
        }"#;
        let page: PageResult<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.display_page(), 1);
        assert!(!page.is_last());
        assert_eq!(page.total_elements, 42);
    }
}
