//! Cash drawer and cash record models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// Open cash drawer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenCashDrawerRequest {
    pub store: String,
}

/// One cash movement at a store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashRecord {
    pub id: i64,
    pub store: String,
    /// Positive for cash in, negative for cash out
    pub amount: Decimal,
    pub reason: String,
    pub operator: String,
    pub created_at: i64,
}

/// List cash records payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashRecordListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    pub search_page: PageRequest,
}

/// Create cash record payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCashRecordRequest {
    pub store: String,
    pub amount: Decimal,
    pub reason: String,
}
