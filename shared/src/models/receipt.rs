//! Receipt (bill) Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// Receipt entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptData {
    pub id: i64,
    pub order_no: String,
    pub total: Decimal,
    pub payment_method: String,
    pub operator: String,
    pub store: String,
    pub created_at: i64,
}

/// List receipts payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub search_page: PageRequest,
}
