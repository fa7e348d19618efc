//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// Order lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

/// One line of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub design_id: i64,
    pub design_name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    pub id: i64,
    pub order_no: String,
    pub status: OrderStatus,
    pub total: Decimal,
    pub lines: Vec<OrderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,
    pub created_at: i64,
}

/// List orders payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub search_page: PageRequest,
}
