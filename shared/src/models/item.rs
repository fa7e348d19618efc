//! Item analytics and inventory models

use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// Which end of the sales ranking to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HotColdType {
    Hot,
    Cold,
}

/// List hot/cold items payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotColdListRequest {
    #[serde(rename = "type")]
    pub kind: HotColdType,
    pub search_page: PageRequest,
}

/// One entry in the hot/cold sales ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotColdItem {
    pub design_id: i64,
    pub name: String,
    pub code: String,
    pub sales_count: i64,
}

/// List inventory records payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecordListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_id: Option<i64>,
    pub search_page: PageRequest,
}

/// One stock movement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: i64,
    pub design_id: i64,
    pub design_name: String,
    /// Positive for stock-in, negative for stock-out
    pub quantity: i64,
    pub operator: String,
    pub created_at: i64,
}
