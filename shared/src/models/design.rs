//! Design Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// Design (sellable product) entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignData {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub price: Decimal,
    pub stock: i64,
    pub image_url: Option<String>,
    pub created_at: i64,
}

/// List designs payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub search_page: PageRequest,
}

/// Create design payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDesignRequest {
    pub name: String,
    pub code: String,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Modify design payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyDesignRequest {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
