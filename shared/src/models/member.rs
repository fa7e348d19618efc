//! Member Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// Member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberData {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub card_number: Option<String>,
    pub balance: Decimal,
    pub points: i64,
    pub created_at: i64,
}

/// List members payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub search_page: PageRequest,
}

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub name: String,
    pub phone: Option<String>,
    pub card_number: Option<String>,
}

/// Modify member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyMemberRequest {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
}

/// Top-up payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUpMemberRequest {
    pub id: i64,
    pub amount: Decimal,
}

/// List purchase history payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPurchaseHistoryRequest {
    pub member_id: i64,
    pub search_page: PageRequest,
}

/// One purchase by a member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPurchaseRecord {
    pub id: i64,
    pub member_id: i64,
    pub order_no: String,
    pub amount: Decimal,
    pub created_at: i64,
}
