//! Receipt printing models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One printed line on a receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// Print receipt payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintReceiptRequest {
    pub store: String,
    pub order_no: String,
    pub lines: Vec<ReceiptLine>,
    pub total: Decimal,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<Decimal>,
}
