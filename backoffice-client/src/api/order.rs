//! Order API

use serde::Serialize;

use shared::models::{OrderData, OrderListRequest};
use shared::{ApiEnvelope, PageResult};

use crate::endpoints::order;
use crate::error::ClientResult;
use crate::http::BackofficeClient;

#[derive(Serialize)]
struct DetailQuery {
    id: i64,
}

impl BackofficeClient {
    /// List orders, paginated
    pub async fn list_orders(
        &self,
        request: &OrderListRequest,
    ) -> ClientResult<ApiEnvelope<PageResult<OrderData>>> {
        self.post(order::PAGE, request).await
    }

    /// Fetch one order with its lines
    pub async fn order_detail(&self, id: i64) -> ClientResult<ApiEnvelope<OrderData>> {
        self.get_with_query(order::DETAIL, &DetailQuery { id }).await
    }
}
