//! Receipt (bill) API

use shared::models::{ReceiptData, ReceiptListRequest};
use shared::{ApiEnvelope, PageResult};

use crate::endpoints::receipt;
use crate::error::ClientResult;
use crate::http::BackofficeClient;

impl BackofficeClient {
    /// List receipts, paginated
    pub async fn list_receipts(
        &self,
        request: &ReceiptListRequest,
    ) -> ClientResult<ApiEnvelope<PageResult<ReceiptData>>> {
        self.post(receipt::PAGE, request).await
    }
}
