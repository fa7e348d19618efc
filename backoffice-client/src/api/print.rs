//! Printing API

use shared::models::PrintReceiptRequest;
use shared::ApiEnvelope;

use crate::endpoints::print;
use crate::error::ClientResult;
use crate::http::BackofficeClient;

impl BackofficeClient {
    /// Send a receipt to the store printer
    pub async fn print_receipt(
        &self,
        request: &PrintReceiptRequest,
    ) -> ClientResult<ApiEnvelope<()>> {
        self.post(print::RECEIPT, request).await
    }
}
