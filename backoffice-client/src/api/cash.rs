//! Cash drawer and cash record API

use shared::models::{
    CashRecord, CashRecordListRequest, CreateCashRecordRequest, OpenCashDrawerRequest,
};
use shared::{ApiEnvelope, PageResult};

use crate::endpoints::cash;
use crate::error::ClientResult;
use crate::http::BackofficeClient;

impl BackofficeClient {
    /// Pop the cash drawer at a store
    pub async fn open_cash_drawer(&self, store: &str) -> ClientResult<ApiEnvelope<()>> {
        let request = OpenCashDrawerRequest {
            store: store.to_string(),
        };
        self.put(cash::DRAWER_OPEN, &request).await
    }

    /// List cash movements, paginated
    pub async fn list_cash_records(
        &self,
        request: &CashRecordListRequest,
    ) -> ClientResult<ApiEnvelope<PageResult<CashRecord>>> {
        self.post(cash::RECORD_PAGE, request).await
    }

    /// Record a manual cash movement
    pub async fn create_cash_record(
        &self,
        request: &CreateCashRecordRequest,
    ) -> ClientResult<ApiEnvelope<()>> {
        self.put(cash::RECORD_CREATE, request).await
    }
}
