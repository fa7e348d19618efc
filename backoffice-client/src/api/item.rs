//! Item analytics and inventory API

use shared::models::{HotColdItem, HotColdListRequest, InventoryRecord, InventoryRecordListRequest};
use shared::{ApiEnvelope, PageResult};

use crate::endpoints::{design, item};
use crate::error::ClientResult;
use crate::http::BackofficeClient;

impl BackofficeClient {
    /// List the hot or cold end of the sales ranking, paginated.
    /// Served by the design domain, which owns the sales counters.
    pub async fn list_hot_cold_items(
        &self,
        request: &HotColdListRequest,
    ) -> ClientResult<ApiEnvelope<PageResult<HotColdItem>>> {
        self.post(design::PAGE, request).await
    }

    /// List stock movements, paginated
    pub async fn list_inventory_records(
        &self,
        request: &InventoryRecordListRequest,
    ) -> ClientResult<ApiEnvelope<PageResult<InventoryRecord>>> {
        self.post(item::INVENTORY_RECORD_PAGE, request).await
    }
}
