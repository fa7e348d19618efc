//! Member API

use shared::models::{
    CreateMemberRequest, MemberData, MemberListRequest, MemberPurchaseHistoryRequest,
    MemberPurchaseRecord, ModifyMemberRequest, TopUpMemberRequest,
};
use shared::{ApiEnvelope, PageResult};

use crate::endpoints::member;
use crate::error::ClientResult;
use crate::http::BackofficeClient;

impl BackofficeClient {
    /// List members, paginated
    pub async fn list_members(
        &self,
        request: &MemberListRequest,
    ) -> ClientResult<ApiEnvelope<PageResult<MemberData>>> {
        self.post(member::PAGE, request).await
    }

    /// Create a member
    pub async fn create_member(
        &self,
        request: &CreateMemberRequest,
    ) -> ClientResult<ApiEnvelope<()>> {
        self.put(member::CREATE, request).await
    }

    /// Modify a member
    pub async fn modify_member(
        &self,
        request: &ModifyMemberRequest,
    ) -> ClientResult<ApiEnvelope<()>> {
        self.put(member::MODIFY, request).await
    }

    /// Delete members by id
    pub async fn delete_members(&self, ids: &[i64]) -> ClientResult<ApiEnvelope<()>> {
        self.delete_with_body(member::DELETE, &ids).await
    }

    /// Add balance to a member account
    pub async fn top_up_member(
        &self,
        request: &TopUpMemberRequest,
    ) -> ClientResult<ApiEnvelope<()>> {
        self.put(member::TOP_UP, request).await
    }

    /// List a member's purchase history, paginated
    pub async fn list_purchase_history(
        &self,
        request: &MemberPurchaseHistoryRequest,
    ) -> ClientResult<ApiEnvelope<PageResult<MemberPurchaseRecord>>> {
        self.post(member::PURCHASE_HISTORY_PAGE, request).await
    }
}
