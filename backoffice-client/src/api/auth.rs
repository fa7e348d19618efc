//! Auth and user administration API

use shared::models::{CreateUserRequest, LoginRequest, ModifyUserRequest, UserData, UserListRequest};
use shared::{ApiEnvelope, PageResult};

use crate::endpoints::{auth, user};
use crate::error::ClientResult;
use crate::http::BackofficeClient;

impl BackofficeClient {
    /// Log in. On success the returned token becomes the active session
    /// and the unauthorized latch is re-armed.
    pub async fn login(&self, name: &str, password: &str) -> ClientResult<ApiEnvelope<String>> {
        let request = LoginRequest {
            name: name.to_string(),
            password: password.to_string(),
        };

        let envelope: ApiEnvelope<String> = self.post(auth::LOGIN, &request).await?;
        if envelope.is_success() {
            if let Some(token) = &envelope.data {
                self.session().set(token.clone())?;
                self.reset_unauthorized_latch();
                tracing::info!(user = name, "Logged in");
            }
        }
        Ok(envelope)
    }

    /// Log out and drop the active session token
    pub async fn logout(&self) -> ClientResult<ApiEnvelope<()>> {
        let envelope: ApiEnvelope<()> = self.post(auth::LOGOUT, &()).await?;
        self.session().clear()?;
        Ok(envelope)
    }

    /// List users, paginated
    pub async fn list_users(
        &self,
        request: &UserListRequest,
    ) -> ClientResult<ApiEnvelope<PageResult<UserData>>> {
        self.post(user::PAGE, request).await
    }

    /// Create a user
    pub async fn create_user(
        &self,
        request: &CreateUserRequest,
    ) -> ClientResult<ApiEnvelope<()>> {
        self.put(user::CREATE, request).await
    }

    /// Modify a user
    pub async fn modify_user(
        &self,
        request: &ModifyUserRequest,
    ) -> ClientResult<ApiEnvelope<()>> {
        self.put(user::MODIFY, request).await
    }

    /// Delete users by id
    pub async fn delete_users(&self, ids: &[i64]) -> ClientResult<ApiEnvelope<()>> {
        self.delete_with_body(user::DELETE, &ids).await
    }
}
