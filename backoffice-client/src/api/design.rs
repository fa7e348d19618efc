//! Design API

use reqwest::multipart;

use shared::models::{CreateDesignRequest, DesignData, DesignListRequest, ModifyDesignRequest};
use shared::{ApiEnvelope, PageResult};

use crate::endpoints::design;
use crate::error::ClientResult;
use crate::http::BackofficeClient;

impl BackofficeClient {
    /// List designs, paginated
    pub async fn list_designs(
        &self,
        request: &DesignListRequest,
    ) -> ClientResult<ApiEnvelope<PageResult<DesignData>>> {
        self.post(design::PAGE, request).await
    }

    /// Create a design
    pub async fn create_design(
        &self,
        request: &CreateDesignRequest,
    ) -> ClientResult<ApiEnvelope<()>> {
        self.put(design::CREATE, request).await
    }

    /// Modify a design
    pub async fn modify_design(
        &self,
        request: &ModifyDesignRequest,
    ) -> ClientResult<ApiEnvelope<()>> {
        self.put(design::MODIFY, request).await
    }

    /// Delete designs by id
    pub async fn delete_designs(&self, ids: &[i64]) -> ClientResult<ApiEnvelope<()>> {
        self.delete_with_body(design::DELETE, &ids).await
    }

    /// Upload a design image; the response data is the stored image URL
    pub async fn upload_design_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<ApiEnvelope<String>> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);
        self.post_multipart(design::UPLOAD, form).await
    }
}
