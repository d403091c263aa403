//! Department CRUD over `department`.

use serde::Serialize;

use crate::error::ApiError;
use crate::net::client::ApiClient;
use crate::net::types::{ApiResponse, DepartmentsPayload, MessagePayload};

const BASE_PATH: &str = "department";

#[derive(Debug, Serialize)]
struct DepartmentRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    name: &'a str,
    #[serde(rename = "parentId")]
    parent_id: Option<&'a str>,
}

#[derive(Clone)]
pub struct DepartmentService {
    client: ApiClient,
}

impl DepartmentService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn list(&self) -> Result<ApiResponse<DepartmentsPayload>, ApiError> {
        self.client.get(BASE_PATH).await
    }

    /// Create a department; the response carries the refreshed list.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn create(&self, name: &str, parent_id: Option<&str>) -> Result<ApiResponse<DepartmentsPayload>, ApiError> {
        let body = DepartmentRequest { id: None, name, parent_id };
        self.client.post(&format!("{BASE_PATH}/"), &body).await
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn update(
        &self,
        id: &str,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<ApiResponse<DepartmentsPayload>, ApiError> {
        let body = DepartmentRequest { id: Some(id), name, parent_id };
        self.client.put(&format!("{BASE_PATH}/"), &body).await
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn delete(&self, id: &str) -> Result<ApiResponse<MessagePayload>, ApiError> {
        self.client.delete(&format!("{BASE_PATH}/{id}")).await
    }
}
