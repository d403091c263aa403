//! Enterprise (organization) record of the signed-in account.

use crate::error::ApiError;
use crate::net::client::ApiClient;
use crate::net::types::{ApiResponse, EnterprisePayload, EnterpriseUpdate};

const BASE_PATH: &str = "enterprise";

#[derive(Clone)]
pub struct EnterpriseService {
    client: ApiClient,
}

impl EnterpriseService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn get(&self) -> Result<ApiResponse<EnterprisePayload>, ApiError> {
        self.client.get(BASE_PATH).await
    }

    /// Replace the editable enterprise fields. The server checks `update.password`.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the client.
    pub async fn update(&self, update: &EnterpriseUpdate) -> Result<ApiResponse<EnterprisePayload>, ApiError> {
        self.client.put(&format!("{BASE_PATH}/"), update).await
    }
}
