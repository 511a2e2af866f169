//! Status code reference endpoints.

use crate::client::UsptoClient;
use crate::constants::STATUS_CODES_PATH;
use crate::error::Result;
use crate::types::search::{SearchParams, SearchRequest};
use crate::types::status_codes::StatusCodeResponse;

impl UsptoClient {
    /// Search status codes with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/patent/status-codes`
    pub async fn search_status_codes(&self, req: &SearchRequest) -> Result<StatusCodeResponse> {
        self.post(STATUS_CODES_PATH, req).await
    }

    /// Search status codes with query parameters (`q`, `offset`, `limit`).
    ///
    /// **Endpoint:** `GET /v1/patent/status-codes`
    pub async fn search_status_codes_get(
        &self,
        params: &SearchParams,
    ) -> Result<StatusCodeResponse> {
        self.get_query(STATUS_CODES_PATH, params).await
    }
}
