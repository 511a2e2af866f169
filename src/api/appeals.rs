//! PTAB appeal decision endpoints.

use crate::client::UsptoClient;
use crate::constants::PTAB_APPEALS_PATH;
use crate::error::Result;
use crate::types::appeals::{AppealDecisionsDownload, AppealDecisionsResponse};
use crate::types::search::{SearchParams, SearchRequest};

impl UsptoClient {
    /// Search appeal decisions with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/ptab/appeals/decisions/search`
    pub async fn search_appeal_decisions(
        &self,
        req: &SearchRequest,
    ) -> Result<AppealDecisionsResponse> {
        self.post(&format!("{PTAB_APPEALS_PATH}/decisions/search"), req)
            .await
    }

    /// Search appeal decisions with query parameters.
    ///
    /// **Endpoint:** `GET /v1/ptab/appeals/decisions/search`
    pub async fn search_appeal_decisions_get(
        &self,
        params: &SearchParams,
    ) -> Result<AppealDecisionsResponse> {
        self.get_query(&format!("{PTAB_APPEALS_PATH}/decisions/search"), params)
            .await
    }

    /// Download appeal decision search results with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/ptab/appeals/decisions/search/download`
    pub async fn search_appeal_decisions_download(
        &self,
        req: &SearchRequest,
    ) -> Result<AppealDecisionsDownload> {
        self.post(&format!("{PTAB_APPEALS_PATH}/decisions/search/download"), req)
            .await
    }

    /// Download appeal decision search results with query parameters.
    ///
    /// **Endpoint:** `GET /v1/ptab/appeals/decisions/search/download`
    pub async fn search_appeal_decisions_download_get(
        &self,
        params: &SearchParams,
    ) -> Result<AppealDecisionsDownload> {
        self.get_query(
            &format!("{PTAB_APPEALS_PATH}/decisions/search/download"),
            params,
        )
        .await
    }

    /// Retrieve one appeal decision document.
    ///
    /// **Endpoint:** `GET /v1/ptab/appeals/decisions/{documentIdentifier}`
    pub async fn get_appeal_decision(
        &self,
        document_identifier: &str,
    ) -> Result<AppealDecisionsResponse> {
        self.get(&format!("{PTAB_APPEALS_PATH}/decisions/{document_identifier}"))
            .await
    }

    /// Retrieve all decisions of one appeal.
    ///
    /// **Endpoint:** `GET /v1/ptab/appeals/{appealNumber}/decisions`
    pub async fn get_appeal_decisions_by_appeal(
        &self,
        appeal_number: &str,
    ) -> Result<AppealDecisionsResponse> {
        self.get(&format!("{PTAB_APPEALS_PATH}/{appeal_number}/decisions"))
            .await
    }
}
