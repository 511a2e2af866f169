//! PTAB interference decision endpoints.

use crate::client::UsptoClient;
use crate::constants::PTAB_INTERFERENCES_PATH;
use crate::error::Result;
use crate::types::interferences::{InterferenceDecisionsDownload, InterferenceDecisionsResponse};
use crate::types::search::{SearchParams, SearchRequest};

impl UsptoClient {
    /// Search interference decisions with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/ptab/interferences/decisions/search`
    pub async fn search_interference_decisions(
        &self,
        req: &SearchRequest,
    ) -> Result<InterferenceDecisionsResponse> {
        self.post(&format!("{PTAB_INTERFERENCES_PATH}/decisions/search"), req)
            .await
    }

    /// Search interference decisions with query parameters.
    ///
    /// **Endpoint:** `GET /v1/ptab/interferences/decisions/search`
    pub async fn search_interference_decisions_get(
        &self,
        params: &SearchParams,
    ) -> Result<InterferenceDecisionsResponse> {
        self.get_query(&format!("{PTAB_INTERFERENCES_PATH}/decisions/search"), params)
            .await
    }

    /// Download interference decision search results with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/ptab/interferences/decisions/search/download`
    pub async fn search_interference_decisions_download(
        &self,
        req: &SearchRequest,
    ) -> Result<InterferenceDecisionsDownload> {
        self.post(
            &format!("{PTAB_INTERFERENCES_PATH}/decisions/search/download"),
            req,
        )
        .await
    }

    /// Download interference decision search results with query parameters.
    ///
    /// **Endpoint:** `GET /v1/ptab/interferences/decisions/search/download`
    pub async fn search_interference_decisions_download_get(
        &self,
        params: &SearchParams,
    ) -> Result<InterferenceDecisionsDownload> {
        self.get_query(
            &format!("{PTAB_INTERFERENCES_PATH}/decisions/search/download"),
            params,
        )
        .await
    }

    /// Retrieve one interference decision document.
    ///
    /// **Endpoint:** `GET /v1/ptab/interferences/decisions/{documentIdentifier}`
    pub async fn get_interference_decision(
        &self,
        document_identifier: &str,
    ) -> Result<InterferenceDecisionsResponse> {
        self.get(&format!(
            "{PTAB_INTERFERENCES_PATH}/decisions/{document_identifier}"
        ))
        .await
    }

    /// Retrieve all decisions of one interference.
    ///
    /// **Endpoint:** `GET /v1/ptab/interferences/{interferenceNumber}/decisions`
    pub async fn get_interference_decisions_by_interference(
        &self,
        interference_number: &str,
    ) -> Result<InterferenceDecisionsResponse> {
        self.get(&format!(
            "{PTAB_INTERFERENCES_PATH}/{interference_number}/decisions"
        ))
        .await
    }
}
