//! Petition decision endpoints.

use crate::client::UsptoClient;
use crate::constants::PETITION_DECISIONS_PATH;
use crate::error::Result;
use crate::types::petitions::{PetitionDecisionsDownload, PetitionDecisionsResponse};
use crate::types::search::{SearchParams, SearchRequest};

impl UsptoClient {
    /// Search petition decisions with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/petitions/decisions/search`
    pub async fn search_petition_decisions(
        &self,
        req: &SearchRequest,
    ) -> Result<PetitionDecisionsResponse> {
        self.post(&format!("{PETITION_DECISIONS_PATH}/search"), req)
            .await
    }

    /// Search petition decisions with query parameters.
    ///
    /// **Endpoint:** `GET /v1/petitions/decisions/search`
    pub async fn search_petition_decisions_get(
        &self,
        params: &SearchParams,
    ) -> Result<PetitionDecisionsResponse> {
        self.get_query(&format!("{PETITION_DECISIONS_PATH}/search"), params)
            .await
    }

    /// Download petition decision search results with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/petitions/decisions/search/download`
    pub async fn search_petition_decisions_download(
        &self,
        req: &SearchRequest,
    ) -> Result<PetitionDecisionsDownload> {
        self.post(&format!("{PETITION_DECISIONS_PATH}/search/download"), req)
            .await
    }

    /// Download petition decision search results with query parameters.
    ///
    /// **Endpoint:** `GET /v1/petitions/decisions/search/download`
    pub async fn search_petition_decisions_download_get(
        &self,
        params: &SearchParams,
    ) -> Result<PetitionDecisionsDownload> {
        self.get_query(&format!("{PETITION_DECISIONS_PATH}/search/download"), params)
            .await
    }

    /// Retrieve one petition decision record.
    ///
    /// **Endpoint:** `GET /v1/petitions/decisions/{petitionDecisionRecordIdentifier}`
    pub async fn get_petition_decision(
        &self,
        record_identifier: &str,
    ) -> Result<PetitionDecisionsResponse> {
        self.get(&format!("{PETITION_DECISIONS_PATH}/{record_identifier}"))
            .await
    }
}
