//! PTAB trial endpoints — proceedings, decisions, and trial documents.

use crate::client::UsptoClient;
use crate::constants::PTAB_TRIALS_PATH;
use crate::error::Result;
use crate::types::search::{SearchParams, SearchRequest};
use crate::types::trials::{
    TrialDecisionsDownload, TrialDecisionsResponse, TrialDocumentsDownload,
    TrialDocumentsResponse, TrialProceedingsDownload, TrialProceedingsResponse,
};

// ---------------------------------------------------------------------------
// Proceedings
// ---------------------------------------------------------------------------

impl UsptoClient {
    /// Search trial proceedings with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/ptab/trials/proceedings/search`
    pub async fn search_trial_proceedings(
        &self,
        req: &SearchRequest,
    ) -> Result<TrialProceedingsResponse> {
        self.post(&format!("{PTAB_TRIALS_PATH}/proceedings/search"), req)
            .await
    }

    /// Search trial proceedings with query parameters.
    ///
    /// **Endpoint:** `GET /v1/ptab/trials/proceedings/search`
    pub async fn search_trial_proceedings_get(
        &self,
        params: &SearchParams,
    ) -> Result<TrialProceedingsResponse> {
        self.get_query(&format!("{PTAB_TRIALS_PATH}/proceedings/search"), params)
            .await
    }

    /// Download trial proceeding search results with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/ptab/trials/proceedings/search/download`
    pub async fn search_trial_proceedings_download(
        &self,
        req: &SearchRequest,
    ) -> Result<TrialProceedingsDownload> {
        self.post(&format!("{PTAB_TRIALS_PATH}/proceedings/search/download"), req)
            .await
    }

    /// Download trial proceeding search results with query parameters.
    ///
    /// **Endpoint:** `GET /v1/ptab/trials/proceedings/search/download`
    pub async fn search_trial_proceedings_download_get(
        &self,
        params: &SearchParams,
    ) -> Result<TrialProceedingsDownload> {
        self.get_query(
            &format!("{PTAB_TRIALS_PATH}/proceedings/search/download"),
            params,
        )
        .await
    }

    /// Retrieve one trial proceeding.
    ///
    /// **Endpoint:** `GET /v1/ptab/trials/proceedings/{trialNumber}`
    pub async fn get_trial_proceeding(
        &self,
        trial_number: &str,
    ) -> Result<TrialProceedingsResponse> {
        self.get(&format!("{PTAB_TRIALS_PATH}/proceedings/{trial_number}"))
            .await
    }
}

// ---------------------------------------------------------------------------
// Decisions
// ---------------------------------------------------------------------------

impl UsptoClient {
    /// Search trial decisions with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/ptab/trials/decisions/search`
    pub async fn search_trial_decisions(
        &self,
        req: &SearchRequest,
    ) -> Result<TrialDecisionsResponse> {
        self.post(&format!("{PTAB_TRIALS_PATH}/decisions/search"), req)
            .await
    }

    /// Search trial decisions with query parameters.
    ///
    /// **Endpoint:** `GET /v1/ptab/trials/decisions/search`
    pub async fn search_trial_decisions_get(
        &self,
        params: &SearchParams,
    ) -> Result<TrialDecisionsResponse> {
        self.get_query(&format!("{PTAB_TRIALS_PATH}/decisions/search"), params)
            .await
    }

    /// Download trial decision search results with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/ptab/trials/decisions/search/download`
    pub async fn search_trial_decisions_download(
        &self,
        req: &SearchRequest,
    ) -> Result<TrialDecisionsDownload> {
        self.post(&format!("{PTAB_TRIALS_PATH}/decisions/search/download"), req)
            .await
    }

    /// Download trial decision search results with query parameters.
    ///
    /// **Endpoint:** `GET /v1/ptab/trials/decisions/search/download`
    pub async fn search_trial_decisions_download_get(
        &self,
        params: &SearchParams,
    ) -> Result<TrialDecisionsDownload> {
        self.get_query(
            &format!("{PTAB_TRIALS_PATH}/decisions/search/download"),
            params,
        )
        .await
    }

    /// Retrieve one trial decision document.
    ///
    /// **Endpoint:** `GET /v1/ptab/trials/decisions/{documentIdentifier}`
    pub async fn get_trial_decision(
        &self,
        document_identifier: &str,
    ) -> Result<TrialDecisionsResponse> {
        self.get(&format!("{PTAB_TRIALS_PATH}/decisions/{document_identifier}"))
            .await
    }

    /// Retrieve all decisions of one trial.
    ///
    /// **Endpoint:** `GET /v1/ptab/trials/proceedings/{trialNumber}/decisions`
    pub async fn get_trial_decisions_by_trial(
        &self,
        trial_number: &str,
    ) -> Result<TrialDecisionsResponse> {
        self.get(&format!(
            "{PTAB_TRIALS_PATH}/proceedings/{trial_number}/decisions"
        ))
        .await
    }
}

// ---------------------------------------------------------------------------
// Trial documents
// ---------------------------------------------------------------------------

impl UsptoClient {
    /// Search trial documents with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/ptab/trials/documents/search`
    pub async fn search_trial_documents(
        &self,
        req: &SearchRequest,
    ) -> Result<TrialDocumentsResponse> {
        self.post(&format!("{PTAB_TRIALS_PATH}/documents/search"), req)
            .await
    }

    /// Search trial documents with query parameters.
    ///
    /// **Endpoint:** `GET /v1/ptab/trials/documents/search`
    pub async fn search_trial_documents_get(
        &self,
        params: &SearchParams,
    ) -> Result<TrialDocumentsResponse> {
        self.get_query(&format!("{PTAB_TRIALS_PATH}/documents/search"), params)
            .await
    }

    /// Download trial document search results with a JSON payload.
    ///
    /// **Endpoint:** `POST /v1/ptab/trials/documents/search/download`
    pub async fn search_trial_documents_download(
        &self,
        req: &SearchRequest,
    ) -> Result<TrialDocumentsDownload> {
        self.post(&format!("{PTAB_TRIALS_PATH}/documents/search/download"), req)
            .await
    }

    /// Download trial document search results with query parameters.
    ///
    /// **Endpoint:** `GET /v1/ptab/trials/documents/search/download`
    pub async fn search_trial_documents_download_get(
        &self,
        params: &SearchParams,
    ) -> Result<TrialDocumentsDownload> {
        self.get_query(
            &format!("{PTAB_TRIALS_PATH}/documents/search/download"),
            params,
        )
        .await
    }

    /// Retrieve one trial document.
    ///
    /// **Endpoint:** `GET /v1/ptab/trials/documents/{documentIdentifier}`
    pub async fn get_trial_document(
        &self,
        document_identifier: &str,
    ) -> Result<TrialDocumentsResponse> {
        self.get(&format!("{PTAB_TRIALS_PATH}/documents/{document_identifier}"))
            .await
    }

    /// Retrieve all documents filed in one trial.
    ///
    /// **Endpoint:** `GET /v1/ptab/trials/proceedings/{trialNumber}/documents`
    pub async fn get_trial_documents_by_trial(
        &self,
        trial_number: &str,
    ) -> Result<TrialDocumentsResponse> {
        self.get(&format!(
            "{PTAB_TRIALS_PATH}/proceedings/{trial_number}/documents"
        ))
        .await
    }
}
