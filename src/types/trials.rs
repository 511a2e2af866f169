#![allow(missing_docs)]
//! PTAB trial types — proceedings, decisions, and trial documents.

use chrono::NaiveDate;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Proceedings
// ---------------------------------------------------------------------------

/// One PTAB trial proceeding (IPR, PGR, CBM, or DER).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialProceeding {
    pub trial_number: Option<String>,
    pub trial_type: Option<String>,
    pub proceeding_status: Option<String>,
    pub patent_number: Option<String>,
    pub application_number_text: Option<String>,
    pub filing_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialProceedingsResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub trial_proceeding_bag: Vec<TrialProceeding>,
    pub request_identifier: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialProceedingsDownload {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub trial_proceeding_bag: Vec<TrialProceeding>,
    pub download_url: Option<String>,
    pub format: Option<String>,
    pub request_identifier: Option<String>,
}

// ---------------------------------------------------------------------------
// Decisions
// ---------------------------------------------------------------------------

/// One PTAB trial decision document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialDecision {
    pub document_identifier: Option<String>,
    pub trial_number: Option<String>,
    pub trial_type: Option<String>,
    pub decision_type: Option<String>,
    pub decision_date: Option<NaiveDate>,
    pub patent_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialDecisionsResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub trial_decision_bag: Vec<TrialDecision>,
    pub request_identifier: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialDecisionsDownload {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub trial_decision_bag: Vec<TrialDecision>,
    pub download_url: Option<String>,
    pub format: Option<String>,
    pub request_identifier: Option<String>,
}

// ---------------------------------------------------------------------------
// Trial documents
// ---------------------------------------------------------------------------

/// One document filed in a PTAB trial.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialDocument {
    pub document_identifier: Option<String>,
    pub trial_number: Option<String>,
    pub trial_type: Option<String>,
    pub document_title: Option<String>,
    pub document_type: Option<String>,
    pub document_date: Option<NaiveDate>,
    pub filing_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialDocumentsResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub trial_document_bag: Vec<TrialDocument>,
    pub request_identifier: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialDocumentsDownload {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub trial_document_bag: Vec<TrialDocument>,
    pub download_url: Option<String>,
    pub format: Option<String>,
    pub request_identifier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proceeding_envelope_deserializes() {
        let json = serde_json::json!({
            "count": 2,
            "trialProceedingBag": [
                {"trialNumber": "IPR2020-00001", "trialType": "IPR",
                 "proceedingStatus": "Instituted", "patentNumber": "12345678",
                 "filingDate": "2020-01-15"},
                {"trialNumber": "IPR2020-00002", "trialType": "IPR",
                 "proceedingStatus": "Terminated"}
            ],
            "requestIdentifier": "req-10"
        });
        let resp: TrialProceedingsResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.count, 2);
        assert_eq!(resp.trial_proceeding_bag[0].trial_number.as_deref(), Some("IPR2020-00001"));
        assert_eq!(resp.trial_proceeding_bag[0].filing_date, "2020-01-15".parse().ok());
    }

    #[test]
    fn decision_and_document_bags_deserialize() {
        let decisions = serde_json::json!({
            "count": 1,
            "trialDecisionBag": [
                {"documentIdentifier": "DOC-001", "trialNumber": "IPR2020-00001",
                 "trialType": "IPR", "decisionType": "Final", "decisionDate": "2020-06-15"}
            ]
        });
        let resp: TrialDecisionsResponse = serde_json::from_value(decisions).unwrap();
        assert_eq!(resp.trial_decision_bag[0].decision_type.as_deref(), Some("Final"));

        let documents = serde_json::json!({
            "count": 1,
            "trialDocumentBag": [
                {"documentIdentifier": "DOC-001", "trialNumber": "IPR2020-00001",
                 "documentTitle": "Petition for Inter Partes Review",
                 "documentType": "Petition", "documentDate": "2020-01-15"}
            ]
        });
        let resp: TrialDocumentsResponse = serde_json::from_value(documents).unwrap();
        assert_eq!(resp.trial_document_bag[0].document_type.as_deref(), Some("Petition"));
    }
}
