#![allow(missing_docs)]
//! Petition decision types.

use chrono::NaiveDate;
use serde::Deserialize;

/// A document attached to a petition decision record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetitionDocument {
    pub document_id: Option<String>,
    pub document_type: Option<String>,
}

/// One petition decision record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetitionDecision {
    pub petition_decision_record_identifier: Option<String>,
    pub patent_number: Option<String>,
    pub application_number_text: Option<String>,
    pub first_applicant_name: Option<String>,
    pub decision_type_code_description_text: Option<String>,
    pub petition_mail_date: Option<NaiveDate>,
    #[serde(default)]
    pub documents: Vec<PetitionDocument>,
}

/// Response of the petition decision search and fetch endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetitionDecisionsResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub petition_decision_bag: Vec<PetitionDecision>,
    pub request_identifier: Option<String>,
}

/// Response of the petition decision `search/download` endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetitionDecisionsDownload {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub petition_decision_bag: Vec<PetitionDecision>,
    pub download_url: Option<String>,
    pub format: Option<String>,
    pub request_identifier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_record_deserializes() {
        let json = serde_json::json!({
            "count": 1,
            "petitionDecisionBag": [{
                "petitionDecisionRecordIdentifier": "6779f1be-0f3b-5775-b9d3-dcfdb83171c3",
                "patentNumber": "12345678",
                "applicationNumberText": "11512156",
                "firstApplicantName": "Test Applicant",
                "decisionTypeCodeDescriptionText": "Denied",
                "petitionMailDate": "2023-01-01",
                "documents": [{"documentId": "doc1", "documentType": "Decision"}]
            }],
            "requestIdentifier": "req-9"
        });
        let resp: PetitionDecisionsResponse = serde_json::from_value(json).unwrap();
        let decision = &resp.petition_decision_bag[0];
        assert_eq!(
            decision.petition_decision_record_identifier.as_deref(),
            Some("6779f1be-0f3b-5775-b9d3-dcfdb83171c3")
        );
        assert_eq!(decision.decision_type_code_description_text.as_deref(), Some("Denied"));
        assert_eq!(decision.documents[0].document_id.as_deref(), Some("doc1"));
    }
}
