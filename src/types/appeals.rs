#![allow(missing_docs)]
//! PTAB appeal decision types.

use chrono::NaiveDate;
use serde::Deserialize;

/// One PTAB ex parte appeal decision.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealDecision {
    pub document_identifier: Option<String>,
    pub appeal_number: Option<String>,
    pub decision_type: Option<String>,
    pub decision_date: Option<NaiveDate>,
    pub patent_number: Option<String>,
    pub application_number_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealDecisionsResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub appeal_decision_bag: Vec<AppealDecision>,
    pub request_identifier: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealDecisionsDownload {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub appeal_decision_bag: Vec<AppealDecision>,
    pub download_url: Option<String>,
    pub format: Option<String>,
    pub request_identifier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appeal_decision_envelope_deserializes() {
        let json = serde_json::json!({
            "count": 1,
            "appealDecisionBag": [
                {"documentIdentifier": "DOC-001", "appealNumber": "2020-001234",
                 "decisionType": "Final", "decisionDate": "2020-06-15",
                 "patentNumber": "12345678"}
            ],
            "requestIdentifier": "req-11"
        });
        let resp: AppealDecisionsResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.appeal_decision_bag[0].appeal_number.as_deref(), Some("2020-001234"));
    }
}
