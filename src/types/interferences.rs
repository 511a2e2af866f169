#![allow(missing_docs)]
//! PTAB interference decision types.

use chrono::NaiveDate;
use serde::Deserialize;

/// One PTAB interference decision.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterferenceDecision {
    pub document_identifier: Option<String>,
    pub interference_number: Option<String>,
    pub decision_type: Option<String>,
    pub decision_date: Option<NaiveDate>,
    pub patent_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterferenceDecisionsResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub interference_decision_bag: Vec<InterferenceDecision>,
    pub request_identifier: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterferenceDecisionsDownload {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub interference_decision_bag: Vec<InterferenceDecision>,
    pub download_url: Option<String>,
    pub format: Option<String>,
    pub request_identifier: Option<String>,
}
