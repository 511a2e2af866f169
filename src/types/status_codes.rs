#![allow(missing_docs)]
//! Status code reference types.

use serde::Deserialize;

/// One application status code and its description.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCode {
    pub application_status_code: Option<i32>,
    pub application_status_description_text: Option<String>,
}

/// Response of the status-code search endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCodeResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub status_code_data_bag: Vec<StatusCode>,
    pub request_identifier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_envelope_deserializes() {
        let json = serde_json::json!({
            "count": 2,
            "statusCodeDataBag": [
                {"applicationStatusCode": 19,
                 "applicationStatusDescriptionText": "Application Undergoing Preexam Processing"},
                {"applicationStatusCode": 150,
                 "applicationStatusDescriptionText": "Patented Case"}
            ],
            "requestIdentifier": "req-42"
        });
        let resp: StatusCodeResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.count, 2);
        assert_eq!(resp.status_code_data_bag[1].application_status_code, Some(150));
        assert_eq!(resp.request_identifier.as_deref(), Some("req-42"));
    }
}
