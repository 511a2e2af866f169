#![allow(missing_docs)]
//! Application document types — the `/documents` listing and its per-format
//! download options.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One downloadable rendition of a document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadOption {
    /// Format of this rendition (`PDF`, `MS_WORD`, `XML`).
    pub mime_type_identifier: String,
    /// Absolute URL of the file.
    pub download_url: String,
    pub page_total_quantity: Option<u32>,
}

/// One document in an application's image file wrapper.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub application_number_text: String,
    pub official_date: DateTime<Utc>,
    pub document_identifier: String,
    pub document_code: String,
    pub document_code_description_text: String,
    /// `INCOMING`, `OUTGOING`, or `INTERNAL`.
    pub direction_category: String,
    #[serde(default)]
    pub download_option_bag: Vec<DownloadOption>,
}

/// Response of `GET /{applicationNumberText}/documents`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsResponse {
    #[serde(default)]
    pub document_bag: Vec<Document>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_bag_deserializes_with_download_options() {
        let json = serde_json::json!({
            "documentBag": [{
                "applicationNumberText": "16123456",
                "officialDate": "2020-01-15T00:00:00Z",
                "documentIdentifier": "KB7F9PXDPP",
                "documentCode": "CTNF",
                "documentCodeDescriptionText": "Non-Final Rejection",
                "directionCategory": "OUTGOING",
                "downloadOptionBag": [
                    {"mimeTypeIdentifier": "PDF",
                     "downloadUrl": "https://api.uspto.gov/api/v1/download/KB7F9PXDPP.pdf",
                     "pageTotalQuantity": 12},
                    {"mimeTypeIdentifier": "XML",
                     "downloadUrl": "https://api.uspto.gov/api/v1/download/KB7F9PXDPP.xml"}
                ]
            }]
        });
        let resp: DocumentsResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.document_bag.len(), 1);
        let doc = &resp.document_bag[0];
        assert_eq!(doc.document_code, "CTNF");
        assert_eq!(doc.download_option_bag.len(), 2);
        assert_eq!(doc.download_option_bag[0].page_total_quantity, Some(12));
    }
}
