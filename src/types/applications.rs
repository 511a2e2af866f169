#![allow(missing_docs)]
//! Patent application types — file wrapper, application metadata, and the
//! bags nested inside them.
//!
//! Every patent-application endpoint (wrapper fetch, search, meta-data,
//! continuity, transactions, assignment, attorney, adjustment,
//! associated-documents, foreign-priority) returns the same envelope —
//! `{count, patentFileWrapperDataBag, requestIdentifier}` — with the slice
//! of each wrapper relevant to the endpoint populated. A single
//! [`PatentFileWrapperResponse`] therefore serves them all; absent fields
//! simply deserialize to `None` or empty bags.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Addresses and parties
// ---------------------------------------------------------------------------

/// A postal correspondence address as it appears across the wrapper bags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrespondenceAddress {
    pub name_line_one_text: Option<String>,
    pub name_line_two_text: Option<String>,
    pub address_line_one_text: Option<String>,
    pub address_line_two_text: Option<String>,
    pub address_line_three_text: Option<String>,
    pub city_name: Option<String>,
    pub geographic_region_name: Option<String>,
    pub geographic_region_code: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub postal_address_category: Option<String>,
}

/// A phone, fax, or email contact entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelecommunicationAddress {
    pub telecommunication_number: Option<String>,
    pub telecom_type_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventor {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country_code: Option<String>,
    pub inventor_name_text: Option<String>,
    #[serde(default)]
    pub correspondence_address_bag: Vec<CorrespondenceAddress>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub applicant_name_text: Option<String>,
    #[serde(default)]
    pub correspondence_address_bag: Vec<CorrespondenceAddress>,
}

// ---------------------------------------------------------------------------
// Application metadata
// ---------------------------------------------------------------------------

/// Entity status of the applicant (small/micro/undiscounted).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityStatusData {
    #[serde(default)]
    pub small_entity_status_indicator: Option<bool>,
    pub business_entity_status_category: Option<String>,
}

/// The `applicationMetaData` block of a file wrapper.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationMetaData {
    pub invention_title: Option<String>,
    pub application_type_code: Option<String>,
    pub application_type_label_name: Option<String>,
    pub application_type_category: Option<String>,
    pub application_status_code: Option<i32>,
    pub application_status_description_text: Option<String>,
    pub application_status_date: Option<NaiveDate>,
    pub application_confirmation_number: Option<i64>,
    pub filing_date: Option<NaiveDate>,
    pub effective_filing_date: Option<NaiveDate>,
    pub grant_date: Option<NaiveDate>,
    pub patent_number: Option<String>,
    pub first_inventor_to_file_indicator: Option<String>,
    pub first_inventor_name: Option<String>,
    pub first_applicant_name: Option<String>,
    pub national_stage_indicator: Option<bool>,
    pub entity_status_data: Option<EntityStatusData>,
    #[serde(default)]
    pub inventor_bag: Vec<Inventor>,
    #[serde(default)]
    pub applicant_bag: Vec<Applicant>,
    #[serde(default)]
    pub cpc_classification_bag: Vec<String>,
    pub uspc_symbol_text: Option<String>,
    /// USPC class. The wire name `class` is a Rust keyword.
    #[serde(rename = "class")]
    pub class_code: Option<String>,
    pub subclass: Option<String>,
    pub customer_number: Option<i64>,
    pub group_art_unit_number: Option<String>,
    pub examiner_name_text: Option<String>,
    pub docket_number: Option<String>,
    pub earliest_publication_number: Option<String>,
    pub earliest_publication_date: Option<NaiveDate>,
    #[serde(default)]
    pub publication_date_bag: Vec<NaiveDate>,
    #[serde(default)]
    pub publication_sequence_number_bag: Vec<String>,
    #[serde(default)]
    pub publication_category_bag: Vec<String>,
}

// ---------------------------------------------------------------------------
// Events and continuity
// ---------------------------------------------------------------------------

/// One transaction-history event of an application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub event_code: Option<String>,
    pub event_description_text: Option<String>,
    pub event_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentContinuity {
    pub parent_application_number_text: Option<String>,
    pub parent_application_filing_date: Option<NaiveDate>,
    pub parent_application_status_code: Option<i32>,
    pub parent_application_status_description_text: Option<String>,
    pub parent_patent_number: Option<String>,
    pub child_application_number_text: Option<String>,
    pub claim_parentage_type_code: Option<String>,
    pub claim_parentage_type_code_description_text: Option<String>,
    pub first_inventor_to_file_indicator: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildContinuity {
    pub child_application_number_text: Option<String>,
    pub child_application_filing_date: Option<NaiveDate>,
    pub child_application_status_code: Option<i32>,
    pub child_application_status_description_text: Option<String>,
    pub parent_application_number_text: Option<String>,
    pub claim_parentage_type_code: Option<String>,
    pub claim_parentage_type_code_description_text: Option<String>,
    pub first_inventor_to_file_indicator: Option<bool>,
}

// ---------------------------------------------------------------------------
// Foreign priority
// ---------------------------------------------------------------------------

/// One foreign priority claim.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignPriority {
    pub ip_office_name: Option<String>,
    pub filing_date: Option<NaiveDate>,
    pub application_number_text: Option<String>,
}

// ---------------------------------------------------------------------------
// Patent term adjustment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentTermAdjustmentHistoryData {
    pub event_description_text: Option<String>,
    pub event_sequence_number: Option<f64>,
    pub originating_event_sequence_number: Option<f64>,
    #[serde(rename = "ptaPTECode")]
    pub pta_pte_code: Option<String>,
    pub event_date: Option<NaiveDate>,
}

/// The `patentTermAdjustmentData` block (35 U.S.C. 154(b) day counts).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentTermAdjustmentData {
    pub a_delay_quantity: Option<i64>,
    pub b_delay_quantity: Option<i64>,
    pub c_delay_quantity: Option<i64>,
    pub applicant_day_delay_quantity: Option<i64>,
    pub ip_office_day_delay_quantity: Option<i64>,
    pub ip_office_adjustment_delay_quantity: Option<i64>,
    pub overlapping_day_quantity: Option<i64>,
    pub adjustment_total_quantity: Option<i64>,
    pub filing_date: Option<NaiveDate>,
    pub grant_date: Option<NaiveDate>,
    #[serde(default)]
    pub patent_term_adjustment_history_data_bag: Vec<PatentTermAdjustmentHistoryData>,
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignor {
    pub assignor_name: Option<String>,
    pub execution_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeAddress {
    pub address_line_one_text: Option<String>,
    pub address_line_two_text: Option<String>,
    pub city_name: Option<String>,
    pub geographic_region_code: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    pub assignee_name_text: Option<String>,
    pub assignee_address: Option<AssigneeAddress>,
}

/// One recorded assignment (reel/frame) of an application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub assignment_received_date: Option<NaiveDate>,
    pub assignment_recorded_date: Option<NaiveDate>,
    pub assignment_mailed_date: Option<NaiveDate>,
    pub reel_number: Option<i64>,
    pub frame_number: Option<i64>,
    pub page_number: Option<i64>,
    pub reel_and_frame_number: Option<String>,
    #[serde(rename = "assignmentDocumentLocationURI")]
    pub assignment_document_location_uri: Option<String>,
    pub conveyance_text: Option<String>,
    #[serde(default)]
    pub assignor_bag: Vec<Assignor>,
    #[serde(default)]
    pub assignee_bag: Vec<Assignee>,
    #[serde(default)]
    pub correspondence_address_bag: Vec<CorrespondenceAddress>,
}

// ---------------------------------------------------------------------------
// Attorneys
// ---------------------------------------------------------------------------

/// A registered practitioner appearing in the power-of-attorney bag.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attorney {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub registration_number: Option<String>,
    pub active_indicator: Option<String>,
    pub registered_practitioner_category: Option<String>,
    #[serde(default)]
    pub attorney_address_bag: Vec<CorrespondenceAddress>,
    #[serde(default)]
    pub telecommunication_address_bag: Vec<TelecommunicationAddress>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerNumberCorrespondenceData {
    pub patron_identifier: Option<i64>,
    #[serde(default)]
    pub power_of_attorney_address_bag: Vec<CorrespondenceAddress>,
}

/// The `recordAttorney` block of a file wrapper.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttorney {
    #[serde(default)]
    pub power_of_attorney_bag: Vec<Attorney>,
    pub customer_number_correspondence_data: Option<CustomerNumberCorrespondenceData>,
}

// ---------------------------------------------------------------------------
// Publication artifacts
// ---------------------------------------------------------------------------

/// Metadata of a published artifact (pre-grant publication or grant),
/// pointing at the bulk-data file it was ingested from.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetaData {
    pub product_identifier: Option<String>,
    pub zip_file_name: Option<String>,
    pub xml_file_name: Option<String>,
    pub file_create_date_time: Option<DateTime<Utc>>,
    #[serde(rename = "fileLocationURI")]
    pub file_location_uri: Option<String>,
}

// ---------------------------------------------------------------------------
// File wrapper and envelope
// ---------------------------------------------------------------------------

/// One patent application's file wrapper.
///
/// Which blocks are populated depends on the endpoint the wrapper came
/// from: the wrapper fetch returns everything, the narrower endpoints
/// (`/transactions`, `/attorney`, …) return only their slice.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentFileWrapper {
    pub application_number_text: Option<String>,
    pub application_meta_data: Option<ApplicationMetaData>,
    #[serde(default)]
    pub event_data_bag: Vec<EventData>,
    #[serde(default)]
    pub parent_continuity_bag: Vec<ParentContinuity>,
    #[serde(default)]
    pub child_continuity_bag: Vec<ChildContinuity>,
    #[serde(default)]
    pub foreign_priority_bag: Vec<ForeignPriority>,
    pub patent_term_adjustment_data: Option<PatentTermAdjustmentData>,
    #[serde(default)]
    pub assignment_bag: Vec<Assignment>,
    pub record_attorney: Option<RecordAttorney>,
    pub pgpub_document_meta_data: Option<DocumentMetaData>,
    pub grant_document_meta_data: Option<DocumentMetaData>,
    #[serde(default)]
    pub correspondence_address_bag: Vec<CorrespondenceAddress>,
    pub last_ingestion_date_time: Option<DateTime<Utc>>,
}

/// Envelope returned by every patent-application endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentFileWrapperResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub patent_file_wrapper_data_bag: Vec<PatentFileWrapper>,
    pub request_identifier: Option<String>,
}

impl PatentFileWrapperResponse {
    /// The first wrapper in the bag, if any.
    pub fn first(&self) -> Option<&PatentFileWrapper> {
        self.patent_file_wrapper_data_bag.first()
    }
}

/// Response of the `search/download` endpoints.
///
/// For JSON downloads this is the search envelope; for CSV downloads the
/// bag is absent and `download_url` points at the generated file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentDataResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub patent_file_wrapper_data_bag: Vec<PatentFileWrapper>,
    pub download_url: Option<String>,
    pub format: Option<String>,
    pub request_identifier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_envelope_deserializes_nested_metadata() {
        let json = serde_json::json!({
            "count": 1,
            "patentFileWrapperDataBag": [{
                "applicationNumberText": "14412875",
                "applicationMetaData": {
                    "inventionTitle": "Widget",
                    "applicationStatusCode": 150,
                    "filingDate": "2014-12-31",
                    "patentNumber": "9022434",
                    "class": "417",
                    "subclass": "222.1",
                    "inventorBag": [{"firstName": "Ada", "lastName": "Lovelace"}],
                    "cpcClassificationBag": ["F04B39/06"]
                },
                "eventDataBag": [
                    {"eventCode": "M327", "eventDescriptionText": "Mail", "eventDate": "2015-01-02"}
                ]
            }],
            "requestIdentifier": "req-1"
        });
        let resp: PatentFileWrapperResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.count, 1);
        let wrapper = resp.first().unwrap();
        assert_eq!(wrapper.application_number_text.as_deref(), Some("14412875"));
        let meta = wrapper.application_meta_data.as_ref().unwrap();
        assert_eq!(meta.application_status_code, Some(150));
        assert_eq!(meta.class_code.as_deref(), Some("417"));
        assert_eq!(meta.inventor_bag[0].first_name.as_deref(), Some("Ada"));
        assert_eq!(
            wrapper.event_data_bag[0].event_date,
            "2015-01-02".parse().ok()
        );
    }

    #[test]
    fn adjustment_slice_deserializes_history_bag() {
        let json = serde_json::json!({
            "count": 1,
            "patentFileWrapperDataBag": [{
                "applicationNumberText": "14412875",
                "patentTermAdjustmentData": {
                    "aDelayQuantity": 50,
                    "bDelayQuantity": 30,
                    "adjustmentTotalQuantity": 100,
                    "patentTermAdjustmentHistoryDataBag": [
                        {"eventDescriptionText": "PTA calc", "ptaPTECode": "A", "eventDate": "2023-01-20"}
                    ]
                }
            }]
        });
        let resp: PatentFileWrapperResponse = serde_json::from_value(json).unwrap();
        let pta = resp.first().unwrap().patent_term_adjustment_data.as_ref().unwrap();
        assert_eq!(pta.a_delay_quantity, Some(50));
        assert_eq!(pta.adjustment_total_quantity, Some(100));
        assert_eq!(
            pta.patent_term_adjustment_history_data_bag[0].pta_pte_code.as_deref(),
            Some("A")
        );
    }

    #[test]
    fn csv_download_response_has_url_and_no_bag() {
        let json = serde_json::json!({
            "count": 10,
            "downloadUrl": "https://example.com/download/file.csv",
            "format": "csv",
            "requestIdentifier": "dl-1"
        });
        let resp: PatentDataResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.count, 10);
        assert!(resp.patent_file_wrapper_data_bag.is_empty());
        assert_eq!(resp.download_url.as_deref(), Some("https://example.com/download/file.csv"));
        assert_eq!(resp.format.as_deref(), Some("csv"));
    }
}
