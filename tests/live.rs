//! Integration tests against the real USPTO Open Data Portal
//! (`https://api.uspto.gov/api`).
//!
//! # Running
//!
//! These tests require a real ODP API key. Set the following environment
//! variable before running:
//!
//! ```sh
//! export USPTO_API_KEY="your-api-key"
//! cargo test --test live -- --nocapture
//! ```
//!
//! Without it, every test is silently skipped.
//!
//! # What is tested
//!
//! - **File wrapper** — fetch by application number, validates key &
//!   deserialization
//! - **Application search** — GET search with pagination
//! - **Status codes** — reference search
//! - **Metadata chain** — patent-number convenience lookup
//! - **Error handling** — verifies a bad lookup produces a typed
//!   `UsptoError::Api`

use uspto_odp::client::UsptoClient;
use uspto_odp::error::UsptoError;
use uspto_odp::types::search::SearchParams;

/// US 9,022,434 — a granted utility patent with a stable record.
const KNOWN_APPLICATION: &str = "14412875";
const KNOWN_PATENT: &str = "9022434";

/// Helper: create a live client or skip the test.
fn live_client() -> Option<UsptoClient> {
    let api_key = std::env::var("USPTO_API_KEY").ok()?;
    if api_key.is_empty() {
        return None;
    }
    Some(UsptoClient::new(api_key))
}

/// Macro to skip a test when credentials are missing.
macro_rules! require_client {
    () => {
        match live_client() {
            Some(c) => c,
            None => {
                eprintln!("⏭  Skipped (USPTO_API_KEY not set)");
                return;
            }
        }
    };
}

#[tokio::test]
async fn test_patent_wrapper() {
    let client = require_client!();
    let resp = client
        .get_patent_wrapper(KNOWN_APPLICATION)
        .await
        .expect("get_patent_wrapper failed");
    assert!(resp.count >= 1, "wrapper should contain at least one record");
    let wrapper = resp.first().expect("wrapper bag should not be empty");
    assert_eq!(
        wrapper.application_number_text.as_deref(),
        Some(KNOWN_APPLICATION)
    );
    let meta = wrapper
        .application_meta_data
        .as_ref()
        .expect("wrapper should carry metadata");
    println!(
        "✔ Wrapper: {} — {:?}",
        KNOWN_APPLICATION, meta.invention_title
    );
}

#[tokio::test]
async fn test_application_search_pagination() {
    let client = require_client!();
    let resp = client
        .search_patent_applications_get(&SearchParams {
            q: Some("applicationMetaData.applicationTypeLabelName:Utility".into()),
            limit: Some(5),
            offset: Some(0),
            ..Default::default()
        })
        .await
        .expect("search failed");
    assert!(resp.patent_file_wrapper_data_bag.len() <= 5);
    println!("✔ Search: {} total matches", resp.count);
}

#[tokio::test]
async fn test_status_codes() {
    let client = require_client!();
    let resp = client
        .search_status_codes_get(&SearchParams {
            q: Some("applicationStatusDescriptionText:Preexam".into()),
            limit: Some(10),
            ..Default::default()
        })
        .await
        .expect("status code search failed");
    assert!(resp.count >= 1, "at least one Preexam status code expected");
    println!("✔ Status codes: {} matched", resp.count);
}

#[tokio::test]
async fn test_metadata_from_patent_number() {
    let client = require_client!();
    let resp = client
        .get_app_metadata_from_patent_number(KNOWN_PATENT)
        .await
        .expect("metadata chain failed")
        .expect("known patent should resolve to an application");
    let meta = resp
        .first()
        .and_then(|w| w.application_meta_data.as_ref())
        .expect("metadata should be populated");
    assert_eq!(meta.patent_number.as_deref(), Some(KNOWN_PATENT));
    println!("✔ Metadata chain: patent {KNOWN_PATENT} → {:?}", meta.filing_date);
}

#[tokio::test]
async fn test_documents_listing() {
    let client = require_client!();
    let resp = client
        .get_patent_documents(KNOWN_APPLICATION)
        .await
        .expect("document listing failed");
    assert!(
        !resp.document_bag.is_empty(),
        "granted application should have documents"
    );
    println!("✔ Documents: {} entries", resp.document_bag.len());
}

#[tokio::test]
async fn test_not_found_is_typed_api_error() {
    let client = require_client!();
    let err = client
        .get_patent_wrapper("00000000")
        .await
        .expect_err("bogus application should not resolve");
    match err {
        UsptoError::Api(body) => {
            assert_eq!(body.code(), 404);
            println!("✔ Error handling: {body}");
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}
