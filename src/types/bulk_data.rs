#![allow(missing_docs)]
//! Bulk dataset product types.

use chrono::NaiveDate;
use serde::Deserialize;

/// One file belonging to a dataset product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetFile {
    pub file_name: Option<String>,
    pub file_date: Option<NaiveDate>,
    pub file_size: Option<i64>,
    pub download_url: Option<String>,
}

/// One bulk dataset product.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetProduct {
    pub product_identifier: Option<String>,
    pub product_name: Option<String>,
    pub product_type: Option<String>,
    pub product_description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub file_count: Option<i64>,
    pub total_size: Option<i64>,
    #[serde(default)]
    pub files: Vec<DatasetFile>,
}

/// Response of the dataset product search and fetch endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetProductsResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub dataset_product_bag: Vec<DatasetProduct>,
    pub request_identifier: Option<String>,
}

/// Metadata of a single dataset file, including its download URL.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetFileResponse {
    pub file_name: Option<String>,
    pub file_url: Option<String>,
    pub file_size: Option<i64>,
    pub content_type: Option<String>,
    pub download_url: Option<String>,
    pub request_identifier: Option<String>,
}
