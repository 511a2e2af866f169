//! Query parameters and POST payloads shared by the ODP search endpoints.
//!
//! Every search endpoint comes in two flavors: a GET variant driven by
//! [`SearchParams`] and a POST variant driven by [`SearchRequest`]. Both
//! serialize only the fields the caller actually set, so the wire shape
//! matches what the API documents for each endpoint.

use serde::Serialize;

use crate::types::enums::{DownloadFormat, SortOrder};

// ---------------------------------------------------------------------------
// GET query parameters
// ---------------------------------------------------------------------------

/// Query parameters for the GET search endpoints.
///
/// All fields are optional; unset fields are omitted from the query string.
///
/// # Example
///
/// ```
/// use uspto_odp::types::search::SearchParams;
///
/// let params = SearchParams {
///     q: Some("applicationNumberText:14412875".into()),
///     limit: Some(50),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Search query string. Accepts boolean operators (`AND`, `OR`, `NOT`),
    /// wildcards (`*`), and exact phrases (`"..."`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Field to sort by followed by order, e.g.
    /// `applicationMetaData.filingDate asc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Position in the dataset to start from (default 0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Number of results to return (default 25).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Comma-separated list of fields to facet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<String>,
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Filter by field value, format `fieldName value1,value2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
    /// Filter by range, format `fieldName min:max`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_filters: Option<String>,
    /// Result format. Only meaningful on the `search/download` endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<DownloadFormat>,
}

impl SearchParams {
    /// Shorthand for a params struct carrying only a query string.
    pub fn query(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// POST payload
// ---------------------------------------------------------------------------

/// Pagination block of a POST search payload.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pagination {
    pub offset: u32,
    pub limit: u32,
}

/// One sort criterion of a POST search payload.
#[derive(Debug, Clone, Serialize)]
pub struct SortField {
    pub field: String,
    pub order: SortOrder,
}

/// One field filter of a POST search payload, e.g.
/// `{"name": "applicationMetaData.applicationTypeLabelName",
///   "value": ["Utility"]}`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchFilter {
    pub name: String,
    pub value: Vec<String>,
}

impl SearchFilter {
    /// Filter `name` to a single `value`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: vec![value.into()],
        }
    }
}

/// One range filter of a POST search payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeFilter {
    pub field: String,
    pub value_from: String,
    pub value_to: String,
}

/// JSON payload for the POST search endpoints.
///
/// All fields are optional; unset fields are omitted from the body.
///
/// # Example
///
/// ```
/// use uspto_odp::types::search::{Pagination, SearchRequest};
///
/// let req = SearchRequest {
///     q: Some("applicationStatusCode:>100".into()),
///     pagination: Some(Pagination { offset: 0, limit: 25 }),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<SearchFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_filters: Option<Vec<RangeFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<SortField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl SearchRequest {
    /// Shorthand for a payload carrying only a query string.
    pub fn query(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Bulk dataset product parameters
// ---------------------------------------------------------------------------

/// Query parameters for fetching a single bulk dataset product.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetProductParams {
    /// Only include product files created on or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_data_from_date: Option<chrono::NaiveDate>,
    /// Only include product files created on or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_data_to_date: Option<chrono::NaiveDate>,
    /// Include the product's file listing in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_files: Option<bool>,
    /// Only return the latest file of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_params_are_omitted_from_query_string() {
        let params = SearchParams::query("Utility");
        let encoded = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(encoded, "q=Utility");
    }

    #[test]
    fn range_filters_key_is_camel_case() {
        let params = SearchParams {
            range_filters: Some("applicationMetaData.grantDate 2010-01-01:2011-01-01".into()),
            ..Default::default()
        };
        let encoded = serde_urlencoded::to_string(&params).unwrap();
        assert!(encoded.starts_with("rangeFilters="));
    }

    #[test]
    fn request_serializes_only_set_fields() {
        let req = SearchRequest {
            q: Some("applicationStatusCode:>100".into()),
            pagination: Some(Pagination { offset: 0, limit: 25 }),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "q": "applicationStatusCode:>100",
                "pagination": {"offset": 0, "limit": 25}
            })
        );
    }

    #[test]
    fn dataset_product_params_use_wire_names() {
        let params = DatasetProductParams {
            file_data_from_date: "2023-01-01".parse().ok(),
            include_files: Some(true),
            latest: Some(true),
            ..Default::default()
        };
        let encoded = serde_urlencoded::to_string(&params).unwrap();
        assert!(encoded.contains("fileDataFromDate=2023-01-01"));
        assert!(encoded.contains("includeFiles=true"));
        assert!(encoded.contains("latest=true"));
    }
}
