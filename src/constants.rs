//! Constants for the USPTO Open Data Portal API.
//!
//! Contains the base URL and the path prefix of each ODP service. These are
//! used internally by [`UsptoClient`](crate::client::UsptoClient), but are
//! also exported for advanced usage (e.g. building URLs by hand).

// ---------------------------------------------------------------------------
// Base URL
// ---------------------------------------------------------------------------

/// Base URL for the USPTO Open Data Portal REST API.
pub const API_BASE_URL: &str = "https://api.uspto.gov/api";

// ---------------------------------------------------------------------------
// Service path prefixes
// ---------------------------------------------------------------------------

/// Patent Applications service (file wrappers, documents, search).
pub const PATENT_APPLICATIONS_PATH: &str = "/v1/patent/applications";

/// Patent application status code reference service.
pub const STATUS_CODES_PATH: &str = "/v1/patent/status-codes";

/// Bulk dataset products service.
pub const DATASET_PRODUCTS_PATH: &str = "/v1/datasets/products";

/// Petition decisions service.
pub const PETITION_DECISIONS_PATH: &str = "/v1/petitions/decisions";

/// PTAB trials service (proceedings, decisions, documents).
pub const PTAB_TRIALS_PATH: &str = "/v1/ptab/trials";

/// PTAB appeals service.
pub const PTAB_APPEALS_PATH: &str = "/v1/ptab/appeals";

/// PTAB interferences service.
pub const PTAB_INTERFERENCES_PATH: &str = "/v1/ptab/interferences";
