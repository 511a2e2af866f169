//! Shared enum types that map directly to ODP API string values.
//!
//! Variant names use the exact JSON wire spelling where the API expects
//! `SCREAMING_SNAKE_CASE` values, so we suppress the Rust naming convention
//! lint for those.
#![allow(non_camel_case_types)]

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Document format
// ---------------------------------------------------------------------------

/// Format of a downloadable application document, as it appears in
/// `downloadOptionBag[].mimeTypeIdentifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentFormat {
    /// Portable Document Format.
    PDF,
    /// Microsoft Word.
    MS_WORD,
    /// XML source.
    XML,
}

impl DocumentFormat {
    /// The wire value used by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PDF => "PDF",
            Self::MS_WORD => "MS_WORD",
            Self::XML => "XML",
        }
    }

    /// File extension used when saving a document of this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::PDF => "pdf",
            Self::MS_WORD => "doc",
            Self::XML => "xml",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Download format
// ---------------------------------------------------------------------------

/// Result format accepted by the `search/download` endpoints.
///
/// With [`DownloadFormat::Csv`] the response carries a `downloadUrl`
/// instead of an inline result bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    Json,
    Csv,
}

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

/// Sort direction for a [`SortField`](crate::types::search::SortField) in a
/// POST search payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}
