//! Request and response types for the USPTO Open Data Portal API.
//!
//! This module contains all the strongly-typed structs used for serializing
//! requests and deserializing responses across every ODP endpoint.
//!
//! ## Organization
//!
//! - [`enums`] — Shared enumerations (document formats, sort order, etc.)
//! - [`search`] — Query parameters and POST payloads shared by the search
//!   endpoints
//! - [`applications`] — Patent file wrapper, application metadata, and the
//!   bags nested inside them
//! - [`documents`] — Application document listings and download options
//! - [`status_codes`] — Status code reference data
//! - [`bulk_data`] — Bulk dataset products and files
//! - [`petitions`] — Petition decision records
//! - [`trials`] — PTAB trial proceedings, decisions, and documents
//! - [`appeals`] — PTAB appeal decisions
//! - [`interferences`] — PTAB interference decisions
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod applications;
pub mod appeals;
pub mod bulk_data;
pub mod documents;
pub mod enums;
pub mod interferences;
pub mod petitions;
pub mod search;
pub mod status_codes;
pub mod trials;

pub use enums::*;
