//! # uspto-odp
//!
//! A Rust client library for the [USPTO Open Data Portal API](https://data.uspto.gov/apis/getting-started).
//!
//! Covers patent application file wrappers and search, application
//! documents, status codes, bulk dataset products, petition decisions, and
//! PTAB trials, appeals, and interferences.
//!
//! ## Quick Start
//!
//! ```no_run
//! use uspto_odp::client::UsptoClient;
//!
//! #[tokio::main]
//! async fn main() -> uspto_odp::error::Result<()> {
//!     let client = UsptoClient::new("your-api-key");
//!     let wrapper = client.get_patent_wrapper("16123456").await?;
//!     for app in &wrapper.patent_file_wrapper_data_bag {
//!         println!("{:?}", app.application_number_text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod constants;
pub mod error;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::UsptoClient;
/// Re-export the error type and Result alias.
pub use error::{Result, UsptoError};
