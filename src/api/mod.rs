//! REST API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`UsptoClient`](crate::client::UsptoClient) via `impl` blocks. All
//! methods handle JSON serialization, HTTP transport, and error mapping
//! automatically.
//!
//! ## Usage
//!
//! Simply import the relevant types and call methods on your `UsptoClient`:
//!
//! ```no_run
//! use uspto_odp::UsptoClient;
//! use uspto_odp::types::search::SearchParams;
//!
//! # #[tokio::main]
//! # async fn main() -> uspto_odp::Result<()> {
//! let client = UsptoClient::new("api-key");
//! let wrapper = client.get_patent_wrapper("16123456").await?;
//! let codes = client
//!     .search_status_codes_get(&SearchParams::query("Preexam"))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`applications`] | 14 | File wrappers, metadata, search |
//! | [`documents`] | 3 | Document listings and downloads |
//! | [`status_codes`] | 2 | Status code reference search |
//! | [`bulk_data`] | 3 | Bulk dataset products and files |
//! | [`petitions`] | 5 | Petition decision search and fetch |
//! | [`trials`] | 17 | PTAB trial proceedings, decisions, documents |
//! | [`appeals`] | 6 | PTAB appeal decisions |
//! | [`interferences`] | 6 | PTAB interference decisions |

pub mod applications;
pub mod appeals;
pub mod bulk_data;
pub mod documents;
pub mod interferences;
pub mod petitions;
pub mod status_codes;
pub mod trials;
