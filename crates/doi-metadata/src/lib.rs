//! DOI Metadata Service
//!
//! Resolves batches of DOIs to bibliographic metadata (title, abstract,
//! authors, year, journal) through the OpenAlex API.
//!
//! # Features
//!
//! - **Skip on failure**: a DOI that cannot be resolved is logged and left out
//! - **Stable shape**: every record carries all five fields, defaulted when missing
//! - **HTTP entry point**: `POST /api/openalex/fetchMetadata` with `{"dois": [...]}`
//!
//! # Example
//!
//! ```no_run
//! use doi_metadata::{client::OpenAlexClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = OpenAlexClient::new(&config)?;
//!
//!     let papers = client.fetch_batch(&["10.7717/peerj.4375".to_string()]).await;
//!     println!("{}", serde_json::to_string_pretty(&papers)?);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod doi;
pub mod error;
pub mod lookup;
pub mod models;
pub mod server;

pub use client::OpenAlexClient;
pub use config::Config;
pub use error::{ApiError, ClientError};
pub use models::MetadataRecord;
