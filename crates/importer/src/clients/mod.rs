//! Client implementations for fetching papers from external sources.
//!
//! Each client implements [`MetadataLookup`] and, where the source serves documents itself,
//! [`AssetFetch`]. Source-specific details (query URLs, response formats) stay inside the
//! client; the rest of the crate only sees [`Paper`].
//!
//! # Supported Sources
//!
//! - [`arxiv`] - Client for the arXiv.org preprint server
//!
//! # Examples
//!
//! ```no_run
//! use importer::{clients::ArxivClient, lookup::MetadataLookup};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let paper = ArxivClient::new().lookup("2301.07041").await?;
//! println!("{} by {}", paper.title, paper.authors.join(", "));
//! # Ok(())
//! # }
//! ```

use quick_xml::de::from_str;

pub mod arxiv;

pub use arxiv::ArxivClient;

use super::*;
