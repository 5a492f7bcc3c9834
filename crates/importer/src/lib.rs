//! A library for importing arXiv papers into a local notes vault.
//!
//! An import turns a user-entered arXiv identifier or URL into two files under a document
//! root: the paper's PDF and a Markdown note whose front matter is filled from the paper's
//! metadata.
//!
//! # Example
//! ```rust,no_run
//! use importer::{
//!   clients::ArxivClient,
//!   importer::{ImportConfig, Importer},
//!   store::VaultStore,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!   let client = ArxivClient::new();
//!   let importer =
//!     Importer::new(client.clone(), client, VaultStore::new("vault"), ImportConfig::default());
//!
//!   let result = importer.import("https://arxiv.org/abs/2301.07041").await?;
//!   println!("Note written to {}", result.note_path);
//!
//!   Ok(())
//! }
//! ```

#![warn(missing_docs, clippy::missing_docs_in_private_items)]
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};
#[cfg(test)] use tracing_test::traced_test;

pub mod clients;
pub mod config;
pub mod errors;
pub mod format;
pub mod identifier;
pub mod importer;
pub mod lookup;
pub mod paper;
pub mod store;
pub mod template;

use errors::{ImporterError, Result};
use lookup::{AssetFetch, MetadataLookup};
use paper::Paper;
use store::FileStore;
