//! Network collaborators used by the importer.
//!
//! The [`Importer`](crate::importer::Importer) depends on these traits rather than on a
//! concrete HTTP client so that lookups and downloads can be replaced, e.g. by an arXiv mirror
//! or by in-memory fakes in tests. [`ArxivClient`](crate::clients::ArxivClient) implements
//! both.

use super::*;

/// Resolves a canonical arXiv identifier to the paper's metadata.
#[async_trait]
pub trait MetadataLookup: Send + Sync {
  /// Fetches the metadata for `identifier`.
  ///
  /// # Errors
  ///
  /// Returns [`ImporterError::NotFound`] when the source has no such paper, or a network/API
  /// error when the source cannot be reached or understood.
  async fn lookup(&self, identifier: &str) -> Result<Paper>;
}

/// Downloads binary assets such as PDFs.
#[async_trait]
pub trait AssetFetch: Send + Sync {
  /// Downloads the full body behind `url`.
  async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}
