//! Error types for the importer library.
//!
//! This module provides a single error type covering every way an import can fail:
//! - Input validation of the identifier or URL
//! - Metadata lookup against arXiv
//! - PDF download
//! - Writing into the vault
//! - Loading and saving configuration
//!
//! The collaborator-level variants ([`ImporterError::NotFound`], [`ImporterError::Network`],
//! [`ImporterError::Path`], ...) describe what went wrong at the edge. The orchestrator wraps
//! them into one of the import-step variants so the user sees which step failed.
//!
//! # Examples
//!
//! ```
//! use importer::{errors::ImporterError, identifier::extract_arxiv_id};
//!
//! match extract_arxiv_id("not an id") {
//!   Err(ImporterError::InvalidIdentifier(input)) => println!("Rejected {input}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(id) => println!("Parsed {id}"),
//! }
//! ```

use thiserror::Error;

/// Error type alias used throughout the [`importer`](crate) crate.
pub type Result<T> = core::result::Result<T, ImporterError>;

/// Errors that can occur while importing a paper.
#[derive(Error, Debug)]
pub enum ImporterError {
  /// The input is not an arXiv identifier, `arXiv:` identifier, or arxiv.org abs/pdf URL.
  ///
  /// Carries the rejected input. Raised before any network or file activity.
  #[error("Invalid arXiv ID or URL: {0:?}")]
  InvalidIdentifier(String),

  /// arXiv has no paper under the requested identifier.
  #[error("Paper not found")]
  NotFound,

  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The server is unreachable or answers with an error status
  /// - The request times out
  /// - TLS/SSL errors occur
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The API answered with something that could not be understood.
  #[error("API error: {0}")]
  ApiError(String),

  /// Failed to parse a URL.
  #[error(transparent)]
  InvalidUrl(#[from] url::ParseError),

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// The configuration file could not be parsed.
  #[error(transparent)]
  Config(#[from] toml::de::Error),

  /// The configuration could not be serialized.
  #[error(transparent)]
  Serialize(#[from] toml::ser::Error),

  /// Metadata lookup for a valid identifier failed.
  #[error("Failed to look up arXiv paper {identifier}: {source}")]
  LookupFailed {
    /// The canonical identifier that was looked up.
    identifier: String,
    /// What went wrong during the lookup.
    source:     Box<ImporterError>,
  },

  /// Downloading the PDF failed.
  #[error("Failed to download PDF from {url}: {source}")]
  AssetFetchFailed {
    /// The PDF URL reported by the metadata lookup.
    url:    String,
    /// What went wrong during the download.
    source: Box<ImporterError>,
  },

  /// Creating a folder or writing a file in the vault failed.
  #[error("Failed to write {path}: {source}")]
  WriteFailed {
    /// The vault path of the folder or file.
    path:   String,
    /// What went wrong during the write.
    source: Box<ImporterError>,
  },
}

impl ImporterError {
  /// Wraps a lookup failure for `identifier`.
  pub fn lookup_failed(identifier: &str, source: ImporterError) -> Self {
    Self::LookupFailed { identifier: identifier.to_owned(), source: Box::new(source) }
  }

  /// Wraps a PDF download failure for `url`.
  pub fn asset_fetch_failed(url: &str, source: ImporterError) -> Self {
    Self::AssetFetchFailed { url: url.to_owned(), source: Box::new(source) }
  }

  /// Wraps a vault write failure at `path`.
  pub fn write_failed(path: &str, source: ImporterError) -> Self {
    Self::WriteFailed { path: path.to_owned(), source: Box::new(source) }
  }

  /// Checks if this error was caused by user input rather than by arXiv or the vault.
  ///
  /// Such errors happen before any side effect. The CLI reports them with a usage hint and
  /// exit status 2 instead of as a failed import.
  pub fn is_user_error(&self) -> bool { matches!(self, ImporterError::InvalidIdentifier(_)) }

  /// Checks if the paper does not exist on arXiv, whether raw or wrapped by the lookup step.
  pub fn is_not_found(&self) -> bool {
    match self {
      ImporterError::NotFound => true,
      ImporterError::LookupFailed { source, .. } => source.is_not_found(),
      _ => false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_wrapped_messages_name_the_step() {
    let err = ImporterError::lookup_failed("2301.12345", ImporterError::NotFound);
    assert_eq!(err.to_string(), "Failed to look up arXiv paper 2301.12345: Paper not found");
    assert!(err.is_not_found());
    assert!(!err.is_user_error());

    let err = ImporterError::write_failed(
      "Notes/a.md",
      std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into(),
    );
    assert_eq!(err.to_string(), "Failed to write Notes/a.md: denied");
  }

  #[test]
  fn test_invalid_identifier_is_user_error() {
    let err = ImporterError::InvalidIdentifier("nope".into());
    assert!(err.is_user_error());
    assert_eq!(err.to_string(), "Invalid arXiv ID or URL: \"nope\"");
  }
}
