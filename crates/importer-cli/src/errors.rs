//! Error types for the `paper-import` CLI application.
//!
//! The errors are transparent, so the user sees the underlying message (for example
//! "Failed to look up arXiv paper 2301.12345: Paper not found") unchanged.

use thiserror::Error;

/// Errors that can occur during CLI operations.
#[derive(Error, Debug)]
pub enum ImporterCliError {
  /// Errors from user interaction dialogs
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),

  /// Errors from the underlying importer library
  #[error(transparent)]
  Importer(#[from] importer::errors::ImporterError),

  /// File system and IO operation errors
  #[error(transparent)]
  IO(#[from] std::io::Error),

  /// Errors rendering JSON output
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}
