//! The import workflow.
//!
//! [`Importer::import`] runs one import from start to finish:
//!
//! 1. Extract the canonical arXiv identifier from the user's input
//! 2. Look up the paper's metadata
//! 3. Make sure the PDF folder exists
//! 4. Name the PDF `"<title> (<id>).pdf"`
//! 5. Download the PDF and write it into the vault
//! 6. Make sure the note folder exists
//! 7. Name the note `"<title> (<id>).md"`
//! 8. Render the note, linking it to the PDF
//! 9. Write the note into the vault
//!
//! Steps run strictly in order and the first failure ends the import. Nothing written by
//! earlier steps is removed; re-running the import overwrites the same two paths.

use super::*;
use crate::{
  format::{join_path, normalize_path, sanitize_filename},
  identifier::extract_arxiv_id,
  paper::ImportResult,
  template::{render_note, NOTE_TEMPLATE},
};

/// Where imported files go inside the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
  /// Folder for downloaded PDFs
  pub pdf_folder:  String,
  /// Folder for generated notes
  pub note_folder: String,
}

impl Default for ImportConfig {
  fn default() -> Self { Self { pdf_folder: "PDFs".into(), note_folder: "Notes".into() } }
}

/// Imports arXiv papers into a vault.
///
/// The importer owns its collaborators: `L` looks up metadata, `F` downloads PDFs and `S`
/// stores the results. It holds no state between imports, so one instance can serve any
/// number of sequential imports.
///
/// # Examples
///
/// ```no_run
/// use importer::{
///   clients::ArxivClient,
///   importer::{ImportConfig, Importer},
///   store::VaultStore,
/// };
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ArxivClient::new();
/// let config = ImportConfig { pdf_folder: "Papers/PDFs".into(), note_folder: "Papers".into() };
/// let importer = Importer::new(client.clone(), client, VaultStore::new("."), config);
///
/// let result = importer.import("arXiv:2301.07041").await?;
/// println!("{} -> {}", result.note_path, result.pdf_path);
/// # Ok(())
/// # }
/// ```
pub struct Importer<L, F, S> {
  /// Metadata source
  lookup:   L,
  /// PDF downloader
  fetcher:  F,
  /// Vault the files are written into
  store:    S,
  /// Target folders
  config:   ImportConfig,
  /// Note template, [`NOTE_TEMPLATE`] unless replaced
  template: String,
}

impl<L, F, S> Importer<L, F, S>
where
  L: MetadataLookup,
  F: AssetFetch,
  S: FileStore,
{
  /// Creates an importer using the default note template.
  pub fn new(lookup: L, fetcher: F, store: S, config: ImportConfig) -> Self {
    Self { lookup, fetcher, store, config, template: NOTE_TEMPLATE.to_string() }
  }

  /// Replaces the note template.
  pub fn with_template(mut self, template: impl Into<String>) -> Self {
    self.template = template.into();
    self
  }

  /// The vault this importer writes into.
  pub fn store(&self) -> &S { &self.store }

  /// Imports the paper named by `input`, an arXiv identifier, `arXiv:` identifier, or
  /// arxiv.org abs/pdf URL.
  ///
  /// # Errors
  ///
  /// - [`ImporterError::InvalidIdentifier`] if `input` is not recognised; nothing is fetched or
  ///   written
  /// - [`ImporterError::LookupFailed`] if the metadata lookup fails; nothing is written
  /// - [`ImporterError::AssetFetchFailed`] if the PDF download fails
  /// - [`ImporterError::WriteFailed`] if a folder or file cannot be created
  pub async fn import(&self, input: &str) -> Result<ImportResult> {
    let paper_id = extract_arxiv_id(input)?;
    info!("Importing arXiv paper {paper_id}");

    let paper = self
      .lookup
      .lookup(&paper_id)
      .await
      .map_err(|e| ImporterError::lookup_failed(&paper_id, e))?;
    debug!("Found paper: {paper:?}");

    let pdf_folder = self.ensure_folder(&self.config.pdf_folder).await?;
    let pdf_name = sanitize_filename(&format!("{}.pdf", paper.file_stem()));
    let pdf_path = join_path(&pdf_folder, &pdf_name);

    let bytes = self
      .fetcher
      .fetch_bytes(&paper.pdf_url)
      .await
      .map_err(|e| ImporterError::asset_fetch_failed(&paper.pdf_url, e))?;
    self
      .store
      .write_bytes(&pdf_path, &bytes)
      .await
      .map_err(|e| ImporterError::write_failed(&pdf_path, e))?;
    info!("Saved PDF to {pdf_path}");

    let note_folder = self.ensure_folder(&self.config.note_folder).await?;
    let note_name = sanitize_filename(&format!("{}.md", paper.file_stem()));
    let note_path = join_path(&note_folder, &note_name);

    let note = render_note(&paper, &pdf_path, &self.template);
    self
      .store
      .write_text(&note_path, &note)
      .await
      .map_err(|e| ImporterError::write_failed(&note_path, e))?;
    info!("Saved note to {note_path}");

    Ok(ImportResult { note_path, pdf_path })
  }

  /// Normalizes `folder` and creates it unless it already exists. Returns the normalized path.
  async fn ensure_folder(&self, folder: &str) -> Result<String> {
    let folder = normalize_path(folder);
    let exists = self
      .store
      .folder_exists(&folder)
      .await
      .map_err(|e| ImporterError::write_failed(&folder, e))?;

    if !exists {
      debug!("Creating folder {folder}");
      self
        .store
        .create_folder(&folder)
        .await
        .map_err(|e| ImporterError::write_failed(&folder, e))?;
    }
    Ok(folder)
  }
}
