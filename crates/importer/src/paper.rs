//! Paper metadata and import results.
//!
//! A [`Paper`] is produced once by a [`MetadataLookup`] and consumed once by the
//! [`Importer`](crate::importer::Importer); nothing is persisted between imports.

use super::*;

/// Metadata for a single arXiv paper.
///
/// # Examples
///
/// ```
/// use importer::paper::Paper;
///
/// let paper = Paper {
///   paper_id:      "2301.12345".into(),
///   title:         "Test Paper".into(),
///   authors:       vec!["A".into(), "B".into()],
///   abstract_text: "We test things.".into(),
///   comments:      String::new(),
///   date:          "2023-01-15T18:00:00Z".into(),
///   pdf_url:       "https://arxiv.org/pdf/2301.12345v1".into(),
/// };
///
/// assert_eq!(paper.file_stem(), "Test Paper (2301.12345)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
  /// The canonical arXiv identifier (e.g., "2301.07041")
  pub paper_id:      String,
  /// The paper's title
  pub title:         String,
  /// The paper's authors, in publication order
  pub authors:       Vec<String>,
  /// The paper's abstract text
  pub abstract_text: String,
  /// The author comments (page counts, venue, ...), empty when absent
  pub comments:      String,
  /// Publication date as reported by the source, usually ISO 8601
  pub date:          String,
  /// URL the PDF can be downloaded from
  pub pdf_url:       String,
}

impl Paper {
  /// The unsanitized base name shared by the PDF and the note: `"<title> (<paper_id>)"`.
  pub fn file_stem(&self) -> String { format!("{} ({})", self.title, self.paper_id) }
}

/// Where an import placed its files, as vault-relative paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
  /// Path of the generated Markdown note
  pub note_path: String,
  /// Path of the downloaded PDF
  pub pdf_path:  String,
}
