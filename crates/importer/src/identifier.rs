//! Extraction of canonical arXiv identifiers from free-form user input.
//!
//! Three input forms are recognised, tried in this order with the first match winning:
//!
//! 1. An `arXiv:` prefixed identifier, e.g. `arXiv:2301.07041`
//! 2. A bare identifier, e.g. `2301.07041`
//! 3. An arxiv.org URL, e.g. `https://arxiv.org/abs/2301.07041` or `arxiv.org/pdf/2301.0704`
//!
//! Every pattern is anchored at both ends, so trailing text such as a version suffix
//! (`2301.07041v2`) or a `.pdf` extension is rejected rather than silently dropped.
//!
//! # Examples
//!
//! ```
//! use importer::identifier::extract_arxiv_id;
//!
//! assert_eq!(extract_arxiv_id("arXiv:2301.07041").unwrap(), "2301.07041");
//! assert_eq!(extract_arxiv_id("http://www.arxiv.org/pdf/2301.0704").unwrap(), "2301.0704");
//! assert!(extract_arxiv_id("2301.07041v2").is_err());
//! ```

use super::*;

lazy_static! {
    /// `arXiv:` prefix, case-sensitive.
    static ref PREFIXED: Regex = Regex::new(r"^arXiv:(\d{4}\.\d{4,5})$").unwrap();
    /// Bare new-style identifier.
    static ref BARE: Regex = Regex::new(r"^(\d{4}\.\d{4,5})$").unwrap();
    /// Abstract or PDF page on arxiv.org, scheme and `www.` optional.
    static ref URL: Regex =
        Regex::new(r"^(?:https?://)?(?:www\.)?arxiv\.org/(?:abs|pdf)/(\d{4}\.\d{4,5})$").unwrap();
}

/// Extracts the canonical `NNNN.NNNNN` arXiv identifier from `input`.
///
/// The input is matched as given; callers that read from a terminal or form should trim it
/// first.
///
/// # Errors
///
/// Returns [`ImporterError::InvalidIdentifier`] when none of the recognised forms matches the
/// whole input.
pub fn extract_arxiv_id(input: &str) -> Result<String> {
  [&*PREFIXED, &*BARE, &*URL]
    .iter()
    .find_map(|re| re.captures(input).and_then(|cap| cap.get(1)))
    .map(|m| {
      trace!("Extracted arXiv identifier {} from {input:?}", m.as_str());
      m.as_str().to_string()
    })
    .ok_or_else(|| ImporterError::InvalidIdentifier(input.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bare_identifier_is_returned_unchanged() {
    for id in ["2301.12345", "2301.1234", "0704.0001", "9912.99999"] {
      assert_eq!(extract_arxiv_id(id).unwrap(), id);
    }
  }

  #[test]
  fn test_prefixed_identifier() {
    assert_eq!(extract_arxiv_id("arXiv:2301.12345").unwrap(), "2301.12345");
    // Only the exact `arXiv:` spelling is accepted.
    assert!(extract_arxiv_id("arxiv:2301.12345").is_err());
    assert!(extract_arxiv_id("ARXIV:2301.12345").is_err());
  }

  #[test]
  fn test_urls() {
    assert_eq!(extract_arxiv_id("https://arxiv.org/abs/2301.12345").unwrap(), "2301.12345");
    assert_eq!(extract_arxiv_id("arxiv.org/pdf/2301.1234").unwrap(), "2301.1234");
    assert_eq!(extract_arxiv_id("http://www.arxiv.org/abs/2301.12345").unwrap(), "2301.12345");
    assert_eq!(extract_arxiv_id("www.arxiv.org/pdf/2301.12345").unwrap(), "2301.12345");
  }

  #[test]
  fn test_partial_matches_are_rejected() {
    for input in [
      "not an id",
      "",
      "2301.123",
      "2301.123456",
      "2301.12345v2",
      " 2301.12345",
      "arXiv:2301.12345 ",
      "https://arxiv.org/abs/2301.12345v1",
      "https://arxiv.org/pdf/2301.12345.pdf",
      "https://arxiv.org/list/2301.12345",
      "https://export.arxiv.org/abs/2301.12345",
      "ftp://arxiv.org/abs/2301.12345",
      "math.AG/0601001",
    ] {
      match extract_arxiv_id(input) {
        Err(ImporterError::InvalidIdentifier(rejected)) => assert_eq!(rejected, input),
        other => panic!("expected {input:?} to be rejected, got {other:?}"),
      }
    }
  }
}
