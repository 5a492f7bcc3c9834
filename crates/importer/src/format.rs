//! Filename and vault path formatting.
//!
//! Paper titles routinely contain characters that are illegal in file names on one platform or
//! another (`Attention: Is All You Need?`). This module turns such titles into safe file names
//! and builds the slash-separated, root-relative paths the vault uses.
//!
//! # Examples
//!
//! ```
//! use importer::format;
//!
//! let name = format::sanitize_filename("Q&A: What/Why? (2301.12345).pdf");
//! assert_eq!(name, "Q&A What Why (2301.12345).pdf");
//!
//! let folder = format::normalize_path("//Papers\\PDFs/");
//! assert_eq!(format::join_path(&folder, &name), "Papers/PDFs/Q&A What Why (2301.12345).pdf");
//! ```

/// Characters replaced by [`sanitize_filename`].
const ILLEGAL_FILENAME_CHARS: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// The vault root as returned by [`normalize_path`] for an empty path.
pub const ROOT: &str = "/";

/// Makes a candidate file name safe to create on common file systems.
///
/// - Replaces each of `/ \ ? % * : | " < >` with a space
/// - Collapses any run of whitespace, including U+FEFF, into a single space
/// - Trims leading and trailing whitespace
///
/// Never fails; the result may be empty. Applying it twice gives the same result as applying it
/// once.
pub fn sanitize_filename(name: &str) -> String {
  name
    .replace(ILLEGAL_FILENAME_CHARS, " ")
    .split(|c: char| c.is_whitespace() || c == '\u{FEFF}')
    .filter(|word| !word.is_empty())
    .collect::<Vec<&str>>()
    .join(" ")
}

/// Normalizes a vault path into its slash-separated, root-relative form.
///
/// Backslashes become `/`, non-breaking spaces become plain spaces, repeated slashes collapse
/// and leading or trailing slashes are dropped. A path naming the vault root (`""`, `"/"`)
/// normalizes to [`ROOT`].
pub fn normalize_path(path: &str) -> String {
  let path = path.replace('\\', "/").replace(['\u{00A0}', '\u{202F}'], " ");
  let normalized =
    path.split('/').filter(|segment| !segment.is_empty()).collect::<Vec<_>>().join("/");

  if normalized.is_empty() {
    ROOT.to_string()
  } else {
    normalized
  }
}

/// Joins a normalized folder path and a file name.
///
/// Files placed in the vault root get no folder prefix.
pub fn join_path(folder: &str, file: &str) -> String {
  if folder == ROOT {
    normalize_path(file)
  } else {
    normalize_path(&format!("{folder}/{file}"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sanitize_filename() {
    assert_eq!(sanitize_filename("A/B\\C?D.pdf"), "A B C D.pdf");
    assert_eq!(sanitize_filename("Test Paper (2301.12345).md"), "Test Paper (2301.12345).md");
    assert_eq!(sanitize_filename("a%b*c:d|e\"f<g>h"), "a b c d e f g h");
    assert_eq!(sanitize_filename("  Deep   Learning:\n a\tsurvey  "), "Deep Learning a survey");
    assert_eq!(sanitize_filename("???"), "");
    assert_eq!(sanitize_filename(""), "");
  }

  #[test]
  fn test_sanitize_filename_collapses_byte_order_marks() {
    assert_eq!(sanitize_filename("\u{FEFF}Deep\u{FEFF}Learning"), "Deep Learning");
    assert_eq!(sanitize_filename("Deep \u{FEFF} Learning\u{FEFF}.pdf"), "Deep Learning.pdf");
    assert_eq!(sanitize_filename("\u{FEFF}"), "");
  }

  #[test]
  fn test_sanitize_filename_is_idempotent() {
    for s in [
      "A/B\\C?D.pdf",
      "  leading and trailing  ",
      "::::",
      "Attention Is All You Need? (1706.03762).pdf",
      "tabs\tand\nnewlines\r\n",
      "unicode — “quotes” ünïcödé",
      "\u{FEFF}bom \u{FEFF}",
      "",
    ] {
      let once = sanitize_filename(s);
      assert_eq!(sanitize_filename(&once), once, "not idempotent for {s:?}");
    }
  }

  #[test]
  fn test_normalize_path() {
    assert_eq!(normalize_path("PDFs"), "PDFs");
    assert_eq!(normalize_path("/PDFs/"), "PDFs");
    assert_eq!(normalize_path("Papers//PDFs"), "Papers/PDFs");
    assert_eq!(normalize_path("Papers\\PDFs"), "Papers/PDFs");
    assert_eq!(normalize_path("My\u{00A0}Papers"), "My Papers");
    assert_eq!(normalize_path(""), ROOT);
    assert_eq!(normalize_path("///"), ROOT);
  }

  #[test]
  fn test_join_path() {
    assert_eq!(join_path("PDFs", "a.pdf"), "PDFs/a.pdf");
    assert_eq!(join_path(ROOT, "a.pdf"), "a.pdf");
    assert_eq!(join_path("Papers/Notes", "a b.md"), "Papers/Notes/a b.md");
  }
}
