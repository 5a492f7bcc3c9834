//! Note template rendering.
//!
//! A note template is plain text containing `{{ name }}` placeholders. Names are matched
//! case-insensitively and whitespace inside the braces is ignored, so `{{paper_id}}`,
//! `{{ paper_id }}` and `{{ Paper_ID }}` are the same placeholder. The recognised names are:
//!
//! | Placeholder | Rendered as |
//! |-------------|-------------|
//! | `paper_id`  | the raw arXiv identifier |
//! | `title`     | the title in double quotes |
//! | `authors`   | one `- <name>` line per author, preceded by a newline |
//! | `year`      | see [`PublicationDate`] |
//! | `date`      | see [`PublicationDate`] |
//! | `abstract`  | the abstract in double quotes |
//! | `comments`  | the comments in double quotes |
//! | `pdf_link`  | `"[[<pdf path>]]"`, a wiki link to the stored PDF |
//!
//! Any other `{{ ... }}` text is left as written.

use super::*;

/// The default note: YAML front matter followed by an empty body.
pub const NOTE_TEMPLATE: &str = "---
paper id: {{ paper_id }}
title: {{ title }}
authors: {{ authors }}
publication year: {{ year }}
publication date: {{ date }}
abstract: {{ abstract }}
comments: {{ comments }}
pdf: {{ pdf_link }}
url: https://arxiv.org/abs/{{ paper_id }}
tags: []
---
";

lazy_static! {
    /// Any `{{ name }}` placeholder, capturing the name.
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{\s*([A-Za-z_]+)\s*\}\}").unwrap();
    /// A calendar date anywhere in a free-form date string.
    static ref ISO_DATE: Regex = Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").unwrap();
}

/// The `year` and `date` fields derived from a paper's date string.
///
/// When the raw date contains a `YYYY-MM-DD` calendar date, `year` is its four digit year and
/// `date` is `<month>.<weekday>` where the month counts from zero (January is `0`) and the
/// weekday counts from Sunday (Sunday is `0`). Otherwise, including when the embedded date is
/// not a real calendar day, both fields are the raw string.
///
/// ```
/// use importer::template::PublicationDate;
///
/// // 2023-01-15 was a Sunday.
/// let date = PublicationDate::derive("2023-01-15T18:27:43Z");
/// assert_eq!(date.year, "2023");
/// assert_eq!(date.date, "0.0");
///
/// let date = PublicationDate::derive("Spring 2023");
/// assert_eq!(date.year, "Spring 2023");
/// assert_eq!(date.date, "Spring 2023");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationDate {
  /// Rendered into `{{ year }}`
  pub year: String,
  /// Rendered into `{{ date }}`
  pub date: String,
}

impl PublicationDate {
  /// Derives both fields from a free-form date string.
  pub fn derive(raw: &str) -> Self {
    let parsed = ISO_DATE
      .find(raw)
      .and_then(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok());

    match parsed {
      Some(date) => Self {
        year: date.year().to_string(),
        date: format!("{}.{}", date.month0(), date.weekday().num_days_from_sunday()),
      },
      None => {
        debug!("No calendar date in {raw:?}, using it verbatim");
        Self { year: raw.to_string(), date: raw.to_string() }
      },
    }
  }
}

/// Renders `template` for `paper`, linking the note to the PDF stored at `pdf_path`.
///
/// Substitution is a single pass over the template: every occurrence of every recognised
/// placeholder is replaced, and text coming from the paper is inserted literally, so metadata
/// containing `$` or `{{ ... }}` is never expanded.
///
/// # Examples
///
/// ```
/// use importer::{paper::Paper, template::render_note};
///
/// let paper = Paper {
///   paper_id:      "2301.12345".into(),
///   title:         "Test Paper".into(),
///   authors:       vec!["A".into(), "B".into()],
///   abstract_text: "...".into(),
///   comments:      String::new(),
///   date:          "2023-01-15".into(),
///   pdf_url:       "http://x/p.pdf".into(),
/// };
///
/// let note = render_note(&paper, "PDFs/p.pdf", "{{ title }} by{{authors}}");
/// assert_eq!(note, "\"Test Paper\" by\n- A\n- B");
/// ```
pub fn render_note(paper: &Paper, pdf_path: &str, template: &str) -> String {
  let date = PublicationDate::derive(&paper.date);
  let authors = paper.authors.iter().map(|author| format!("- {author}")).collect::<Vec<_>>();

  PLACEHOLDER
    .replace_all(template, |caps: &regex::Captures| match caps[1].to_lowercase().as_str() {
      "paper_id" => paper.paper_id.clone(),
      "title" => quoted(&paper.title),
      "authors" => format!("\n{}", authors.join("\n")),
      "year" => date.year.clone(),
      "date" => date.date.clone(),
      "abstract" => quoted(&paper.abstract_text),
      "comments" => quoted(&paper.comments),
      "pdf_link" => format!("\"[[{pdf_path}]]\""),
      other => {
        trace!("Leaving unknown placeholder {other:?} in place");
        caps[0].to_string()
      },
    })
    .into_owned()
}

/// Wraps a value in double quotes.
fn quoted(value: &str) -> String { format!("\"{value}\"") }

#[cfg(test)]
mod tests {
  use super::*;

  fn paper() -> Paper {
    Paper {
      paper_id:      "2301.12345".into(),
      title:         "Test Paper".into(),
      authors:       vec!["A".into(), "B".into()],
      abstract_text: "An abstract.".into(),
      comments:      "10 pages".into(),
      date:          "2023-01-15".into(),
      pdf_url:       "http://x/p.pdf".into(),
    }
  }

  #[test]
  fn test_default_template() {
    let note = render_note(&paper(), "PDFs/Test Paper (2301.12345).pdf", NOTE_TEMPLATE);
    assert_eq!(
      note,
      concat!(
        "---\n",
        "paper id: 2301.12345\n",
        "title: \"Test Paper\"\n",
        "authors: \n- A\n- B\n",
        "publication year: 2023\n",
        "publication date: 0.0\n",
        "abstract: \"An abstract.\"\n",
        "comments: \"10 pages\"\n",
        "pdf: \"[[PDFs/Test Paper (2301.12345).pdf]]\"\n",
        "url: https://arxiv.org/abs/2301.12345\n",
        "tags: []\n",
        "---\n",
      )
    );
  }

  #[test]
  fn test_repeated_placeholders_are_all_replaced() {
    let note = render_note(&paper(), "p.pdf", "{{ paper_id }} and {{ paper_id }}");
    assert_eq!(note, "2301.12345 and 2301.12345");
  }

  #[test]
  fn test_placeholder_names_ignore_case_and_whitespace() {
    let note = render_note(&paper(), "p.pdf", "{{paper_id}}|{{   PAPER_ID\t}}|{{ Year }}");
    assert_eq!(note, "2301.12345|2301.12345|2023");
  }

  #[test]
  fn test_no_placeholder_survives_the_default_template() {
    let note = render_note(&paper(), "p.pdf", NOTE_TEMPLATE);
    assert!(!note.contains("{{"), "unreplaced placeholder in:\n{note}");
  }

  #[test]
  fn test_unknown_placeholders_are_kept() {
    let note = render_note(&paper(), "p.pdf", "{{ journal }} {{title}}");
    assert_eq!(note, "{{ journal }} \"Test Paper\"");
  }

  #[test]
  fn test_metadata_is_inserted_literally() {
    let mut paper = paper();
    paper.title = "Costs of $O(n)$ and $1".into();
    paper.abstract_text = "Mentions {{ year }} in text".into();

    let note = render_note(&paper, "p.pdf", "{{ title }}|{{ abstract }}");
    assert_eq!(note, "\"Costs of $O(n)$ and $1\"|\"Mentions {{ year }} in text\"");
  }

  #[test]
  fn test_empty_fields() {
    let mut paper = paper();
    paper.authors.clear();
    paper.comments.clear();

    let note = render_note(&paper, "p.pdf", "authors:{{ authors }}|{{ comments }}");
    assert_eq!(note, "authors:\n|\"\"");
  }

  #[test]
  fn test_publication_date() {
    // 2024-03-01 was a Friday.
    assert_eq!(PublicationDate::derive("2024-03-01"), PublicationDate {
      year: "2024".into(),
      date: "2.5".into(),
    });
    // The embedded date is found anywhere in the string.
    assert_eq!(PublicationDate::derive("published 2023-12-31T00:00:00Z").date, "11.0");
    // Not a real calendar day.
    assert_eq!(PublicationDate::derive("2023-02-30").year, "2023-02-30");
    assert_eq!(PublicationDate::derive("").date, "");
  }
}
