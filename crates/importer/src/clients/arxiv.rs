//! Client implementation for fetching papers from arXiv.org.
//!
//! This module talks to arXiv's Atom feed API (http://export.arxiv.org/api/query), parses the
//! XML response with `quick-xml`'s serde support and converts the first entry into the common
//! [`Paper`] format. The same client downloads PDFs.
//!
//! # Examples
//!
//! ```no_run
//! use importer::{
//!   clients::ArxivClient,
//!   lookup::{AssetFetch, MetadataLookup},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ArxivClient::new();
//! let paper = client.lookup("2301.07041").await?;
//! let pdf = client.fetch_bytes(&paper.pdf_url).await?;
//!
//! println!("{}: {} bytes", paper.title, pdf.len());
//! # Ok(())
//! # }
//! ```

use url::Url;

use super::*;

/// The public arXiv query endpoint.
pub const DEFAULT_API_URL: &str = "http://export.arxiv.org/api/query";

/// Internal representation of the arXiv API's Atom feed response.
#[derive(Debug, Deserialize)]
struct Feed {
  /// A `Feed` from arXiv may contain multiple `Entry`s, or none for unknown identifiers
  #[serde(rename = "entry", default)]
  entries: Vec<Entry>,
}

/// Internal representation of a paper entry from arXiv's API response.
///
/// Error responses reuse the entry shape with an `id` under `/api/errors` and no `published`
/// date, so everything beyond `id` and `title` is optional here.
#[derive(Debug, Deserialize)]
struct Entry {
  /// arXiv URL (e.g., "http://arxiv.org/abs/2301.07041v1")
  #[serde(rename = "id")]
  arxiv_url: String,
  /// Paper title, possibly wrapped over several lines
  title:     String,
  /// Paper abstract
  #[serde(default)]
  summary:   String,
  /// Authors, in order
  #[serde(rename = "author", default)]
  authors:   Vec<Author>,
  /// Author comments
  #[serde(rename = "arxiv:comment", alias = "comment", default)]
  comment:   Option<String>,
  /// First version's submission timestamp
  #[serde(default)]
  published: String,
  /// Alternate (HTML) and related (PDF) links
  #[serde(rename = "link", default)]
  links:     Vec<Link>,
}

/// Internal representation of an author from arXiv's API response.
#[derive(Debug, Deserialize)]
struct Author {
  /// Author's full name
  name: String,
}

/// Internal representation of an entry's `<link>` element.
#[derive(Debug, Deserialize)]
struct Link {
  /// Link target
  #[serde(rename = "@href")]
  href:  String,
  /// `pdf` for the PDF link
  #[serde(rename = "@title", default)]
  title: Option<String>,
}

/// Client for interacting with the arXiv API.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ArxivClient {
  /// Internal web client used to connect to the API and download PDFs.
  client:  reqwest::Client,
  /// Query endpoint, [`DEFAULT_API_URL`] unless overridden.
  api_url: String,
}

impl ArxivClient {
  /// Creates a new arXiv client instance using the public API endpoint.
  pub fn new() -> Self { Self::with_api_url(DEFAULT_API_URL) }

  /// Creates a client that queries `api_url` instead of the public endpoint, e.g. a mirror.
  pub fn with_api_url(api_url: impl Into<String>) -> Self {
    Self { client: reqwest::Client::new(), api_url: api_url.into() }
  }

  /// The query endpoint this client uses.
  pub fn api_url(&self) -> &str { &self.api_url }

  /// Fetches paper metadata from arXiv using its canonical identifier.
  ///
  /// # Errors
  ///
  /// This function will return an error if:
  /// - The network request fails or arXiv answers with an error status
  /// - The API response cannot be parsed
  /// - The paper is not found
  pub async fn fetch_paper(&self, identifier: &str) -> Result<Paper> {
    let url =
      Url::parse_with_params(&self.api_url, &[("id_list", identifier), ("max_results", "1")])?;

    debug!("Fetching from arXiv via: {url}");

    let response = self.client.get(url).send().await?.error_for_status()?.text().await?;

    trace!("arXiv response: {response}");

    parse_feed(identifier, &response)
  }
}

impl Default for ArxivClient {
  fn default() -> Self { Self::new() }
}

#[async_trait]
impl MetadataLookup for ArxivClient {
  async fn lookup(&self, identifier: &str) -> Result<Paper> { self.fetch_paper(identifier).await }
}

#[async_trait]
impl AssetFetch for ArxivClient {
  async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
    let url = Url::parse(url)?;
    debug!("Downloading {url}");

    let response = self.client.get(url).send().await?.error_for_status()?;
    trace!("PDF response: {response:?}");

    Ok(response.bytes().await?.to_vec())
  }
}

/// Converts an Atom feed for `identifier` into a [`Paper`].
fn parse_feed(identifier: &str, xml: &str) -> Result<Paper> {
  let feed: Feed =
    from_str(xml).map_err(|e| ImporterError::ApiError(format!("Failed to parse XML: {e}")))?;

  let entry = feed.entries.into_iter().next().ok_or(ImporterError::NotFound)?;

  if entry.arxiv_url.contains("/api/errors") {
    warn!("arXiv rejected {identifier}: {}", entry.summary.trim());
    return Err(ImporterError::NotFound);
  }

  // Prefer the advertised PDF link; otherwise /abs/ becomes /pdf/.
  let pdf_url = entry
    .links
    .iter()
    .find(|link| link.title.as_deref() == Some("pdf"))
    .map(|link| link.href.clone())
    .unwrap_or_else(|| entry.arxiv_url.replace("/abs/", "/pdf/"));

  Ok(Paper {
    paper_id: identifier.to_string(),
    title: collapse_whitespace(&entry.title),
    authors: entry.authors.iter().map(|author| collapse_whitespace(&author.name)).collect(),
    abstract_text: collapse_whitespace(&entry.summary),
    comments: entry.comment.as_deref().map(collapse_whitespace).unwrap_or_default(),
    date: entry.published.trim().to_string(),
    pdf_url,
  })
}

/// arXiv hard-wraps titles and abstracts; this joins them back into single lines.
fn collapse_whitespace(text: &str) -> String {
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}
