//! Vault storage.
//!
//! All paths handed to a [`FileStore`] are normalized, slash-separated and relative to the
//! vault root (see [`format::normalize_path`](crate::format::normalize_path)). [`VaultStore`]
//! maps them onto a directory on the local file system.
//!
//! # Examples
//!
//! ```no_run
//! use importer::store::{FileStore, VaultStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = VaultStore::new("/home/me/notes");
//! if !store.folder_exists("Papers/PDFs").await? {
//!   store.create_folder("Papers/PDFs").await?;
//! }
//! store.write_text("Papers/hello.md", "# Hello").await?;
//! # Ok(())
//! # }
//! ```

use std::io::ErrorKind;

use super::*;

/// Storage for the files an import produces.
#[async_trait]
pub trait FileStore: Send + Sync {
  /// Whether a folder exists at `path`.
  async fn folder_exists(&self, path: &str) -> Result<bool>;

  /// Creates a folder at `path`, including missing parents.
  ///
  /// A folder that already exists, e.g. because a concurrent import created it first, is not
  /// an error.
  async fn create_folder(&self, path: &str) -> Result<()>;

  /// Writes `bytes` to the file at `path`, replacing any previous content.
  async fn write_bytes(&self, path: &str, bytes: &[u8]) -> Result<()>;

  /// Writes `text` to the file at `path`, replacing any previous content.
  async fn write_text(&self, path: &str, text: &str) -> Result<()>;
}

/// A [`FileStore`] backed by a directory on the local file system.
#[derive(Debug, Clone)]
pub struct VaultStore {
  /// The vault root all paths are resolved against.
  root: PathBuf,
}

impl VaultStore {
  /// Creates a store rooted at `root`. The directory is not touched until the first call.
  pub fn new(root: impl AsRef<Path>) -> Self { Self { root: root.as_ref().to_path_buf() } }

  /// Resolves a vault path to a location on disk.
  pub fn resolve(&self, path: &str) -> PathBuf {
    path
      .split('/')
      .filter(|segment| !segment.is_empty())
      .fold(self.root.clone(), |resolved, segment| resolved.join(segment))
  }
}

#[async_trait]
impl FileStore for VaultStore {
  async fn folder_exists(&self, path: &str) -> Result<bool> {
    match tokio::fs::metadata(self.resolve(path)).await {
      Ok(metadata) => Ok(metadata.is_dir()),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
      Err(e) => Err(e.into()),
    }
  }

  async fn create_folder(&self, path: &str) -> Result<()> {
    let dir = self.resolve(path);
    trace!("Creating folder: {}", dir.display());
    match tokio::fs::create_dir_all(&dir).await {
      Err(e) if e.kind() != ErrorKind::AlreadyExists => Err(e.into()),
      _ => Ok(()),
    }
  }

  async fn write_bytes(&self, path: &str, bytes: &[u8]) -> Result<()> {
    let file = self.resolve(path);
    debug!("Writing {} bytes to {}", bytes.len(), file.display());
    tokio::fs::write(file, bytes).await?;
    Ok(())
  }

  async fn write_text(&self, path: &str, text: &str) -> Result<()> {
    self.write_bytes(path, text.as_bytes()).await
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[tokio::test]
  async fn test_create_folder_is_idempotent() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let store = VaultStore::new(dir.path());

    assert!(!store.folder_exists("Papers/PDFs").await?);
    store.create_folder("Papers/PDFs").await?;
    store.create_folder("Papers/PDFs").await?;
    assert!(store.folder_exists("Papers/PDFs").await?);
    assert!(dir.path().join("Papers").join("PDFs").is_dir());
    Ok(())
  }

  #[tokio::test]
  async fn test_files_are_not_folders() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let store = VaultStore::new(dir.path());

    store.write_text("note.md", "hello").await?;
    assert!(!store.folder_exists("note.md").await?);
    Ok(())
  }

  #[tokio::test]
  async fn test_writes_overwrite() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let store = VaultStore::new(dir.path());
    store.create_folder("Notes").await?;

    store.write_text("Notes/a b (1).md", "first").await?;
    store.write_text("Notes/a b (1).md", "second").await?;
    store.write_bytes("Notes/p.pdf", b"%PDF-1.5").await?;

    assert_eq!(std::fs::read_to_string(dir.path().join("Notes").join("a b (1).md"))?, "second");
    assert_eq!(std::fs::read(dir.path().join("Notes").join("p.pdf"))?, b"%PDF-1.5");
    Ok(())
  }

  #[tokio::test]
  async fn test_write_into_missing_folder_fails() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let store = VaultStore::new(dir.path());

    let err = store.write_text("Missing/a.md", "x").await.unwrap_err();
    assert!(matches!(err, ImporterError::Path(_)));
    Ok(())
  }

  #[test]
  fn test_resolve() {
    let store = VaultStore::new("/vault");
    assert_eq!(store.resolve("Notes/a.md"), PathBuf::from("/vault/Notes/a.md"));
    assert_eq!(store.resolve("/"), PathBuf::from("/vault"));
  }
}
