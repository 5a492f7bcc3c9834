//! User configuration.
//!
//! The configuration is a small TOML file, by default at
//! `<config dir>/paper-importer/config.toml`:
//!
//! ```toml
//! vault = "/home/me/notes"
//! pdf_folder = "Papers/PDFs"
//! note_folder = "Papers"
//! # template = "/home/me/notes/templates/paper.md"
//! # arxiv_api = "http://export.arxiv.org/api/query"
//! ```
//!
//! Every key is optional; missing keys fall back to [`Config::default`].

use super::*;
use crate::{clients::arxiv::DEFAULT_API_URL, importer::ImportConfig, template::NOTE_TEMPLATE};

/// Settings for importing papers into a vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Root directory of the vault
  pub vault:       PathBuf,
  /// Vault folder for downloaded PDFs
  pub pdf_folder:  String,
  /// Vault folder for generated notes
  pub note_folder: String,
  /// A file whose contents replace the default note template
  #[serde(skip_serializing_if = "Option::is_none")]
  pub template:    Option<PathBuf>,
  /// arXiv query endpoint
  pub arxiv_api:   String,
}

impl Default for Config {
  fn default() -> Self {
    let folders = ImportConfig::default();
    Self {
      vault:       PathBuf::from("."),
      pdf_folder:  folders.pdf_folder,
      note_folder: folders.note_folder,
      template:    None,
      arxiv_api:   DEFAULT_API_URL.to_string(),
    }
  }
}

impl Config {
  /// Default location of the configuration file.
  pub fn default_path() -> PathBuf {
    dirs::config_dir()
      .unwrap_or_else(|| PathBuf::from("."))
      .join("paper-importer")
      .join("config.toml")
  }

  /// Reads the configuration at `path`.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
  }

  /// Reads the configuration at `path`, or returns the defaults if there is no file.
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if path.exists() {
      Self::load(path)
    } else {
      debug!("No configuration at {}, using defaults", path.display());
      Ok(Self::default())
    }
  }

  /// Writes the configuration to `path`, creating parent directories as needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      trace!("Creating parent directories: {}", parent.display());
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    Ok(())
  }

  /// The folders handed to the [`Importer`](crate::importer::Importer).
  pub fn import_config(&self) -> ImportConfig {
    ImportConfig { pdf_folder: self.pdf_folder.clone(), note_folder: self.note_folder.clone() }
  }

  /// The note template: the configured template file, or [`NOTE_TEMPLATE`].
  pub fn load_template(&self) -> Result<String> {
    match &self.template {
      Some(path) => {
        debug!("Using note template {}", path.display());
        Ok(std::fs::read_to_string(path)?)
      },
      None => Ok(NOTE_TEMPLATE.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_missing_keys_use_defaults() -> anyhow::Result<()> {
    let config: Config = toml::from_str("note_folder = \"Papers\"")?;
    assert_eq!(config.note_folder, "Papers");
    assert_eq!(config.pdf_folder, "PDFs");
    assert_eq!(config.arxiv_api, DEFAULT_API_URL);
    assert_eq!(config.template, None);
    Ok(())
  }

  #[test]
  fn test_save_and_load() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("nested").join("config.toml");
    let config = Config {
      vault: dir.path().join("vault"),
      pdf_folder: "Papers/PDFs".into(),
      template: Some(dir.path().join("paper.md")),
      ..Config::default()
    };

    config.save(&path)?;
    assert_eq!(Config::load(&path)?, config);
    Ok(())
  }

  #[test]
  fn test_load_or_default_without_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    assert_eq!(Config::load_or_default(dir.path().join("none.toml"))?, Config::default());
    Ok(())
  }

  #[test]
  fn test_invalid_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "pdf_folder = [")?;
    assert!(matches!(Config::load(&path), Err(ImporterError::Config(_))));
    Ok(())
  }

  #[test]
  fn test_template() -> anyhow::Result<()> {
    let dir = tempdir()?;
    assert_eq!(Config::default().load_template()?, NOTE_TEMPLATE);

    let path = dir.path().join("paper.md");
    std::fs::write(&path, "# {{ title }}")?;
    let config = Config { template: Some(path), ..Config::default() };
    assert_eq!(config.load_template()?, "# {{ title }}");
    Ok(())
  }

  #[test]
  fn test_import_config() {
    let config = Config { note_folder: "Papers".into(), ..Config::default() };
    assert_eq!(config.import_config(), ImportConfig {
      pdf_folder:  "PDFs".into(),
      note_folder: "Papers".into(),
    });
  }
}
