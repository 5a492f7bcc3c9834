use std::{path::PathBuf, process::ExitCode};

use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::{style, Emoji};
use errors::ImporterCliError;
use importer::{
  clients::ArxivClient, config::Config, identifier::extract_arxiv_id, importer::Importer,
  store::VaultStore,
};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod errors;
pub mod opener;

static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
static BOOKS: Emoji<'_, '_> = Emoji("📚 ", "");
static PAPER: Emoji<'_, '_> = Emoji("📄 ", "");
static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "");
static ERROR: Emoji<'_, '_> = Emoji("✖ ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✨ ", "");

#[derive(Parser)]
#[command(author, version, about = "Import arXiv papers into a notes vault")]
struct Cli {
  /// Verbose mode (-v, -vv, -vvv)
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

/// Settings that can be given on the command line instead of in the configuration file.
#[derive(Args)]
struct VaultArgs {
  /// Root directory of the vault
  #[arg(long)]
  vault:       Option<PathBuf>,
  /// Vault folder for downloaded PDFs
  #[arg(long)]
  pdf_folder:  Option<String>,
  /// Vault folder for generated notes
  #[arg(long)]
  note_folder: Option<String>,
}

impl VaultArgs {
  /// Overrides the file's settings with the ones given on the command line.
  fn apply(self, config: &mut Config) {
    if let Some(vault) = self.vault {
      config.vault = vault;
    }
    if let Some(pdf_folder) = self.pdf_folder {
      config.pdf_folder = pdf_folder;
    }
    if let Some(note_folder) = self.note_folder {
      config.note_folder = note_folder;
    }
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Write a configuration file
  Init {
    #[command(flatten)]
    vault:           VaultArgs,
    /// Overwrite an existing configuration without asking
    #[arg(long)]
    accept_defaults: bool,
  },
  /// Import a paper into the vault
  Import {
    /// arXiv ID (2301.07041), prefixed ID (arXiv:2301.07041) or arxiv.org abs/pdf URL
    input:    String,
    #[command(flatten)]
    vault:    VaultArgs,
    /// Note template to use instead of the configured one
    #[arg(long)]
    template: Option<PathBuf>,
    /// Open the note once it is written
    #[arg(long)]
    open:     bool,
    /// Print the resulting paths as JSON
    #[arg(long)]
    json:     bool,
  },
  /// Show the effective configuration
  Config,
}

/// Setup logging with the specified verbosity level
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  match run(cli).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(ImporterCliError::Importer(e)) if e.is_user_error() => {
      eprintln!("{} {}", style(ERROR).red(), style(&e).red());
      eprintln!(
        "   Expected an arXiv ID (2301.07041), prefixed ID (arXiv:2301.07041) or arxiv.org \
         abs/pdf URL"
      );
      ExitCode::from(2)
    },
    Err(e) => {
      eprintln!("{} {}", style(ERROR).red(), style(e).red());
      ExitCode::FAILURE
    },
  }
}

async fn run(cli: Cli) -> Result<(), ImporterCliError> {
  let config_path = cli.config.unwrap_or_else(Config::default_path);
  trace!("Using configuration at: {}", config_path.display());

  match cli.command {
    Commands::Init { vault, accept_defaults } => {
      if config_path.exists() {
        println!(
          "{} Configuration already exists at: {}",
          style(WARNING).yellow(),
          style(config_path.display()).yellow()
        );

        if !accept_defaults
          && !dialoguer::Confirm::new()
            .with_prompt("Do you want to overwrite it?")
            .default(false)
            .interact()?
        {
          println!("{} Keeping existing configuration", style("ℹ").blue());
          return Ok(());
        }
      }

      let mut config = Config::default();
      vault.apply(&mut config);
      if config.vault.is_relative() {
        config.vault = std::env::current_dir()?.join(&config.vault);
      }

      config.save(&config_path)?;
      println!(
        "{} Configuration written to: {}",
        style(SUCCESS).green(),
        style(config_path.display()).yellow()
      );
      print_config(&config);
      Ok(())
    },

    Commands::Import { input, vault, template, open, json } => {
      let input = input.trim();
      let identifier = extract_arxiv_id(input)?;

      let mut config = Config::load_or_default(&config_path)?;
      vault.apply(&mut config);
      if template.is_some() {
        config.template = template;
      }
      debug!("Effective configuration: {config:?}");

      if !json {
        println!(
          "{} Importing paper: {}",
          style(LOOKING_GLASS).cyan(),
          style(&identifier).yellow()
        );
      }

      let client = ArxivClient::with_api_url(&config.arxiv_api);
      let store = VaultStore::new(&config.vault);
      let importer = Importer::new(client.clone(), client, store, config.import_config())
        .with_template(config.load_template()?);

      let result = importer.import(input).await?;

      if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
      } else {
        println!("\n{} Paper imported!", style(SUCCESS).green());
        println!("   {} {}", style(PAPER).green(), style(&result.note_path).white());
        println!("   {} {}", style(SAVE).green(), style(&result.pdf_path).white());
      }

      if open {
        let note = importer.store().resolve(&result.note_path);
        if !opener::open_note(&note) {
          println!(
            "{} Could not open {}",
            style(WARNING).yellow(),
            style(note.display()).yellow()
          );
        }
      }
      Ok(())
    },

    Commands::Config => {
      if config_path.exists() {
        println!(
          "{} Configuration file: {}",
          style(BOOKS).cyan(),
          style(config_path.display()).yellow()
        );
      } else {
        println!(
          "{} No configuration at {}, using defaults",
          style(WARNING).yellow(),
          style(config_path.display()).yellow()
        );
      }
      print_config(&Config::load_or_default(&config_path)?);
      Ok(())
    },
  }
}

/// Prints the settings an import would use.
fn print_config(config: &Config) {
  println!("   {} {}", style("Vault:").green().bold(), style(config.vault.display()).white());
  println!("   {} {}", style("PDF folder:").green().bold(), style(&config.pdf_folder).white());
  println!("   {} {}", style("Note folder:").green().bold(), style(&config.note_folder).white());
  let template = match &config.template {
    Some(path) => path.display().to_string(),
    None => "built-in".to_string(),
  };
  println!("   {} {}", style("Template:").green().bold(), style(template).white());
  println!("   {} {}", style("arXiv API:").green().bold(), style(&config.arxiv_api).blue());
}
