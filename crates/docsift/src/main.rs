//! # docsift CLI
//!
//! Extracts text from PDF, Word and Excel files and lists the sentences that
//! contain a keyword, a page of files at a time.
//!
//! ## Commands
//!
//! - `docsift search <FILES>... -k <KEYWORD>` - Upload, extract and print one page
//! - `docsift shell` - Interactive session (upload, keyword, extract, next/prev)
//! - `docsift config show|init|path` - Inspect configuration
//!
//! ## Examples
//!
//! ```bash
//! # Sentences mentioning "invoice" in two files
//! docsift search q1.pdf q1.xlsx -k invoice
//!
//! # Second page of results, as JSON
//! docsift search reports/*.pdf -k revenue --page 2 --format json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docsift_extract::ExtractorRegistry;
use docsift_session::{ExtractionUpdate, Orchestrator, Session};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod files;
mod render;
mod shell;

use config::Config;

#[derive(Parser)]
#[command(name = "docsift")]
#[command(about = "Search PDF, Word and Excel files for sentences containing a keyword")]
#[command(version)]
struct Cli {
    /// Path to config file (default: ~/.config/docsift/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload files, extract their text and print the matching sentences
    Search {
        /// Files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Keyword to search for (empty matches every sentence)
        #[arg(short, long, default_value = "")]
        keyword: String,

        /// Page of results to show
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Declare this MIME type for every file instead of guessing it
        #[arg(long)]
        mime: Option<String>,
    },

    /// Start an interactive session
    Shell,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Print sample configuration file
    Init,
    /// Show config file path
    Path,
}

/// Build the orchestrator with every extractor registered.
fn create_orchestrator(config: &Config) -> Orchestrator {
    let registry = Arc::new(ExtractorRegistry::with_defaults());
    Orchestrator::with_policy(registry, config.extract.unregistered_policy)
}

/// Log extraction progress until the current batch finishes.
pub(crate) fn spawn_progress_reporter(orchestrator: &Orchestrator) -> JoinHandle<()> {
    let mut updates = orchestrator.subscribe();
    tokio::spawn(async move {
        while let Ok(update) = updates.recv().await {
            match update {
                ExtractionUpdate::FileExtracted { name, chars } => {
                    info!("Extracted: {} ({} chars)", name, chars);
                }
                ExtractionUpdate::FileSkipped { name, reason } => {
                    info!("Skipped: {} ({})", name, reason);
                }
                ExtractionUpdate::FileFailed { name, error } => {
                    warn!("Error: {}: {}", name, error);
                }
                ExtractionUpdate::BatchFinished { .. } => break,
                ExtractionUpdate::BatchStarted { .. } | ExtractionUpdate::FileStarted { .. } => {}
            }
        }
    })
}

/// Print the current page of `session`.
pub(crate) fn print_view(session: &Session, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                render::render_json(session).context("Failed to serialize results")?
            );
        }
        OutputFormat::Text => print!("{}", render::render_text(session)),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_from(cli.config.clone()).context("Failed to load config")?;

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.log_level()
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    match cli.command {
        Commands::Search {
            files,
            keyword,
            page,
            mime,
        } => {
            let uploads =
                files::load_uploads(&files, mime.as_deref(), config.extract.max_file_size).await?;

            let mut session = Session::new(config.search.items_per_page);
            session.upload(uploads)?;

            let orchestrator = create_orchestrator(&config);
            let progress = spawn_progress_reporter(&orchestrator);
            session.extract(&orchestrator).await;
            let _ = progress.await;

            session.set_keyword(keyword);
            session.go_to_page(page);

            print_view(&session, cli.format)?;
        }

        Commands::Shell => {
            let orchestrator = create_orchestrator(&config);
            shell::run(&config, &orchestrator, cli.format).await?;
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => match cli.format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&config)
                            .context("Failed to serialize config")?
                    );
                }
                OutputFormat::Text => {
                    println!(
                        "{}",
                        toml::to_string_pretty(&config).context("Failed to serialize config")?
                    );
                }
            },
            ConfigAction::Init => {
                println!("{}", Config::sample_toml());
            }
            ConfigAction::Path => {
                if let Some(path) = Config::config_path() {
                    println!("{}", path.display());
                } else {
                    println!("Could not determine config directory");
                }
            }
        },
    }

    Ok(())
}
