//! Prefix Tree - Main entrypoint.
//!
//! Loads a word list into a prefix tree and prints every word matching each
//! requested prefix. Configuration comes from defaults, an optional file and
//! `PREFIX_TREE_*` environment variables, with command-line flags on top.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use prefix_tree_lib::config::{AppConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use prefix_tree_lib::error::{AppError, AppResult};
use prefix_tree_lib::word_list;
use prefix_tree_lib::PrefixTree;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the prefix tree tool.
#[derive(Parser, Debug)]
#[clap(name = "prefix_tree", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser, global = true)]
    config: Option<PathBuf>,

    /// Store words exactly as given instead of lowercasing them
    #[clap(long, global = true)]
    case_sensitive: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Load a word list and print the words matching each prefix
    Match {
        /// Whitespace-delimited word list (defaults to the bundled text)
        #[clap(short, long, value_parser)]
        words: Option<PathBuf>,

        /// Prefixes to look up (defaults to the configured ones)
        prefixes: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| AppError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the configuration, logging and exiting on failure.
fn load_config_or_exit(loader: &ConfigLoader) -> AppConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not configured yet, fall back to defaults to report
            let _ = init_logging(&LogConfig::default());
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    }
}

/// Builds the tree from the configured word list and prints one report per prefix.
fn run_match(config: &AppConfig) -> AppResult<()> {
    let mut tree = PrefixTree::with_config(config.tree.clone());
    match &config.demo.words {
        Some(path) => word_list::load_words_from_path(&mut tree, path)?,
        None => word_list::load_bundled_words(&mut tree)?,
    };

    info!(
        words = tree.len(),
        nodes = tree.node_count(),
        case_fold = tree.case_fold(),
        "Prefix tree ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for prefix in &config.demo.prefixes {
        let words = tree.match_prefix(prefix.as_str())?;
        writeln!(out, "{}", word_list::format_report(prefix, &words))?;
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> AppResult<()> {
    let args = Args::parse();
    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.unwrap_or(Command::Match {
        words: None,
        prefixes: Vec::new(),
    }) {
        Command::Match { words, prefixes } => {
            let mut config = load_config_or_exit(&config_loader);
            init_logging(&config.log)?;

            if args.case_sensitive {
                config.tree.case_fold = false;
            }
            if words.is_some() {
                config.demo.words = words;
            }
            if !prefixes.is_empty() {
                config.demo.prefixes = prefixes;
            }

            run_match(&config)
        }
        Command::Validate => {
            let config = load_config_or_exit(&config_loader);
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            let toml = AppConfig::default().to_toml()?;

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
