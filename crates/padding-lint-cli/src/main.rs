//! padding-lint CLI tool.
//!
//! Usage:
//! ```bash
//! padding-lint check [OPTIONS] [PATH]
//! padding-lint list-types
//! padding-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Blank line linter for JavaScript and TypeScript statements
#[derive(Parser)]
#[command(name = "padding-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check blank lines between statements
    Check {
        /// File or directory to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Rewrite files with the available fixes
        #[arg(long)]
        fix: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// List statement types and presets
    ListTypes,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Source snippets with labels.
    Pretty,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            fix,
            format,
            exclude,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            let failed = commands::check::run(&path, fix, format, exclude, &source)?;
            Ok(if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::ListTypes => {
            print!("{}", commands::list_types::render());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { force } => {
            commands::init::run(std::path::Path::new("."), force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
