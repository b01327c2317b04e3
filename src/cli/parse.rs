//! CLI parse: clap types for content-intel. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// content-intel - Listing copy, ad copy and research briefs from a completion model
#[derive(Parser)]
#[command(name = "content-intel")]
#[command(about = "Generate product listings, ad copy and research briefs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (where config/ is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a product listing
    Listing {
        /// JSON request file, or "-" for stdin
        #[arg(long, short)]
        input: PathBuf,
    },
    /// Generate ad copy for one product
    Ad {
        /// JSON request file, or "-" for stdin
        #[arg(long, short)]
        input: PathBuf,
    },
    /// Generate ad copy for many products
    Bulk {
        /// JSON file with an "items" array, or "-" for stdin
        #[arg(long, short)]
        input: PathBuf,
        /// Items generated concurrently per chunk (default from config)
        #[arg(long)]
        chunk_size: Option<usize>,
    },
    /// Build a research brief for a topic
    Research {
        /// JSON request file, or "-" for stdin
        #[arg(long, short)]
        input: PathBuf,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the merged configuration with secrets redacted
    Show,
    /// Load and validate configuration
    Validate,
}
