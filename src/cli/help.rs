//! CLI command-name contract for logging and routing.

use crate::cli::parse::{Commands, ConfigCommands};

/// Command name string for log events (e.g. "bulk", "config.validate").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Listing { .. } => "listing",
        Commands::Ad { .. } => "ad",
        Commands::Bulk { .. } => "bulk",
        Commands::Research { .. } => "research",
        Commands::Config { command } => match command {
            ConfigCommands::Show => "config.show",
            ConfigCommands::Validate => "config.validate",
        },
    }
}
