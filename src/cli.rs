//! CLI domain: parse, route, help, output, and presentation only.
//! No generation logic lives here; the route table dispatches to `ContentApi`.

mod help;
mod input;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use input::read_input;
pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands, OutputFormat};
pub use presentation::{
    format_ad_copy, format_brief, format_bulk_report, format_config_show, format_listing,
    format_validation_errors, redact_config,
};
pub use route::RunContext;
