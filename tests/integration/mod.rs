//! Integration tests for content-intel

mod bulk_scheduling;
mod cli_commands;
mod config_loading;
mod listing_generation;
mod test_utils;
