//! CLI route: single route table and run context. Dispatches to `ContentApi` and presentation.

use crate::api::ContentApi;
use crate::cli::help::command_name;
use crate::cli::input::read_input;
use crate::cli::parse::{Commands, ConfigCommands, OutputFormat};
use crate::cli::presentation::{
    format_ad_copy, format_brief, format_bulk_report, format_config_show, format_listing,
    format_validation_errors,
};
use crate::config::{ConfigLoader, ContentConfig};
use crate::error::ApiError;
use crate::types::{AdRequest, BulkAdRequest, ListingRequest, ResearchRequest};
use std::future::Future;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace, config path and the loaded configuration.
pub struct RunContext {
    config: ContentConfig,
    workspace_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::with_config(config, workspace_root, config_path))
    }

    pub fn with_config(
        config: ContentConfig,
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
    ) -> Self {
        Self {
            config,
            workspace_root,
            config_path,
        }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands, format: OutputFormat) -> Result<String, ApiError> {
        let started = Instant::now();
        let name = command_name(command);
        debug!(command = name, workspace = %self.workspace_root.display(), "executing command");

        let result = match command {
            Commands::Config { command } => self.handle_config(command, format),
            content => {
                let api = ContentApi::from_config(&self.config)?;
                self.handle_content(&api, content, format)
            }
        };

        info!(
            command = name,
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "command finished"
        );
        result
    }

    /// Route a content command against an already-built API.
    pub fn handle_content(
        &self,
        api: &ContentApi,
        command: &Commands,
        format: OutputFormat,
    ) -> Result<String, ApiError> {
        match command {
            Commands::Listing { input } => {
                let request: ListingRequest = read_input(input)?;
                let listing = block_on(api.generate_listing(&request))??;
                Ok(format_listing(&listing, format))
            }
            Commands::Ad { input } => {
                let request: AdRequest = read_input(input)?;
                let copy = block_on(api.generate_ad(&request))??;
                Ok(format_ad_copy(&copy, format))
            }
            Commands::Bulk { input, chunk_size } => {
                let request: BulkAdRequest = read_input(input)?;
                let report = block_on(api.generate_ads_bulk(&request.items, *chunk_size))??;
                Ok(format_bulk_report(&report, format))
            }
            Commands::Research { input } => {
                let request: ResearchRequest = read_input(input)?;
                let brief = block_on(api.generate_research_brief(&request))??;
                Ok(format_brief(&brief, format))
            }
            Commands::Config { command } => self.handle_config(command, format),
        }
    }

    fn handle_config(
        &self,
        command: &ConfigCommands,
        format: OutputFormat,
    ) -> Result<String, ApiError> {
        match command {
            ConfigCommands::Show => Ok(format_config_show(&self.config, format)),
            ConfigCommands::Validate => match self.config.validate() {
                Ok(()) => {
                    let source = self
                        .config_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "layered sources".to_string());
                    Ok(format!("Configuration is valid ({}).", source))
                }
                Err(errors) => {
                    eprint!("{}", format_validation_errors(&errors));
                    Err(self.config.ensure_valid().err().unwrap_or_else(|| {
                        ApiError::ConfigError("Configuration validation failed".to_string())
                    }))
                }
            },
        }
    }
}

/// Drive one future to completion on a fresh runtime.
///
/// Refuses to run when already inside a tokio runtime, where nesting would panic.
fn block_on<F: Future>(future: F) -> Result<F::Output, ApiError> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(ApiError::ConfigError(
            "Cannot run a content command from within an async runtime".to_string(),
        ));
    }
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| ApiError::ConfigError(format!("Failed to create async runtime: {}", e)))?;
    Ok(runtime.block_on(future))
}
