//! Config loader: assembles the layered sources into a [`ContentConfig`].

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::ContentConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Order (later wins): defaults, credential variables, global file,
    /// workspace `config/config.toml`, workspace `config/{env}.toml`,
    /// `CONTENT_INTEL__*` variables.
    pub fn load(workspace_root: &Path) -> Result<ContentConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = environment::add_credential_defaults(builder)?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        builder.build()?.try_deserialize()
    }

    /// Load configuration from one explicit file, still honoring environment overrides.
    pub fn load_from_file(path: &Path) -> Result<ContentConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let builder = merge_policy::builder_with_defaults()?;
        let builder = environment::add_credential_defaults(builder)?;
        let builder = builder.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);

        builder.build()?.try_deserialize()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
