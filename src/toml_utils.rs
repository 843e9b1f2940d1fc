// -- imports
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::convert::ConvertArgs;
use crate::error::{AppError, Result};

// -- config

/// The `[convert]` table. Unset keys fall through to the command line or the
/// built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub directory: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub sort: Option<bool>,
    pub var_name: Option<String>,
    pub parallel: Option<bool>,
    pub verbose: Option<bool>,
}

impl ConvertConfig {
    /// Overwrite the fields of `args` that this config sets.
    pub fn apply_to(self, args: &mut ConvertArgs) {
        if let Some(directory) = self.directory {
            args.directory = directory;
        }
        if let Some(output) = self.output {
            args.output = output;
        }
        if let Some(sort) = self.sort {
            args.sort = sort;
        }
        if let Some(var_name) = self.var_name {
            args.var_name = var_name;
        }
        if let Some(parallel) = self.parallel {
            args.parallel = parallel;
        }
        if let Some(verbose) = self.verbose {
            args.verbose = verbose;
        }
    }
}

impl From<ConvertConfig> for ConvertArgs {
    fn from(config: ConvertConfig) -> Self {
        let mut args = ConvertArgs::default();
        config.apply_to(&mut args);
        args
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct TomlConfig {
    convert: ConvertConfig,
}

impl TomlConfig {
    /// Parse TOML config file with explicit project root for path resolution.
    ///
    /// # Arguments
    ///
    /// * `toml_path` - Path to the TOML config file
    /// * `project_root` - Base directory for resolving relative paths
    ///
    /// # Errors
    ///
    /// Returns `AppError` if:
    /// - The path is not a valid toml file
    /// - File read fails
    /// - TOML parsing fails
    pub fn from_toml(toml_path: &Path, project_root: &Path) -> Result<Self> {
        if !toml_path.is_file() || toml_path.extension().is_none_or(|ext| ext != "toml") {
            return Err(AppError::Config(format!(
                "TOML config path is not a valid .toml file: {:?}",
                toml_path
            )));
        }

        let content = std::fs::read_to_string(toml_path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.resolve_paths(project_root);

        Ok(config)
    }

    /// Resolve relative paths set in the file against project root
    fn resolve_paths(&mut self, project_root: &Path) {
        let convert = &mut self.convert;
        for path in [&mut convert.directory, &mut convert.output]
            .into_iter()
            .flatten()
        {
            if !path.is_absolute() {
                *path = project_root.join(&*path);
            }
        }
    }
}

impl From<TomlConfig> for ConvertConfig {
    fn from(config: TomlConfig) -> Self {
        config.convert
    }
}

// -- public API

/// Parse TOML config file and return its `[convert]` table.
///
/// # Arguments
///
/// * `toml_path` - Path to the TOML config file
/// * `project_root` - Base directory for resolving relative paths
///
/// # Errors
///
/// Returns `AppError` if TOML parsing or path resolution fails.
pub fn parse_toml(toml_path: &Path, project_root: &Path) -> Result<ConvertConfig> {
    TomlConfig::from_toml(toml_path, project_root).map(Into::into)
}

// -- tests
