//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/probtree/probtree.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `PROBTREE_*` prefix (`__` separates nested keys)
//!
//! Command line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::LayoutParams;

/// Geometry of the exported tree drawing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance between neighbouring nodes of one level
    pub horizontal_spacing: f64,
    /// Distance between levels
    pub vertical_spacing: f64,
    /// Node area per unit of probability
    pub size_scale: f64,
    /// Node area of an impossible outcome
    pub size_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let params = LayoutParams::default();
        Self {
            horizontal_spacing: params.horizontal_spacing,
            vertical_spacing: params.vertical_spacing,
            size_scale: params.size_scale,
            size_offset: params.size_offset,
        }
    }
}

/// Unified configuration for probtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Directory receiving exported tree files (default: current directory)
    pub output_dir: PathBuf,
    /// Export a file for every scenario run
    pub render: bool,
    /// Decimal places for printed probabilities
    pub precision: usize,
    /// Largest accepted number of coin flips
    pub max_flips: u32,
    pub layout: LayoutConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            render: true,
            precision: 4,
            max_flips: 16,
            layout: LayoutConfig::default(),
        }
    }
}

/// Hard upper bound for `max_flips`: a coin tree has `2^(n+1) - 1` nodes.
pub const MAX_FLIPS_CEILING: u32 = 24;

/// Get the XDG config directory for probtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "probtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("probtree.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut builder = Self::with_defaults(Config::builder())?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(path) = config_file {
            debug!("explicit config: {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("PROBTREE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.expand_paths();
        settings.validate()?;

        Ok(settings)
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ApplicationError> {
        let defaults = Settings::default();
        builder
            .set_default(
                "output_dir",
                defaults.output_dir.to_string_lossy().to_string(),
            )
            .and_then(|b| b.set_default("render", defaults.render))
            .and_then(|b| b.set_default("precision", defaults.precision as i64))
            .and_then(|b| b.set_default("max_flips", i64::from(defaults.max_flips)))
            .and_then(|b| {
                b.set_default(
                    "layout.horizontal_spacing",
                    defaults.layout.horizontal_spacing,
                )
            })
            .and_then(|b| {
                b.set_default("layout.vertical_spacing", defaults.layout.vertical_spacing)
            })
            .and_then(|b| b.set_default("layout.size_scale", defaults.layout.size_scale))
            .and_then(|b| b.set_default("layout.size_offset", defaults.layout.size_offset))
            .map_err(config_err)
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let raw = self.output_dir.to_string_lossy().to_string();
        let expanded = shellexpand::full(&raw)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| raw.clone());
        self.output_dir = PathBuf::from(expanded);
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.layout.horizontal_spacing <= 0.0 || self.layout.vertical_spacing <= 0.0 {
            return Err(ApplicationError::Config {
                message: "layout spacing must be positive".to_string(),
            });
        }
        if self.max_flips > MAX_FLIPS_CEILING {
            return Err(ApplicationError::Config {
                message: format!(
                    "max_flips must be at most {}, got {}",
                    MAX_FLIPS_CEILING, self.max_flips
                ),
            });
        }
        if self.precision > 12 {
            return Err(ApplicationError::Config {
                message: format!("precision must be at most 12, got {}", self.precision),
            });
        }
        Ok(())
    }

    /// Layout parameters for the renderers.
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            horizontal_spacing: self.layout.horizontal_spacing,
            vertical_spacing: self.layout.vertical_spacing,
            size_scale: self.layout.size_scale,
            size_offset: self.layout.size_offset,
            precision: self.precision,
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# probtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/probtree/probtree.toml
#   File:   probtree --config <file>
#   Env:    PROBTREE_* environment variables (PROBTREE_LAYOUT__SIZE_SCALE=...)

# Directory for exported tree files
# output_dir = "."

# Export a DOT file for every run
# render = true

# Decimal places for printed probabilities
# precision = 4

# Largest accepted number of coin flips (the tree has 2^n leaves, at most 24)
# max_flips = 16

[layout]
# horizontal_spacing = 1.5
# vertical_spacing = 2.5
# size_scale = 2000.0
# size_offset = 500.0
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
