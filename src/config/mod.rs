//! Configuration file support for rastergrid.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/rastergrid/config.toml`. Settings include the grid geometry,
//! the sidebar width, frame colors and frame pacing.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{ColorsConfig, GridConfig, PerformanceConfig, SidebarConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [grid]
/// cell_size = 5
/// width_cells = 120
/// height_cells = 120
///
/// [sidebar]
/// width = 200
///
/// [colors]
/// points = "red"
/// sidebar = [0, 100, 255]
///
/// [performance]
/// frame_rate = 60
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing grid geometry
    #[serde(default)]
    pub grid: GridConfig,

    /// Sidebar settings
    #[serde(default)]
    pub sidebar: SidebarConfig,

    /// Frame colors
    #[serde(default)]
    pub colors: ColorsConfig,

    /// Frame pacing
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `grid.cell_size`: 1 - 50
    /// - `grid.width_cells` / `grid.height_cells`: 10 - 1000
    /// - `sidebar.width`: 200 - 600
    /// - `performance.frame_rate`: 1 - 240
    pub fn validate_and_clamp(&mut self) {
        if !(1..=50).contains(&self.grid.cell_size) {
            log::warn!(
                "Invalid cell_size {}, clamping to 1-50 range",
                self.grid.cell_size
            );
            self.grid.cell_size = self.grid.cell_size.clamp(1, 50);
        }

        if !(10..=1000).contains(&self.grid.width_cells) {
            log::warn!(
                "Invalid width_cells {}, clamping to 10-1000 range",
                self.grid.width_cells
            );
            self.grid.width_cells = self.grid.width_cells.clamp(10, 1000);
        }

        if !(10..=1000).contains(&self.grid.height_cells) {
            log::warn!(
                "Invalid height_cells {}, clamping to 10-1000 range",
                self.grid.height_cells
            );
            self.grid.height_cells = self.grid.height_cells.clamp(10, 1000);
        }

        if !(200..=600).contains(&self.sidebar.width) {
            log::warn!(
                "Invalid sidebar width {}, clamping to 200-600 range",
                self.sidebar.width
            );
            self.sidebar.width = self.sidebar.width.clamp(200, 600);
        }

        if !(1..=240).contains(&self.performance.frame_rate) {
            log::warn!(
                "Invalid frame_rate {}, clamping to 1-240 range",
                self.performance.frame_rate
            );
            self.performance.frame_rate = self.performance.frame_rate.clamp(1, 240);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/rastergrid/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("rastergrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`load`](Config::load), a missing file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text without validation.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config
    /// directory and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&config_path, Self::example_toml())
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// The documented example configuration shipped with the binary.
    pub fn example_toml() -> &'static str {
        include_str!("../../config.example.toml")
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.grid.cell_size, 5);
        assert_eq!(config.sidebar.width, 200);
    }

    #[test]
    fn example_file_matches_defaults() {
        let config = Config::from_toml(Config::example_toml()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [grid]
            cell_size = 8

            [colors]
            points = [0, 255, 0]
            "#,
        )
        .unwrap();
        assert_eq!(config.grid.cell_size, 8);
        assert_eq!(config.grid.width_cells, 120);
        assert_eq!(config.colors.points, ColorSpec::Rgb([0, 255, 0]));
        assert_eq!(config.colors.text, ColorSpec::Name("white".into()));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::from_toml(
            r#"
            [grid]
            cell_size = 0
            width_cells = 5000
            height_cells = 3

            [sidebar]
            width = 50

            [performance]
            frame_rate = 1000
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.grid.cell_size, 1);
        assert_eq!(config.grid.width_cells, 1000);
        assert_eq!(config.grid.height_cells, 10);
        assert_eq!(config.sidebar.width, 200);
        assert_eq!(config.performance.frame_rate, 240);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[grid\ncell_size = ").is_err());
    }

    #[test]
    fn schema_mentions_every_section() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        for section in ["grid", "sidebar", "colors", "performance"] {
            assert!(schema.contains(section), "schema missing {section}");
        }
    }
}
