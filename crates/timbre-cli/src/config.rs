use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use timbre_search::DEFAULT_SIMILAR_LIMIT;

/// Configuration for timbre.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (TIMBRE_* prefix)
/// 3. Config file (~/.config/timbre/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to a catalog TOML file.
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/catalog.toml
    /// - ENV: TIMBRE_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/catalog.toml"
    /// - Default: the bundled sample catalog
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Path to a synonym table TOML file.
    ///
    /// Can be set via:
    /// - CLI: --synonyms /path/to/synonyms.toml
    /// - ENV: TIMBRE_SYNONYMS_PATH
    /// - Config: synonyms_path = "/path/to/synonyms.toml"
    /// - Default: the built-in synonym table
    #[serde(default)]
    pub synonyms_path: Option<PathBuf>,

    /// How many similar tracks `timbre similar` shows.
    #[serde(default = "default_similar_limit")]
    pub similar_limit: usize,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logger settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of: error, warn, info, debug, trace.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_coloured")]
    pub coloured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            coloured: default_coloured(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            synonyms_path: None,
            similar_limit: default_similar_limit(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/timbre/config.toml
    /// Reads environment variables with TIMBRE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("timbre");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded configuration.
    #[must_use]
    pub fn with_overrides(mut self, catalog: Option<PathBuf>, synonyms: Option<PathBuf>) -> Self {
        if catalog.is_some() {
            self.catalog_path = catalog;
        }
        if synonyms.is_some() {
            self.synonyms_path = synonyms;
        }
        self
    }
}

fn default_similar_limit() -> usize {
    DEFAULT_SIMILAR_LIMIT
}

fn default_log_level() -> String {
    String::from("warn")
}

fn default_coloured() -> bool {
    true
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/timbre/config.toml
/// - macOS: ~/Library/Application Support/timbre/config.toml
/// - Windows: %APPDATA%\timbre\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("timbre")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Timbre Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (TIMBRE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Catalog of tracks to explore
#
# Can also be set via:
# - CLI: timbre --catalog /path/to/catalog.toml search chill
# - Environment: TIMBRE_CATALOG_PATH=/path/to/catalog.toml
#
# Default: the sample catalog bundled with timbre
#catalog_path = "/path/to/catalog.toml"

# Synonym table used to widen search queries
#
# A TOML file of `term = ["alternate", ...]` entries.
#
# Default: the built-in mood/genre synonym table
#synonyms_path = "/path/to/synonyms.toml"

# Number of tracks shown by `timbre similar`
similar_limit = 5

[logging]
# One of: error, warn, info, debug, trace
level = "warn"
coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
