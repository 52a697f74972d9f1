//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dataset::PayloadRange;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Launch dataset location
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

fn default_dataset_path() -> String {
    "spacex_launch_dash.csv".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Page and control surface configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_slider_min")]
    pub slider_min: f64,

    #[serde(default = "default_slider_max")]
    pub slider_max: f64,

    #[serde(default = "default_slider_step")]
    pub slider_step: f64,

    /// Slider tick positions (kg)
    #[serde(default = "default_marks")]
    pub marks: Vec<f64>,
}

fn default_title() -> String {
    "SpaceX Launch Records Dashboard".to_string()
}

fn default_slider_min() -> f64 {
    0.0
}

fn default_slider_max() -> f64 {
    10_000.0
}

fn default_slider_step() -> f64 {
    1_000.0
}

fn default_marks() -> Vec<f64> {
    vec![0.0, 2_500.0, 5_000.0, 7_500.0, 10_000.0]
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            slider_min: default_slider_min(),
            slider_max: default_slider_max(),
            slider_step: default_slider_step(),
            marks: default_marks(),
        }
    }
}

impl DashboardConfig {
    /// Slider domain as a payload range
    pub fn slider_domain(&self) -> PayloadRange {
        PayloadRange::new(self.slider_min, self.slider_max)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `LAUNCHBOARD_CONFIG`, then default locations, then environment.
    ///
    /// Nothing is logged here; call [`LoadedConfig::log`] once tracing is up.
    pub fn load_default() -> Result<LoadedConfig, ConfigError> {
        let explicit = std::env::var("LAUNCHBOARD_CONFIG").ok().map(PathBuf::from);

        let candidates: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("launchboard").join("config.toml")),
            Some(PathBuf::from("/etc/launchboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::discover(explicit, &candidates, |key| std::env::var(key).ok())
    }

    fn discover<F>(
        explicit: Option<PathBuf>,
        candidates: &[PathBuf],
        var: F,
    ) -> Result<LoadedConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        // An explicitly named file must load
        let (mut config, source) = match explicit {
            Some(path) => (Self::load(&path)?, Some(path)),
            None => {
                let mut found = None;
                for path in candidates.iter().filter(|p| p.exists()) {
                    match Self::load(path) {
                        Ok(config) => {
                            found = Some((config, path.clone()));
                            break;
                        }
                        Err(e) => warnings.push(format!("Skipping config file: {}", e)),
                    }
                }
                match found {
                    Some((config, path)) => (config, Some(path)),
                    None => (Config::default(), None),
                }
            }
        };

        warnings.extend(config.apply_overrides(var));

        Ok(LoadedConfig {
            config,
            source,
            warnings,
        })
    }

    /// Apply `LAUNCHBOARD_*` overrides, returning a warning per ignored value
    fn apply_overrides<F>(&mut self, var: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        if let Some(path) = var("LAUNCHBOARD_DATASET") {
            self.dataset.path = path;
        }

        if let Some(host) = var("LAUNCHBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("LAUNCHBOARD_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => warnings.push(format!("Ignoring invalid LAUNCHBOARD_PORT {:?}", port)),
            }
        }

        if let Some(level) = var("LAUNCHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("LAUNCHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }

        warnings
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.dashboard;
        if !d.slider_min.is_finite() || !d.slider_max.is_finite() || d.slider_min >= d.slider_max {
            return Err(ConfigError::Invalid(format!(
                "dashboard slider domain [{}, {}] is empty",
                d.slider_min, d.slider_max
            )));
        }
        if !d.slider_step.is_finite() || d.slider_step <= 0.0 {
            return Err(ConfigError::Invalid(
                "dashboard slider_step must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// A resolved configuration and the diagnostics gathered while resolving it
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the settings came from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    /// Skipped config files and ignored environment overrides
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    pub fn log(&self) {
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Launchboard Configuration
#
# Environment variables override these settings:
# - LAUNCHBOARD_CONFIG (path to this file)
# - LAUNCHBOARD_DATASET
# - LAUNCHBOARD_HOST
# - LAUNCHBOARD_PORT
# - LAUNCHBOARD_LOG_LEVEL
# - LAUNCHBOARD_LOG_FORMAT

[dataset]
# Launch CSV with Launch Site, Payload Mass (kg), Booster Version Category and class columns
path = "spacex_launch_dash.csv"

[server]
# HTTP server host
host = "0.0.0.0"

# HTTP server port
port = 8050

# Allowed CORS origins (empty = allow any)
cors_origins = []

[dashboard]
# Page heading
title = "SpaceX Launch Records Dashboard"

# Payload slider domain and step (kg)
slider_min = 0
slider_max = 10000
slider_step = 1000

# Slider tick marks (kg)
marks = [0, 2500, 5000, 7500, 10000]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
