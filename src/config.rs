use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event-poll timeout in milliseconds between redraws
    #[serde(default = "default_refresh_rate")]
    pub refresh_rate_ms: u64,
}

fn default_refresh_rate() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Glyph shown on completed step markers
    #[serde(default = "default_check_glyph")]
    pub check_glyph: String,
    /// Whether to render step names under the markers
    #[serde(default = "default_show_step_names")]
    pub show_step_names: bool,
}

fn default_check_glyph() -> String {
    crate::flow::CHECK_GLYPH.to_string()
}

fn default_show_step_names() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            check_glyph: default_check_glyph(),
            show_step_names: default_show_step_names(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Whether TUI mode logs to a file (stderr would corrupt the screen)
    #[serde(default = "default_log_to_file")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_log_to_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for log files
    #[serde(default = "default_logs_dir")]
    pub logs: String,
}

fn default_logs_dir() -> String {
    ".stepflow/logs".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            logs: default_logs_dir(),
        }
    }
}

impl Config {
    /// Path to the project-local config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from("stepflow.toml")
    }

    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Start with embedded defaults so stepflow works without config files
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        // Project-local config (primary config location)
        let project_config = Self::project_config_path();
        if project_config.exists() {
            builder = builder.add_source(config::File::from(project_config));
        }

        // User config in ~/.config/stepflow/ (optional global overrides)
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("stepflow").join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment variables with STEPFLOW_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("STEPFLOW")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Save config to the project-local file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::project_config_path();

        let toml_str =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(&config_path, toml_str).context("Failed to write config file")?;

        Ok(())
    }

    /// Get absolute path to the logs directory
    pub fn logs_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.paths.logs);
        if path.is_absolute() {
            path
        } else {
            std::env::current_dir().unwrap_or_default().join(path)
        }
    }
}
