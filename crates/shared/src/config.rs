//! Application configuration management.

use chrono::NaiveDate;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rule snapshot configuration.
    #[serde(default)]
    pub rules: RulesConfig,
    /// Engine tuning.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the rule snapshot comes from and which date it is evaluated at.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    /// Path to a TOML rule snapshot.
    #[serde(default = "default_rules_path")]
    pub path: String,
    /// Evaluation date override. Defaults to today when absent.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            path: default_rules_path(),
            as_of: None,
        }
    }
}

fn default_rules_path() -> String {
    "config/rules/vn-statutory.toml".to_string()
}

/// Engine tuning.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Worker threads for batch computations. `None` lets rayon decide.
    #[serde(default)]
    pub parallelism: Option<usize>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "nongsan=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("NONGSAN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Evaluation date for rule resolution.
    #[must_use]
    pub fn as_of(&self, today: NaiveDate) -> NaiveDate {
        self.rules.as_of.unwrap_or(today)
    }
}
