use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

use crate::models::{BudgetPolicy, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub ml: MlSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub budget_policy: BudgetPolicy,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeightsConfig {
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default = "default_budget_points")]
    pub budget_points: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_equipment_weight")]
    pub equipment: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_amenity_weight")]
    pub amenity: f64,
    #[serde(default = "default_bonus")]
    pub personal_trainers_bonus: u8,
    #[serde(default = "default_bonus")]
    pub classes_bonus: u8,
    #[serde(default = "default_bonus")]
    pub aircon_bonus: u8,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            budget_points: default_budget_points(),
            equipment: default_equipment_weight(),
            amenity: default_amenity_weight(),
            personal_trainers_bonus: default_bonus(),
            classes_bonus: default_bonus(),
            aircon_bonus: default_bonus(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        ScoringWeights {
            budget_points: config.budget_points,
            equipment: config.equipment,
            amenity: config.amenity,
            personal_trainers_bonus: config.personal_trainers_bonus,
            classes_bonus: config.classes_bonus,
            aircon_bonus: config.aircon_bonus,
        }
    }
}

fn default_budget_points() -> f64 { 30.0 }
fn default_equipment_weight() -> f64 { 0.5 }
fn default_amenity_weight() -> f64 { 0.0 }
fn default_bonus() -> u8 { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct MlSettings {
    #[serde(default = "default_ml_url")]
    pub url: String,
    #[serde(default = "default_ml_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_ml_cache_ttl")]
    pub cache_ttl_secs: u64,
}

impl Default for MlSettings {
    fn default() -> Self {
        Self {
            url: default_ml_url(),
            timeout_secs: default_ml_timeout(),
            cache_ttl_secs: default_ml_cache_ttl(),
        }
    }
}

fn default_ml_url() -> String { "http://127.0.0.1:8001".to_string() }
fn default_ml_timeout() -> u64 { 2 }
fn default_ml_cache_ttl() -> u64 { 600 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    /// Apply `LOG_LEVEL` / `LOG_FORMAT` style overrides on top of the file values
    pub fn with_overrides(self, level: Option<String>, format: Option<String>) -> Self {
        Self {
            level: level.filter(|l| !l.trim().is_empty()).unwrap_or(self.level),
            format: format.filter(|f| !f.trim().is_empty()).unwrap_or(self.format),
        }
    }

    pub fn is_pretty(&self) -> bool {
        self.format.eq_ignore_ascii_case("pretty")
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FITRANK_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FITRANK__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FITRANK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FITRANK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject scoring weights outside their allowed ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring
            .weights
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid scoring weights: {}", e)))
    }
}

/// Apply well-known environment variables shared with the catalog backend
///
/// `ML_SERVICE_URL` points at the learned weights service.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = std::env::var("ML_SERVICE_URL") {
        builder = builder.set_override("ml.url", url)?;
    }

    builder.build()
}
