//! Builder configuration loaded from environment variables and config files.
//!
//! Supports `.env` files for development and environment variables for production.
//! Config precedence: env vars > .env file > builders.toml > defaults

use serde::Deserialize;
use std::sync::OnceLock;

use crate::validation;

static CONFIG: OnceLock<BuilderConfig> = OnceLock::new();

/// Get the global builder configuration, if [`init`] has run.
pub fn get() -> Option<&'static BuilderConfig> {
    CONFIG.get()
}

/// Load configuration without touching global state.
pub fn load() -> Result<BuilderConfig, config::ConfigError> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    let cfg = config::Config::builder()
        .set_default("validation.enabled", true)?
        // Optional config file
        .add_source(config::File::with_name("builders").required(false))
        // Environment variables (NEXUS_VALIDATION__ENABLED, ...)
        .add_source(environment())
        .build()?;

    cfg.try_deserialize()
}

/// Environment variables: `NEXUS_VALIDATION__ENABLED` maps to `validation.enabled`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("NEXUS")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Initialize the global configuration and apply it.
///
/// Should be called once at startup. Later calls return the first config
/// without reloading.
pub fn init() -> Result<&'static BuilderConfig, config::ConfigError> {
    if let Some(existing) = CONFIG.get() {
        return Ok(existing);
    }

    let loaded = load()?;
    let cfg = CONFIG.get_or_init(|| loaded);
    validation::set_validation_enabled(cfg.validation.enabled);

    tracing::info!(
        validation_enabled = cfg.validation.enabled,
        "builder configuration loaded"
    );
    Ok(cfg)
}

#[derive(Debug, Deserialize, Clone)]
pub struct BuilderConfig {
    pub validation: ValidationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ValidationConfig {
    /// Run per-field validators in setters. Cross-field checks always run.
    pub enabled: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            validation: ValidationConfig { enabled: true },
        }
    }
}
