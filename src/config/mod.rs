//! Runtime settings for the portal binary.
//!
//! Everything comes from `FIELDFLOW__*` environment variables (a `.env`
//! file is honoured in development); sections nest with `__`.
//!
//! ```no_run
//! use fieldflow::config::{init_tracing, AppConfig};
//!
//! let settings = AppConfig::load()?;
//! settings.validate()?;
//! init_tracing(&settings.logging)?;
//! # Ok::<(), fieldflow::config::ConfigError>(())
//! ```

mod error;
mod features;
mod logging;
mod session;

pub use error::{ConfigError, ConfigValidationError};
pub use features::FeatureFlags;
pub use logging::{init_tracing, LogFormat, LoggingConfig};
pub use session::SessionConfig;

use serde::Deserialize;

/// All settings, grouped by section.
///
/// Every section has defaults, so an empty environment yields a working
/// demo configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Log level and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Demo user, starting role and seed data
    #[serde(default)]
    pub session: SessionConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Reads the environment into typed sections.
    ///
    /// `FIELDFLOW__SESSION__DEFAULT_ROLE=auditor` sets `session.default_role`.
    /// Missing keys fall back to section defaults.
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when a value has the wrong shape.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FIELDFLOW")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Checks each section, reporting the first problem found.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.logging.validate()?;
        self.session.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserRole;
    use std::env;
    use std::sync::Mutex;

    // Process environment is shared across test threads.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "FIELDFLOW__LOGGING__LEVEL",
        "FIELDFLOW__LOGGING__FORMAT",
        "FIELDFLOW__SESSION__DEFAULT_ROLE",
        "FIELDFLOW__SESSION__USER_NAME",
        "FIELDFLOW__FEATURES__REQUIRE_CLOSE_CONFIRMATION",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn empty_environment_yields_demo_defaults() {
        let _env = ENV_MUTEX.lock().unwrap_or_else(|p| p.into_inner());
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.session.default_role, UserRole::Admin);
        assert!(config.features.require_close_confirmation);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nested_variables_override_sections() {
        let _env = ENV_MUTEX.lock().unwrap_or_else(|p| p.into_inner());
        env::set_var("FIELDFLOW__LOGGING__LEVEL", "debug");
        env::set_var("FIELDFLOW__LOGGING__FORMAT", "json");
        env::set_var("FIELDFLOW__SESSION__DEFAULT_ROLE", "auditor");
        env::set_var("FIELDFLOW__SESSION__USER_NAME", "Jane Doe");
        env::set_var("FIELDFLOW__FEATURES__REQUIRE_CLOSE_CONFIRMATION", "false");
        let loaded = AppConfig::load();
        clear_env();

        let config = loaded.unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.session.default_role, UserRole::Auditor);
        assert_eq!(config.session.user_name, "Jane Doe");
        assert!(!config.features.require_close_confirmation);
    }

    #[test]
    fn malformed_filter_fails_validation() {
        let config = AppConfig {
            logging: LoggingConfig {
                level: "very=verbose=please".to_string(),
                format: LogFormat::Pretty,
            },
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidLogLevel(_))
        ));
    }
}
