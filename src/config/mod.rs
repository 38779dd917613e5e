use std::env;
use std::fmt;

use crate::listings::UnknownFieldPolicy;

/// Top-level configuration for hosts embedding the listing engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
    pub intake: IntakeConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let unknown_fields = match env::var("APP_UNKNOWN_FIELDS") {
            Ok(value) => UnknownFieldPolicy::parse(&value)
                .ok_or(ConfigError::InvalidUnknownFieldPolicy { value })?,
            Err(_) => UnknownFieldPolicy::default(),
        };

        Ok(Self {
            telemetry: TelemetryConfig { log_level },
            intake: IntakeConfig { unknown_fields },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// How loose field maps are decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeConfig {
    pub unknown_fields: UnknownFieldPolicy,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidUnknownFieldPolicy { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidUnknownFieldPolicy { value } => write!(
                f,
                "APP_UNKNOWN_FIELDS must be 'ignore' or 'reject', got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_UNKNOWN_FIELDS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.intake.unknown_fields, UnknownFieldPolicy::Ignore);
    }

    #[test]
    fn reads_reject_policy() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_UNKNOWN_FIELDS", "Reject");
        env::set_var("APP_LOG_LEVEL", "debug");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.intake.unknown_fields, UnknownFieldPolicy::Reject);
        assert_eq!(config.telemetry.log_level, "debug");
        reset_env();
    }

    #[test]
    fn rejects_unknown_policy_names() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_UNKNOWN_FIELDS", "sometimes");
        let error = AppConfig::load().expect_err("invalid policy");
        assert!(error.to_string().contains("sometimes"));
        reset_env();
    }
}
