//! Validation, canonicalization, and value scoring for retail computer listings.

pub mod config;
pub mod error;
pub mod listings;
pub mod telemetry;

pub use config::AppConfig;
pub use error::AppError;
pub use listings::{ComputerChanges, ComputerFields, ComputerRecord, ValidationError};

/// Load configuration and install tracing for a host process.
pub fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    tracing::info!(
        log_level = %config.telemetry.log_level,
        unknown_fields = ?config.intake.unknown_fields,
        "listing engine configured"
    );
    Ok(config)
}
