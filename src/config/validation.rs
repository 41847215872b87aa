//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, limits > 0)
//! - Reject environment variable names that cannot exist
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: EchoConfig → Result<(), Vec<ValidationError>>

use crate::config::schema::EchoConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("limits.max_body_bytes must be greater than zero when set")]
    ZeroBodyLimit,

    #[error("exposure.env_vars contains an empty name")]
    EmptyEnvName,

    #[error("exposure.env_vars entry {0:?} contains '='")]
    InvalidEnvName(String),
}

pub fn validate_config(config: &EchoConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.limits.max_body_bytes == Some(0) {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    for name in &config.exposure.env_vars {
        if name.is_empty() {
            errors.push(ValidationError::EmptyEnvName);
        } else if name.contains('=') {
            errors.push(ValidationError::InvalidEnvName(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
