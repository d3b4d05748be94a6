//! Validation utilities.

use prtrigger_config::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push_str("\n  - Missing env. var.: ");
        error.push_str(name);
    }

    let mut error = String::new();

    // Both credentials are needed before anything is sent
    if config.api.github.token.is_empty() {
        _missing(&mut error, "INPUT_TOKEN");
    }
    if config.api.teamcity.token.is_empty() {
        _missing(&mut error, "INPUT_TEAMCITY");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
