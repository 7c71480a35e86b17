//! Config validation
//!
//! Rules:
//! - subsystem / category non-empty
//! - force_logging_var non-empty, no '=' or NUL

use contracts::{ContractError, LoggerConfig};

/// Validate a LoggerConfig
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(config: &LoggerConfig) -> Result<(), ContractError> {
    validate_identifier("subsystem", &config.subsystem)?;
    validate_identifier("category", &config.category)?;
    validate_env_var_name(&config.force_logging_var)?;
    Ok(())
}

fn validate_identifier(field: &str, value: &str) -> Result<(), ContractError> {
    if value.trim().is_empty() {
        return Err(ContractError::config_validation(
            field,
            format!("{field} must not be empty"),
        ));
    }
    Ok(())
}

/// The name must be something `std::env::var_os` can look up.
fn validate_env_var_name(name: &str) -> Result<(), ContractError> {
    if name.is_empty() {
        return Err(ContractError::config_validation(
            "force_logging_var",
            "environment variable name must not be empty",
        ));
    }
    if name.contains(['=', '\0']) {
        return Err(ContractError::config_validation(
            "force_logging_var",
            format!("invalid environment variable name: {name:?}"),
        ));
    }
    Ok(())
}
