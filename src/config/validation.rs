//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (pool capacities non-zero)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: MessageConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::MessageConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A pool was configured with zero capacity.
    ZeroCapacity {
        /// Which pool the capacity belongs to.
        pool: &'static str,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::ZeroCapacity { pool } => {
                write!(f, "{} capacity must be at least 1", pool)
            }
        }
    }
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &MessageConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let pools = [
        ("uri_pool", config.uri_pool.capacity),
        ("request_pool", config.request_pool.capacity),
        ("response_pool", config.response_pool.capacity),
        ("server_request_pool", config.server_request_pool.capacity),
    ];
    for (pool, capacity) in pools {
        if capacity == 0 {
            errors.push(ValidationError::ZeroCapacity { pool });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&MessageConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_capacities_are_all_reported() {
        let mut config = MessageConfig::default();
        config.uri_pool.capacity = 0;
        config.response_pool.capacity = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::ZeroCapacity { pool: "uri_pool" }));
    }
}
