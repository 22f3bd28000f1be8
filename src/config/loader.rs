//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::MessageConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<MessageConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MessageConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let path = "test_message_pool_config.toml";
        fs::write(path, "[uri_pool]\ncapacity = 32\n").unwrap();

        let config = load_config(Path::new(path)).unwrap();
        assert_eq!(config.uri_pool.capacity, 32);
        assert_eq!(
            config.request_pool.capacity,
            crate::pool::DEFAULT_CAPACITY
        );

        // Cleanup
        std::fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_zero_capacity_fails_validation() {
        let path = "test_message_pool_config_invalid.toml";
        fs::write(path, "[response_pool]\ncapacity = 0\n").unwrap();

        let err = load_config(Path::new(path)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        std::fs::remove_file(path).unwrap_or_default();
    }
}
