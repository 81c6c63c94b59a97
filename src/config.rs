use crate::constants::{
    DEFAULT_DATASET_ID, DEFAULT_ENDPOINT, DEFAULT_OUTPUT_FORMAT, DEFAULT_OUTPUT_PATH,
    DEFAULT_TOKEN_ENV,
};
use crate::errors::{AppError, AppResult};
use crate::extractor::validate_dataset_id;
use crate::models::OutputFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved configuration with all values filled in (no Options).
///
/// This struct represents the pipeline defaults and can be deserialized by the TOML
/// loader. All fields have concrete values, making it safe to access directly without unwrapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Socrata host, with or without scheme (`https://` is assumed when omitted)
    pub endpoint: String,
    /// Socrata four-by-four dataset identifier
    pub dataset_id: String,
    /// Name of the environment variable holding the application token
    pub token_env: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,

    // Output
    /// Destination file for the prepared table
    pub output_path: PathBuf,
    /// `"parquet"` or `"csv"`
    pub output_format: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            dataset_id: DEFAULT_DATASET_ID.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            timeout_secs: 60,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
        }
    }
}

impl ResolvedConfig {
    /// Parses `output_format` into an [`OutputFormat`].
    pub fn format(&self) -> AppResult<OutputFormat> {
        self.output_format.parse()
    }

    /// Checks values that serde cannot express as types.
    pub fn validate(&self) -> AppResult<()> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidInput(
                "Timeout must be greater than 0".into(),
            ));
        }
        if self.endpoint.trim().is_empty() {
            return Err(AppError::InvalidInput("Endpoint must not be empty".into()));
        }
        validate_dataset_id(&self.dataset_id)?;
        self.format()?;
        Ok(())
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// Every key is optional; missing keys fall back to [`ResolvedConfig::default`].
    /// Unknown keys are rejected to catch typos.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, and `InvalidInput` if the TOML is
    /// malformed, unknown keys are present, or a value fails [`ResolvedConfig::validate`].
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::IoError(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config: ResolvedConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = ResolvedConfig::default();
        assert_eq!(config.endpoint, "www.datos.gov.co");
        assert_eq!(config.dataset_id, "xvdy-vvsk");
        assert_eq!(config.token_env, "SOCRATA_APP_TOKEN");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.format().unwrap(), OutputFormat::Parquet);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = ResolvedConfig {
            timeout_secs: 0,
            ..ResolvedConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_dataset_id_is_rejected() {
        let config = ResolvedConfig {
            dataset_id: "not a dataset".to_string(),
            ..ResolvedConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let config = ResolvedConfig {
            output_format: "xlsx".to_string(),
            ..ResolvedConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
