//! Extraction of the contract population from the SECOP Socrata dataset.
//!
//! The main entry point is [`extract_data`], which issues the fixed query built by
//! [`build_query`] and returns the result as a raw contract table.

mod client;
mod query;
mod records;

// Re-export public API
pub use client::{normalize_endpoint, parse_records, Record, SocrataClient};
pub use query::build_query;
pub use records::records_to_table;

use crate::config::ResolvedConfig;
use crate::constants::DATASET_ID_PATTERN;
use crate::errors::{AppError, AppResult};
use polars::prelude::DataFrame;
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{info, warn};

/// Cached regex for Socrata four-by-four dataset identifiers.
static DATASET_ID_REGEX: OnceLock<Regex> = OnceLock::new();

/// Checks that a dataset identifier has the Socrata `xxxx-xxxx` form.
pub fn validate_dataset_id(dataset_id: &str) -> AppResult<()> {
    let regex = DATASET_ID_REGEX.get_or_init(|| {
        Regex::new(DATASET_ID_PATTERN).expect("DATASET_ID_PATTERN is a valid regex pattern")
    });

    if regex.is_match(dataset_id) {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "Dataset id '{dataset_id}' is not a Socrata four-by-four identifier"
        )))
    }
}

/// Reads the application token from the environment variable `token_env`.
///
/// Empty values count as missing.
pub fn read_app_token(token_env: &str) -> Option<String> {
    std::env::var(token_env)
        .ok()
        .filter(|token| !token.trim().is_empty())
}

/// Extracts the filtered contract table from the configured endpoint.
///
/// # Behavior
///
/// - **Credential**: read from the environment variable named by `config.token_env`;
///   when absent the request is sent anonymously and the service decides.
/// - **Query**: fixed, see [`build_query`]; at most 1000 rows come back.
/// - **Empty result**: a zero-row table with the full schema, not an error.
///
/// # Errors
///
/// Returns an error if the dataset id is malformed, the service rejects the
/// credential, the request fails, or the response is not a record set. There are
/// no retries.
pub async fn extract_data(config: &ResolvedConfig) -> AppResult<DataFrame> {
    validate_dataset_id(&config.dataset_id)?;

    let app_token = read_app_token(&config.token_env);
    if app_token.is_none() {
        warn!(
            token_env = config.token_env.as_str(),
            "No application token found, querying anonymously"
        );
    }

    let client = SocrataClient::new(
        &config.endpoint,
        app_token,
        Duration::from_secs(config.timeout_secs),
    )?;
    let records = client.query(&config.dataset_id, &build_query()).await?;
    let table = records_to_table(&records)?;

    info!(contracts = table.height(), "Contracts extracted");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dataset_id() {
        assert!(validate_dataset_id("xvdy-vvsk").is_ok());
        assert!(validate_dataset_id("jbjy-vk9h").is_ok());
        assert!(validate_dataset_id("xvdy_vvsk").is_err());
        assert!(validate_dataset_id("XVDY-VVSK").is_err());
        assert!(validate_dataset_id("xvdy-vvsk.json").is_err());
    }

    #[test]
    fn test_read_app_token_missing_variable() {
        assert_eq!(read_app_token("SECOP_CLI_TEST_UNSET_TOKEN_VARIABLE"), None);
    }
}
