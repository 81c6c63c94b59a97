use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Network request failed or the service answered with an error status
    #[error("Network error: {0}")]
    NetworkError(String),
    /// The service rejected the application token (HTTP 401/403)
    #[error("Authentication failed (HTTP {status}): {body}")]
    Authentication { status: u16, body: String },
    /// Response body could not be interpreted as a record set
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlError(String),
    /// Regex compilation failed
    #[error("Regex error: {0}")]
    RegexError(String),
    /// A column required by a transformation step is not in the table
    #[error("Missing column: {0}")]
    MissingColumn(String),
    /// A cell could not be coerced to the column's target type
    #[error("Cannot convert value '{value}' in column '{column}' (row {row})")]
    Conversion {
        column: String,
        row: usize,
        value: String,
    },
    /// Signature year has no minimum wage entry
    #[error("No minimum wage defined for year {year} (row {row})")]
    UnknownYear { row: usize, year: String },
    /// A derived ratio would divide by zero
    #[error("Zero denominator in column '{column}' (row {row})")]
    ZeroDenominator { column: String, row: usize },
    /// DataFrame operation failed
    #[error("Table error: {0}")]
    TableError(String),
    /// Invalid input format
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
}

// Conversion implementations for common errors
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::RegexError(err.to_string())
    }
}

impl From<polars::error::PolarsError> for AppError {
    fn from(err: polars::error::PolarsError) -> Self {
        AppError::TableError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
