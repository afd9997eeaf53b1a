use thiserror::Error;

/// Why a strategy produced no draft.
///
/// These never cross [`crate::Dispatcher::extract`]; the dispatcher logs them
/// and hands the caller `None`.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Required markup or content is absent from the document
    #[error("not applicable: {0}")]
    NotApplicable(String),

    /// Some fields were found but the strategy's minimums were not met
    #[error("{strategy}: incomplete extraction ({reason})")]
    Incomplete { strategy: String, reason: String },

    /// An embedded JSON payload could not be decoded
    #[error("malformed embedded data: {0}")]
    MalformedEmbeddedData(#[from] serde_json::Error),
}

impl ExtractError {
    pub fn incomplete(strategy: &str, reason: impl Into<String>) -> Self {
        ExtractError::Incomplete {
            strategy: strategy.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors from the surfaces around the extraction core
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to fetch the page
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// URL could not be parsed or has no host
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to read a local document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Command line could not be understood
    #[error("{0}")]
    Usage(String),

    /// Failed to serialise output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
