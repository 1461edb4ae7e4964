//! CLI error handling

use domain_quote::QuoteError;
use thiserror::Error;

/// Exit code for bad input, rejected configuration or unusable data
pub const EXIT_INPUT_ERROR: u8 = 1;

/// Exit code for internal contract violations
pub const EXIT_CONTRACT_VIOLATION: u8 = 2;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid JSON payload: {0}")]
    Payload(#[source] serde_json::Error),

    #[error("Failed to read payload from stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("Failed to render quote outcome: {0}")]
    Render(#[source] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Quote(err) if err.is_contract_violation() => EXIT_CONTRACT_VIOLATION,
            _ => EXIT_INPUT_ERROR,
        }
    }

    /// Line written to stderr for errors the caller can act on
    pub fn user_message(&self) -> String {
        format!("Error processing quote: {self}")
    }
}
