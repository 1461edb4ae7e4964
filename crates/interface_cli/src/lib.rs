//! Quote Command Line Interface
//!
//! Parses a product line and a JSON payload, runs the quote pipeline and
//! renders the outcome.
//!
//! # Exit codes
//!
//! - `0`: the quote produced a premium or a rejection
//! - `1`: bad payload, invalid input, unusable data or bad configuration
//! - `2`: internal contract violation
//!
//! # Output streams
//!
//! Quote results (premiums, rejections and `--json` documents) go to
//! stdout. Errors go to stderr as `Error processing quote: {error}`, so a
//! caller piping stdout only ever sees results. Contract violations are
//! written through the error-level log instead, which also targets stderr.
//! Logs never go to stdout.
//!
//! # Example
//!
//! ```bash
//! quote vehicle '{"age": "10 years", "accident_history": []}'
//! quote house --json '{"age": "20 years", "windows": {"intact": 10}}'
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod render;

use chrono::NaiveDate;
use domain_quote::{evaluate_quote, QuoteOutcome};
use serde_json::Value;
use std::io::Read;

pub use crate::cli::Cli;
pub use crate::config::{LogFormat, QuoteConfig};
pub use crate::error::CliError;
pub use crate::render::{render, OutputFormat};

/// Runs one quote request
///
/// The base rate comes from `--base-rate` when given, otherwise from the
/// configuration for the requested product line.
pub fn run(cli: &Cli, config: &QuoteConfig, today: NaiveDate) -> Result<QuoteOutcome, CliError> {
    let payload = if cli.payload_from_stdin() {
        read_stdin()?
    } else {
        cli.payload.clone()
    };
    let fields = parse_payload(&payload)?;

    let line = cli.product_line;
    let base_rate = cli
        .base_rate
        .unwrap_or_else(|| config.rating().base_rate(line));

    tracing::info!(%line, %base_rate, %today, "Evaluating quote");

    let outcome = evaluate_quote(line, &fields, base_rate, today)?;

    match &outcome {
        QuoteOutcome::Accepted(premium) => {
            tracing::info!(
                %line,
                premium = %premium.amount,
                loading = %premium.total_loading(),
                "Quote accepted"
            );
        }
        QuoteOutcome::Rejected(reason) => {
            tracing::warn!(%line, rule = reason.rule_name(), %reason, "Quote rejected");
        }
    }

    Ok(outcome)
}

/// Parses a raw JSON payload
pub fn parse_payload(raw: &str) -> Result<Value, CliError> {
    serde_json::from_str(raw).map_err(CliError::Payload)
}

fn read_stdin() -> Result<String, CliError> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
