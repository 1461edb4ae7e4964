//! Quote outcome rendering

use domain_quote::{PolicyLine, QuoteOutcome};

use crate::error::CliError;

/// How the outcome is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders a quote outcome for stdout
pub fn render(line: PolicyLine, outcome: &QuoteOutcome, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(line, outcome)),
        OutputFormat::Json => serde_json::to_string_pretty(outcome).map_err(CliError::Render),
    }
}

fn render_text(line: PolicyLine, outcome: &QuoteOutcome) -> String {
    match outcome {
        // Money displays as "$1234.56"
        QuoteOutcome::Accepted(premium) => format!("Premium for {line} policy: {}", premium.amount),
        QuoteOutcome::Rejected(reason) => format!("Quote rejected for {line} policy: {reason}"),
    }
}
