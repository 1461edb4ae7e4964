//! Quote CLI Binary
//!
//! # Usage
//!
//! ```bash
//! # Quote a vehicle policy
//! quote vehicle '{"age": "10 years", "accident_history": []}'
//!
//! # Quote against a fixed date and a custom base rate
//! quote house --as-of 2024-06-15 --base-rate 350 '{"age": "25 years", "windows": {"intact": 8}}'
//! ```
//!
//! # Environment Variables
//!
//! * `QUOTE_VEHICLE_BASE_RATE` - Vehicle base rate (default: 500)
//! * `QUOTE_HOUSE_BASE_RATE` - House base rate (default: 300)
//! * `QUOTE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `QUOTE_LOG_FORMAT` - Log format: text or json (default: text)
//! * `RUST_LOG` - Overrides the log level filter

use chrono::Local;
use clap::Parser;
use interface_cli::{render, run, Cli, CliError, LogFormat, QuoteConfig};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match QuoteConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            let defaults = QuoteConfig::default();
            init_tracing(&defaults.log_level, defaults.log_format);
            return report(&CliError::from(err));
        }
    };

    init_tracing(&config.log_level, config.log_format);

    // Read the clock once per request
    let today = cli.as_of.unwrap_or_else(|| Local::now().date_naive());

    let result = run(&cli, &config, today)
        .and_then(|outcome| render(cli.product_line, &outcome, cli.output_format()));

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}

/// Reports an error and maps it to the process exit code.
///
/// Contract violations are bugs, not bad input, so they go to the log
/// instead of the user-facing error line.
fn report(err: &CliError) -> ExitCode {
    let code = err.exit_code();
    if code == interface_cli::error::EXIT_CONTRACT_VIOLATION {
        tracing::error!(error = %err, "Quote pipeline contract violated");
    } else {
        eprintln!("{}", err.user_message());
    }
    ExitCode::from(code)
}

/// Initializes the tracing subscriber, writing to stderr.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
/// * `format` - Plain text or JSON lines
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
