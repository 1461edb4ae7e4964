//! Command line arguments

use chrono::NaiveDate;
use clap::Parser;
use core_kernel::Money;
use domain_quote::PolicyLine;
use std::path::PathBuf;

use crate::render::OutputFormat;

/// Payload argument that makes the CLI read the payload from stdin
pub const STDIN_PAYLOAD: &str = "-";

#[derive(Parser, Debug, Clone)]
#[command(name = "quote", version, about = "Quote vehicle and house insurance policies")]
pub struct Cli {
    /// Product line: vehicle or house
    pub product_line: PolicyLine,

    /// Policy fields as a JSON object, or "-" to read them from stdin
    pub payload: String,

    /// Reference date for accident look-back windows (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,

    /// Overrides the configured base rate for this product line
    #[arg(long, value_name = "DECIMAL")]
    pub base_rate: Option<Money>,

    /// TOML file with base rates and logging settings
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Output format selected by the flags
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Returns true when the payload should be read from stdin
    pub fn payload_from_stdin(&self) -> bool {
        self.payload == STDIN_PAYLOAD
    }
}
