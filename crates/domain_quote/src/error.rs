//! Quote domain errors
//!
//! Input validation, unusable data shapes and orchestration contract
//! violations are kept as separate types so callers can tell a bad
//! request apart from a bug. Underwriting rejections are not errors;
//! see [`crate::underwriting::RejectionReason`].

use rust_decimal::Decimal;
use thiserror::Error;

use crate::policy::PolicyLine;

/// Malformed or out-of-range input found while building a policy
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Payload is not a JSON object
    #[error("Payload must be a JSON object")]
    PayloadNotObject,

    /// Required field is missing
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Product line tag is not recognised
    #[error("Unknown product line {0:?}, expected 'vehicle' or 'house'")]
    UnknownPolicyLine(String),

    /// Age does not follow the `<number> years` grammar
    #[error("Age must be a string with the format '<number> years', got {0}")]
    InvalidAge(String),

    /// Accident history is not a list
    #[error("accident_history must be a list")]
    AccidentHistoryNotList,

    /// An accident history entry could not be converted
    #[error("Invalid accident history data at entry {index}: {reason}")]
    InvalidAccidentEntry {
        index: usize,
        reason: String,
    },

    /// Flood risk is not one of the known levels
    #[error("Flood risk must be one of 'HIGH', 'MEDIUM', 'LOW', got {0}")]
    InvalidFloodRisk(String),

    /// Parrot count is negative or not an integer
    #[error("Number of parrots must be a non-negative integer, got {0}")]
    InvalidParrotCount(String),

    /// Windows is not a mapping
    #[error("Windows must be a dictionary")]
    WindowsNotMapping,

    /// A window count is negative or not an integer
    #[error("Windows dictionary values must be non-negative integers, got {value} for {label:?}")]
    InvalidWindowCount {
        label: String,
        value: String,
    },

    /// Base rate is below zero
    #[error("Base rate must be non-negative, got {0}")]
    NegativeBaseRate(Decimal),
}

impl ValidationError {
    /// Creates a missing field error
    pub fn missing(field: impl Into<String>) -> Self {
        ValidationError::MissingField(field.into())
    }

    /// Creates an accident entry error
    pub fn accident_entry(index: usize, reason: impl std::fmt::Display) -> Self {
        ValidationError::InvalidAccidentEntry {
            index,
            reason: reason.to_string(),
        }
    }
}

/// Well-formed input that cannot be underwritten or rated
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataShapeError {
    /// Window condition carries neither an intact nor a broken count
    #[error("Window condition must contain an 'intact' or 'broken' count")]
    MissingWindowCounts,
}

/// Errors raised by the rating engine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingError {
    /// The calculator was handed a policy of a line it does not rate
    #[error("Unsupported policy type: calculator rates {expected} policies, got a {actual} policy")]
    UnsupportedPolicyType {
        expected: PolicyLine,
        actual: PolicyLine,
    },

    /// The loaded premium does not fit in a decimal amount
    #[error("Premium for {line} policy is out of range: base rate {base_rate} with loading {loading}")]
    PremiumOutOfRange {
        line: PolicyLine,
        base_rate: Decimal,
        loading: Decimal,
    },
}

impl RatingError {
    /// Returns true when the error points at a bug rather than bad input
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, RatingError::UnsupportedPolicyType { .. })
    }
}

/// Errors surfaced by the quote orchestrator
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// Request data failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request data has an unusable shape
    #[error(transparent)]
    DataShape(#[from] DataShapeError),

    /// Rating failed: a contract violation or an out-of-range premium
    #[error(transparent)]
    Rating(#[from] RatingError),
}

impl QuoteError {
    /// Returns true when the error points at a bug rather than bad input
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, QuoteError::Rating(err) if err.is_contract_violation())
    }
}
