//! Custom Test Assertions
//!
//! Assertion helpers for quote outcomes that print the whole outcome on
//! failure instead of a bare `None`.

use core_kernel::Money;
use domain_quote::{QuoteError, QuoteOutcome, RejectionReason};
use rust_decimal::Decimal;

/// Asserts that a quote was accepted with exactly the given premium
///
/// # Panics
///
/// Panics if the quote failed, was rejected, or the amount differs
pub fn assert_premium(result: &Result<QuoteOutcome, QuoteError>, expected: Decimal) {
    match result {
        Ok(QuoteOutcome::Accepted(premium)) => assert_eq!(
            premium.amount,
            Money::new(expected),
            "Premium mismatch: actual={}, expected={}",
            premium.amount,
            Money::new(expected)
        ),
        other => panic!("Expected accepted quote with premium {expected}, got {other:?}"),
    }
}

/// Asserts that a quote was rejected for the given reason
///
/// # Panics
///
/// Panics if the quote failed, was accepted, or was rejected for another reason
pub fn assert_rejected(result: &Result<QuoteOutcome, QuoteError>, expected: RejectionReason) {
    match result {
        Ok(QuoteOutcome::Rejected(reason)) => assert_eq!(
            *reason, expected,
            "Rejection mismatch: actual={reason:?}, expected={expected:?}"
        ),
        other => panic!("Expected rejection {expected:?}, got {other:?}"),
    }
}

/// Asserts that a quote failed input validation
///
/// # Panics
///
/// Panics unless the result is a [`QuoteError::Validation`]
pub fn assert_validation_error(result: &Result<QuoteOutcome, QuoteError>) {
    assert!(
        matches!(result, Err(QuoteError::Validation(_))),
        "Expected validation error, got {result:?}"
    );
}
