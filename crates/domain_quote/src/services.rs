//! Quote orchestration
//!
//! Ties the pipeline together: build a policy from raw fields, underwrite
//! it, and rate it if underwriting accepts. The outcome of a quote is
//! either a premium or a rejection; anything else is an error.

use chrono::NaiveDate;
use core_kernel::Money;
use serde::Serialize;
use serde_json::Value;

use crate::error::QuoteError;
use crate::policy::{Policy, PolicyLine};
use crate::rating::{Premium, PremiumCalculator, RatingConfig};
use crate::underwriting::{underwrite, RejectionReason, UnderwritingDecision};

/// Result of a quote that ran to completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum QuoteOutcome {
    /// Underwriting accepted the policy and it was rated
    Accepted(Premium),
    /// Underwriting refused cover
    Rejected(RejectionReason),
}

impl QuoteOutcome {
    /// Returns the premium of an accepted quote
    pub fn premium(&self) -> Option<&Premium> {
        match self {
            QuoteOutcome::Accepted(premium) => Some(premium),
            QuoteOutcome::Rejected(_) => None,
        }
    }

    /// Returns the reason a quote was rejected
    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            QuoteOutcome::Accepted(_) => None,
            QuoteOutcome::Rejected(reason) => Some(*reason),
        }
    }

    /// Returns true if the quote produced a premium
    pub fn is_accepted(&self) -> bool {
        matches!(self, QuoteOutcome::Accepted(_))
    }
}

/// Quotes a raw payload against an explicit base rate
///
/// # Arguments
///
/// * `line` - Product line the payload describes
/// * `fields` - Raw JSON object with the policy fields
/// * `base_rate` - Base rate for the product line, must be non-negative
/// * `today` - Reference date for accident look-back windows
///
/// # Errors
///
/// * [`QuoteError::Validation`] if the payload or base rate is invalid
/// * [`QuoteError::DataShape`] if underwriting cannot evaluate the policy
/// * [`QuoteError::Rating`] if rating is wired to the wrong product line or
///   the premium overflows
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use core_kernel::Money;
/// use domain_quote::{evaluate_quote, PolicyLine, QuoteOutcome};
/// use rust_decimal_macros::dec;
/// use serde_json::json;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let outcome = evaluate_quote(
///     PolicyLine::House,
///     &json!({"age": "20 years", "flood_risk": "HIGH", "windows": {"intact": 10, "broken": 2}}),
///     Money::new(dec!(300)),
///     today,
/// ).unwrap();
///
/// assert_eq!(outcome.premium().unwrap().amount, Money::new(dec!(345)));
/// ```
pub fn evaluate_quote(
    line: PolicyLine,
    fields: &Value,
    base_rate: Money,
    today: NaiveDate,
) -> Result<QuoteOutcome, QuoteError> {
    let calculator = PremiumCalculator::new(line, base_rate)?;
    let policy = Policy::from_fields(line, fields)?;
    quote_with(&calculator, &policy, today)
}

fn quote_with(
    calculator: &PremiumCalculator,
    policy: &Policy,
    today: NaiveDate,
) -> Result<QuoteOutcome, QuoteError> {
    match underwrite(policy, today)? {
        UnderwritingDecision::Rejected(reason) => Ok(QuoteOutcome::Rejected(reason)),
        UnderwritingDecision::Accepted => {
            let premium = calculator.calculate(policy, today)?;
            Ok(QuoteOutcome::Accepted(premium))
        }
    }
}

/// Quote service holding the configured base rates
#[derive(Debug, Clone, Default)]
pub struct QuoteService {
    rating: RatingConfig,
}

impl QuoteService {
    /// Creates a quote service with the given base rates
    pub fn new(rating: RatingConfig) -> Self {
        Self { rating }
    }

    /// Base rates in use
    pub fn rating(&self) -> &RatingConfig {
        &self.rating
    }

    /// Quotes a raw payload using the configured base rate for its line
    pub fn evaluate(
        &self,
        line: PolicyLine,
        fields: &Value,
        today: NaiveDate,
    ) -> Result<QuoteOutcome, QuoteError> {
        evaluate_quote(line, fields, self.rating.base_rate(line), today)
    }

    /// Quotes an already validated policy
    pub fn quote_policy(&self, policy: &Policy, today: NaiveDate) -> Result<QuoteOutcome, QuoteError> {
        let calculator = self.rating.calculator(policy.line())?;
        quote_with(&calculator, policy, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DataShapeError, ValidationError};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_negative_base_rate_is_a_validation_error() {
        let result = evaluate_quote(
            PolicyLine::Vehicle,
            &json!({"age": "10 years", "accident_history": []}),
            Money::new(dec!(-500)),
            today(),
        );
        assert!(matches!(
            result,
            Err(QuoteError::Validation(ValidationError::NegativeBaseRate(_)))
        ));
    }

    #[test]
    fn test_empty_windows_is_a_data_shape_error() {
        let result = QuoteService::default().evaluate(PolicyLine::House, &json!({"age": "20 years"}), today());
        assert_eq!(result, Err(QuoteError::DataShape(DataShapeError::MissingWindowCounts)));
    }

    #[test]
    fn test_service_uses_configured_rate() {
        let rating = RatingConfig::default().with_base_rate(PolicyLine::House, Money::new(dec!(1000)));
        let outcome = QuoteService::new(rating)
            .evaluate(PolicyLine::House, &json!({"age": "5 years", "windows": {"intact": 4}}), today())
            .unwrap();
        assert_eq!(outcome.premium().map(|p| p.amount), Some(Money::new(dec!(1000))));
    }
}
