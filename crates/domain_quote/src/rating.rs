//! Premium rating
//!
//! Bonus-malus pricing: a base rate per product line is loaded by a set of
//! additive risk factors, `premium = base_rate * (1 + sum(loadings))`.
//! Rating assumes the policy has already passed underwriting.

use chrono::NaiveDate;
use core_kernel::{LookbackWindow, Money, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RatingError, ValidationError};
use crate::house::HousePolicy;
use crate::policy::{Policy, PolicyLine};
use crate::vehicle::VehiclePolicy;

/// Vehicle age (in years) after which the vintage loading starts
pub const VEHICLE_AGE_THRESHOLD: u64 = 5;

/// Loading per year of vehicle age beyond [`VEHICLE_AGE_THRESHOLD`]
pub const VEHICLE_AGE_LOADING_PER_YEAR: Decimal = dec!(0.05);

/// Loading per accident inside [`RECENT_ACCIDENT_WINDOW`], regardless of fault
pub const RECENT_ACCIDENT_LOADING: Decimal = dec!(0.20);

/// Three years, counted as a fixed number of days
pub const RECENT_ACCIDENT_WINDOW: LookbackWindow = LookbackWindow::days(1095);

/// House age (in years) above which the retro loading applies
pub const HOUSE_AGE_THRESHOLD: u64 = 20;

/// Flat loading for houses older than [`HOUSE_AGE_THRESHOLD`]
pub const HOUSE_AGE_LOADING: Decimal = dec!(0.10);

/// Flat loading for medium and high flood zones
pub const FLOOD_LOADING: Decimal = dec!(0.15);

/// Kind of risk factor contributing to a premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    VehicleAge,
    RecentAccidents,
    HouseAge,
    Flood,
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FactorKind::VehicleAge => "vehicle age",
            FactorKind::RecentAccidents => "accidents in the last 3 years",
            FactorKind::HouseAge => "house age",
            FactorKind::Flood => "flood risk",
        };
        f.write_str(label)
    }
}

/// A single loading applied to the base rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingFactor {
    pub kind: FactorKind,
    pub loading: Rate,
}

impl RatingFactor {
    fn new(kind: FactorKind, loading: Decimal) -> Self {
        Self {
            kind,
            loading: Rate::new(loading),
        }
    }
}

/// A computed premium together with the factors that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Premium {
    /// Product line that was rated
    pub line: PolicyLine,
    /// Base rate before loadings
    pub base_rate: Money,
    /// Loadings in the order they were computed
    pub factors: Vec<RatingFactor>,
    /// Final premium amount
    pub amount: Money,
}

impl Premium {
    fn from_factors(
        line: PolicyLine,
        base_rate: Money,
        factors: Vec<RatingFactor>,
    ) -> Result<Self, RatingError> {
        let total: Rate = factors.iter().map(|f| f.loading).sum();
        let multiplier = dec!(1) + total.as_decimal();
        let amount = base_rate
            .checked_multiply(multiplier)
            .ok_or(RatingError::PremiumOutOfRange {
                line,
                base_rate: base_rate.amount(),
                loading: total.as_decimal(),
            })?;

        Ok(Self {
            line,
            base_rate,
            factors,
            amount,
        })
    }

    /// Sum of all loadings
    pub fn total_loading(&self) -> Rate {
        self.factors.iter().map(|f| f.loading).sum()
    }

    /// Loading contributed by one kind of factor, zero if absent
    pub fn loading_for(&self, kind: FactorKind) -> Rate {
        self.factors
            .iter()
            .filter(|f| f.kind == kind)
            .map(|f| f.loading)
            .sum()
    }
}

/// Base rates per product line
///
/// Defaults are 500 for vehicle and 300 for house policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingConfig {
    pub vehicle_base_rate: Money,
    pub house_base_rate: Money,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            vehicle_base_rate: Money::new(dec!(500)),
            house_base_rate: Money::new(dec!(300)),
        }
    }
}

impl RatingConfig {
    /// Returns the base rate configured for a product line
    pub fn base_rate(&self, line: PolicyLine) -> Money {
        match line {
            PolicyLine::Vehicle => self.vehicle_base_rate,
            PolicyLine::House => self.house_base_rate,
        }
    }

    /// Replaces the base rate for one product line
    pub fn with_base_rate(mut self, line: PolicyLine, base_rate: Money) -> Self {
        match line {
            PolicyLine::Vehicle => self.vehicle_base_rate = base_rate,
            PolicyLine::House => self.house_base_rate = base_rate,
        }
        self
    }

    /// Builds the calculator for a product line
    pub fn calculator(&self, line: PolicyLine) -> Result<PremiumCalculator, ValidationError> {
        PremiumCalculator::new(line, self.base_rate(line))
    }
}

/// Rates policies of one product line against a fixed base rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PremiumCalculator {
    line: PolicyLine,
    base_rate: Money,
}

impl PremiumCalculator {
    /// Creates a calculator
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativeBaseRate`] if `base_rate` is below zero.
    pub fn new(line: PolicyLine, base_rate: Money) -> Result<Self, ValidationError> {
        if base_rate.is_negative() {
            return Err(ValidationError::NegativeBaseRate(base_rate.amount()));
        }
        Ok(Self { line, base_rate })
    }

    /// Product line this calculator rates
    pub fn line(&self) -> PolicyLine {
        self.line
    }

    /// Base rate before loadings
    pub fn base_rate(&self) -> Money {
        self.base_rate
    }

    /// Computes the premium for an underwritten policy
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::UnsupportedPolicyType`] when the policy belongs
    /// to a different product line than the calculator, and
    /// [`RatingError::PremiumOutOfRange`] when the loaded premium overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use core_kernel::Money;
    /// use domain_quote::{Policy, PolicyLine, PremiumCalculator, VehiclePolicy};
    /// use domain_quote::AccidentRecord;
    /// use rust_decimal_macros::dec;
    ///
    /// let calculator = PremiumCalculator::new(PolicyLine::Vehicle, Money::new(dec!(500))).unwrap();
    /// let policy = Policy::from(VehiclePolicy::new("10 years", Vec::<AccidentRecord>::new()).unwrap());
    /// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    ///
    /// let premium = calculator.calculate(&policy, today).unwrap();
    /// assert_eq!(premium.amount, Money::new(dec!(625)));
    /// ```
    pub fn calculate(&self, policy: &Policy, today: NaiveDate) -> Result<Premium, RatingError> {
        if policy.line() != self.line {
            return Err(RatingError::UnsupportedPolicyType {
                expected: self.line,
                actual: policy.line(),
            });
        }

        let factors = match policy {
            Policy::Vehicle(p) => vehicle_factors(p, today),
            Policy::House(p) => house_factors(p),
        };

        Premium::from_factors(self.line, self.base_rate, factors)
    }
}

fn vehicle_factors(policy: &VehiclePolicy, today: NaiveDate) -> Vec<RatingFactor> {
    let years_over = policy.age().years().saturating_sub(VEHICLE_AGE_THRESHOLD);
    let recent_accidents = policy.accidents_within(RECENT_ACCIDENT_WINDOW, today).count();

    vec![
        RatingFactor::new(
            FactorKind::VehicleAge,
            Decimal::from(years_over) * VEHICLE_AGE_LOADING_PER_YEAR,
        ),
        RatingFactor::new(
            FactorKind::RecentAccidents,
            Decimal::from(recent_accidents) * RECENT_ACCIDENT_LOADING,
        ),
    ]
}

fn house_factors(policy: &HousePolicy) -> Vec<RatingFactor> {
    let age_loading = if policy.age().years() > HOUSE_AGE_THRESHOLD {
        HOUSE_AGE_LOADING
    } else {
        Decimal::ZERO
    };
    let flood_loading = if policy.flood_risk().is_elevated() {
        FLOOD_LOADING
    } else {
        Decimal::ZERO
    };

    vec![
        RatingFactor::new(FactorKind::HouseAge, age_loading),
        RatingFactor::new(FactorKind::Flood, flood_loading),
    ]
}
