//! Underwriting rules
//!
//! Each product line has an ordered list of eligibility rules. Rules are
//! evaluated in order and the first one that fails decides the outcome;
//! later rules are not consulted.

use chrono::NaiveDate;
use core_kernel::LookbackWindow;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DataShapeError;
use crate::house::HousePolicy;
use crate::policy::Policy;
use crate::vehicle::VehiclePolicy;

/// Oldest vehicle age (in years) that can be insured
pub const VEHICLE_AGE_CEILING: u64 = 15;

/// Maximum number of at-fault accidents tolerated inside [`AT_FAULT_WINDOW`]
pub const AT_FAULT_ACCIDENT_LIMIT: usize = 2;

/// Five years, counted as a fixed number of days
pub const AT_FAULT_WINDOW: LookbackWindow = LookbackWindow::days(1825);

/// Maximum number of parrots kept at an insured house
pub const PARROT_CEILING: u64 = 5;

/// Why a policy was refused cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    /// Vehicle is older than [`VEHICLE_AGE_CEILING`]
    VehicleTooOld,
    /// Too many at-fault accidents in the last five years
    ExcessiveAtFaultHistory,
    /// More parrots than [`PARROT_CEILING`]
    TooManyParrots,
    /// Broken windows outnumber intact ones
    ExcessiveBrokenWindows,
}

impl RejectionReason {
    /// Name of the rule that produces this rejection
    pub fn rule_name(&self) -> &'static str {
        match self {
            RejectionReason::VehicleTooOld => "vehicle_age_ceiling",
            RejectionReason::ExcessiveAtFaultHistory => "at_fault_accident_frequency",
            RejectionReason::TooManyParrots => "parrot_ceiling",
            RejectionReason::ExcessiveBrokenWindows => "window_damage_ratio",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            RejectionReason::VehicleTooOld => "Vehicle is too old to insure",
            RejectionReason::ExcessiveAtFaultHistory => {
                "Too many at-fault accidents in the last 5 years"
            }
            RejectionReason::TooManyParrots => "Too many parrots",
            RejectionReason::ExcessiveBrokenWindows => "More broken windows than intact windows",
        };
        f.write_str(message)
    }
}

/// Outcome of underwriting a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "reason", rename_all = "snake_case")]
pub enum UnderwritingDecision {
    Accepted,
    Rejected(RejectionReason),
}

impl UnderwritingDecision {
    /// Returns true if the policy may proceed to rating
    pub fn is_accepted(&self) -> bool {
        matches!(self, UnderwritingDecision::Accepted)
    }

    /// Returns the rejection reason, if any
    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            UnderwritingDecision::Accepted => None,
            UnderwritingDecision::Rejected(reason) => Some(*reason),
        }
    }
}

type RuleCheck<P> = fn(&P, NaiveDate) -> Result<Option<RejectionReason>, DataShapeError>;

/// A named eligibility rule for policies of type `P`
pub struct Rule<P> {
    name: &'static str,
    check: RuleCheck<P>,
}

impl<P> Rule<P> {
    const fn new(name: &'static str, check: RuleCheck<P>) -> Self {
        Self { name, check }
    }

    /// Rule name, used in logs and diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the rule; `Ok(Some(_))` means the policy is rejected
    pub fn check(&self, policy: &P, today: NaiveDate) -> Result<Option<RejectionReason>, DataShapeError> {
        (self.check)(policy, today)
    }
}

impl<P> fmt::Debug for Rule<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Vehicle rules, in evaluation order
pub const VEHICLE_RULES: [Rule<VehiclePolicy>; 2] = [
    Rule::new("vehicle_age_ceiling", vehicle_age_ceiling),
    Rule::new("at_fault_accident_frequency", at_fault_accident_frequency),
];

/// House rules, in evaluation order
pub const HOUSE_RULES: [Rule<HousePolicy>; 2] = [
    Rule::new("parrot_ceiling", parrot_ceiling),
    Rule::new("window_damage_ratio", window_damage_ratio),
];

/// Underwrites any policy against the rules of its product line
///
/// # Errors
///
/// Returns a [`DataShapeError`] when a rule cannot be evaluated because
/// the policy data has an unusable shape.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use domain_quote::underwriting::{underwrite, RejectionReason, UnderwritingDecision};
/// use domain_quote::{HousePolicy, Policy};
///
/// let policy = Policy::from(HousePolicy::new("20 years").unwrap().with_parrots(6));
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(
///     underwrite(&policy, today).unwrap(),
///     UnderwritingDecision::Rejected(RejectionReason::TooManyParrots)
/// );
/// ```
pub fn underwrite(policy: &Policy, today: NaiveDate) -> Result<UnderwritingDecision, DataShapeError> {
    match policy {
        Policy::Vehicle(p) => underwrite_vehicle(p, today),
        Policy::House(p) => underwrite_house(p, today),
    }
}

/// Underwrites a vehicle policy
pub fn underwrite_vehicle(
    policy: &VehiclePolicy,
    today: NaiveDate,
) -> Result<UnderwritingDecision, DataShapeError> {
    evaluate_rules(&VEHICLE_RULES, policy, today)
}

/// Underwrites a house policy
pub fn underwrite_house(
    policy: &HousePolicy,
    today: NaiveDate,
) -> Result<UnderwritingDecision, DataShapeError> {
    evaluate_rules(&HOUSE_RULES, policy, today)
}

fn evaluate_rules<P>(
    rules: &[Rule<P>],
    policy: &P,
    today: NaiveDate,
) -> Result<UnderwritingDecision, DataShapeError> {
    for rule in rules {
        if let Some(reason) = rule.check(policy, today)? {
            return Ok(UnderwritingDecision::Rejected(reason));
        }
    }
    Ok(UnderwritingDecision::Accepted)
}

fn vehicle_age_ceiling(
    policy: &VehiclePolicy,
    _today: NaiveDate,
) -> Result<Option<RejectionReason>, DataShapeError> {
    Ok((policy.age().years() > VEHICLE_AGE_CEILING).then_some(RejectionReason::VehicleTooOld))
}

fn at_fault_accident_frequency(
    policy: &VehiclePolicy,
    today: NaiveDate,
) -> Result<Option<RejectionReason>, DataShapeError> {
    let at_fault = policy
        .accidents_within(AT_FAULT_WINDOW, today)
        .filter(|a| a.at_fault())
        .count();

    Ok((at_fault > AT_FAULT_ACCIDENT_LIMIT).then_some(RejectionReason::ExcessiveAtFaultHistory))
}

fn parrot_ceiling(
    policy: &HousePolicy,
    _today: NaiveDate,
) -> Result<Option<RejectionReason>, DataShapeError> {
    Ok((policy.parrot_count() > PARROT_CEILING).then_some(RejectionReason::TooManyParrots))
}

fn window_damage_ratio(
    policy: &HousePolicy,
    _today: NaiveDate,
) -> Result<Option<RejectionReason>, DataShapeError> {
    let windows = policy.window_condition();
    let excessive = match (windows.intact(), windows.broken()) {
        (Some(intact), Some(broken)) => broken > intact,
        (None, Some(broken)) => broken > 0,
        (Some(_), None) => false,
        (None, None) => return Err(DataShapeError::MissingWindowCounts),
    };

    Ok(excessive.then_some(RejectionReason::ExcessiveBrokenWindows))
}
