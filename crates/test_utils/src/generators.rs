//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating quote inputs that respect
//! the payload grammar.

use chrono::{Days, NaiveDate};
use domain_quote::{AccidentRecord, FloodRisk};
use proptest::prelude::*;

use crate::fixtures::TemporalFixtures;

/// Strategy for ages in years
pub fn years_strategy() -> impl Strategy<Value = u64> {
    0u64..200u64
}

/// Strategy for well-formed age strings, mixing the case of the unit
pub fn age_string_strategy() -> impl Strategy<Value = (u64, String)> {
    (
        years_strategy(),
        prop_oneof![Just("years"), Just("Years"), Just("YEARS"), Just("yEaRs")],
    )
        .prop_map(|(years, unit)| (years, format!("{years} {unit}")))
}

/// Strategy for strings that are not a valid age
///
/// Letters-only strings never carry a number, so none of them parse.
pub fn malformed_age_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,12}",
        (1u64..1000u64).prop_map(|n| format!("-{n} years")),
        (1u64..1000u64).prop_map(|n| format!("{n} months")),
        (1u64..1000u64).prop_map(|n| format!("{n}.5 years")),
        years_strategy().prop_map(|n| n.to_string()),
    ]
}

/// Strategy for flood risk levels
pub fn flood_risk_strategy() -> impl Strategy<Value = FloodRisk> {
    prop_oneof![
        Just(FloodRisk::Low),
        Just(FloodRisk::Medium),
        Just(FloodRisk::High),
    ]
}

/// Strategy for accident dates up to ten years before the reference date
pub fn accident_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..3650u64).prop_map(|days| {
        TemporalFixtures::today()
            .checked_sub_days(Days::new(days))
            .unwrap_or(NaiveDate::MIN)
    })
}

/// Strategy for a single accident record
pub fn accident_strategy() -> impl Strategy<Value = AccidentRecord> {
    (accident_date_strategy(), any::<bool>())
        .prop_map(|(date, at_fault)| AccidentRecord::new(date, at_fault))
}

/// Strategy for accident histories of up to eight entries
pub fn accident_history_strategy() -> impl Strategy<Value = Vec<AccidentRecord>> {
    prop::collection::vec(accident_strategy(), 0..8)
}
