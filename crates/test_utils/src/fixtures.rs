//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for quote tests. Every date is derived
//! from a single fixed reference date so look-back windows are predictable.

use chrono::{Days, NaiveDate};
use core_kernel::Money;
use domain_quote::{AccidentRecord, FloodRisk, HousePolicy, VehiclePolicy, WindowCondition};
use rust_decimal_macros::dec;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Reference "today" used across the suite (June 15, 2024)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// A date the given number of days before [`TemporalFixtures::today`]
    pub fn days_ago(days: u64) -> NaiveDate {
        Self::today().checked_sub_days(Days::new(days)).unwrap()
    }

    /// A date the given number of days after [`TemporalFixtures::today`]
    pub fn days_ahead(days: u64) -> NaiveDate {
        Self::today().checked_add_days(Days::new(days)).unwrap()
    }
}

/// Fixture for base rates
pub struct RateFixtures;

impl RateFixtures {
    /// Default vehicle base rate
    pub fn vehicle_base() -> Money {
        Money::new(dec!(500))
    }

    /// Default house base rate
    pub fn house_base() -> Money {
        Money::new(dec!(300))
    }
}

/// Fixture for accident records
pub struct AccidentFixtures;

impl AccidentFixtures {
    /// At-fault accident the given number of days ago
    pub fn at_fault(days_ago: u64) -> AccidentRecord {
        AccidentRecord::new(TemporalFixtures::days_ago(days_ago), true)
    }

    /// Not-at-fault accident the given number of days ago
    pub fn not_at_fault(days_ago: u64) -> AccidentRecord {
        AccidentRecord::new(TemporalFixtures::days_ago(days_ago), false)
    }
}

/// Fixture for validated policies
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// Ten year old vehicle with a clean history
    pub fn clean_vehicle() -> VehiclePolicy {
        VehiclePolicy::new("10 years", Vec::<AccidentRecord>::new()).unwrap()
    }

    /// Vehicle with three at-fault accidents inside the five year window
    pub fn reckless_vehicle() -> VehiclePolicy {
        VehiclePolicy::new(
            "10 years",
            vec![
                AccidentFixtures::at_fault(1800),
                AccidentFixtures::at_fault(900),
                AccidentFixtures::at_fault(0),
            ],
        )
        .unwrap()
    }

    /// Twenty year old house in a low flood zone with two parrots and mostly intact windows
    pub fn standard_house() -> HousePolicy {
        HousePolicy::new("20 years")
            .unwrap()
            .with_flood_risk(FloodRisk::Low)
            .with_parrots(2)
            .with_windows(Self::mostly_intact_windows())
    }

    /// Ten intact and two broken windows
    pub fn mostly_intact_windows() -> WindowCondition {
        WindowCondition::new().with("intact", 10).with("broken", 2)
    }
}
