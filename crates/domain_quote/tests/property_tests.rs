//! Property-based tests for the quote domain
//!
//! Uses proptest to check the age grammar, underwriting boundaries and
//! premium monotonicity over generated inputs.

use core_kernel::Money;
use domain_quote::underwriting::underwrite_vehicle;
use domain_quote::{
    AccidentRecord, FloodRisk, HousePolicy, Policy, PolicyAge, PolicyLine, PremiumCalculator,
    RejectionReason, ValidationError, VehiclePolicy,
};
use proptest::prelude::*;
use test_utils::{
    accident_date_strategy, accident_history_strategy, age_string_strategy, flood_risk_strategy,
    malformed_age_strategy, RateFixtures, TemporalFixtures,
};

fn house_premium(years: u64, flood_risk: FloodRisk) -> Money {
    let policy = HousePolicy::new(&format!("{years} years"))
        .unwrap()
        .with_flood_risk(flood_risk);
    PremiumCalculator::new(PolicyLine::House, RateFixtures::house_base())
        .unwrap()
        .calculate(&Policy::from(policy), TemporalFixtures::today())
        .unwrap()
        .amount
}

proptest! {
    /// Any "<n> years" string parses to n, whatever the case of the unit
    #[test]
    fn prop_age_parses_to_its_number((years, input) in age_string_strategy()) {
        prop_assert_eq!(PolicyAge::parse(&input).unwrap().years(), years);
    }

    /// Strings outside the grammar are validation errors
    #[test]
    fn prop_malformed_age_rejected(input in malformed_age_strategy()) {
        prop_assert!(matches!(PolicyAge::parse(&input), Err(ValidationError::InvalidAge(_))));
    }

    /// Vehicles older than fifteen years are rejected whatever their history
    #[test]
    fn prop_old_vehicle_always_rejected(
        years in 16u64..200,
        history in accident_history_strategy(),
    ) {
        let policy = VehiclePolicy::new(&format!("{years} years"), history).unwrap();
        let decision = underwrite_vehicle(&policy, TemporalFixtures::today()).unwrap();
        prop_assert_eq!(decision.rejection(), Some(RejectionReason::VehicleTooOld));
    }

    /// Young enough vehicles with at most two at-fault accidents are accepted
    #[test]
    fn prop_eligible_vehicle_accepted(
        years in 0u64..=15,
        at_fault in prop::collection::vec(accident_date_strategy(), 0..=2),
        not_at_fault in prop::collection::vec(accident_date_strategy(), 0..6),
    ) {
        let history = at_fault
            .into_iter()
            .map(|date| AccidentRecord::new(date, true))
            .chain(not_at_fault.into_iter().map(|date| AccidentRecord::new(date, false)));
        let policy = VehiclePolicy::new(&format!("{years} years"), history).unwrap();

        prop_assert!(underwrite_vehicle(&policy, TemporalFixtures::today()).unwrap().is_accepted());
    }

    /// Vehicle premiums never fall below the base rate
    #[test]
    fn prop_vehicle_premium_at_least_base(
        years in 0u64..=15,
        history in accident_history_strategy(),
    ) {
        let policy = VehiclePolicy::new(&format!("{years} years"), history).unwrap();
        let premium = PremiumCalculator::new(PolicyLine::Vehicle, RateFixtures::vehicle_base())
            .unwrap()
            .calculate(&Policy::from(policy), TemporalFixtures::today())
            .unwrap();
        prop_assert!(premium.amount >= RateFixtures::vehicle_base());
    }

    /// House premium does not decrease with flood severity
    #[test]
    fn prop_house_premium_monotonic_in_flood_risk(
        years in 0u64..100,
        a in flood_risk_strategy(),
        b in flood_risk_strategy(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(house_premium(years, low) <= house_premium(years, high));
    }

    /// House premium does not decrease with age
    #[test]
    fn prop_house_premium_monotonic_in_age(
        a in 0u64..100,
        b in 0u64..100,
        flood_risk in flood_risk_strategy(),
    ) {
        let (younger, older) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(house_premium(younger, flood_risk) <= house_premium(older, flood_risk));
    }
}
