//! Underwriting Rule Tests
//!
//! Tests the eligibility rules for both product lines, their boundaries
//! and their evaluation order.
//!
//! # Test Organization
//!
//! - `vehicle_rules` - Age ceiling and at-fault frequency
//! - `house_rules` - Parrot ceiling and window damage
//! - `decisions` - Decision helpers and serialization

use domain_quote::underwriting::{underwrite, underwrite_house, underwrite_vehicle};
use domain_quote::{
    DataShapeError, HousePolicy, Policy, RejectionReason, UnderwritingDecision, VehiclePolicy,
    WindowCondition,
};
use test_utils::{AccidentFixtures, PolicyFixtures, TemporalFixtures};

// ============================================================================
// VEHICLE RULES
// ============================================================================

mod vehicle_rules {
    use super::*;

    /// A clean ten year old vehicle is insurable
    #[test]
    fn test_clean_vehicle_accepted() {
        let decision = underwrite_vehicle(&PolicyFixtures::clean_vehicle(), TemporalFixtures::today()).unwrap();
        assert_eq!(decision, UnderwritingDecision::Accepted);
    }

    /// The age rule is checked before accident history
    #[test]
    fn test_age_rule_wins_over_history() {
        let policy = VehiclePolicy::new(
            "16 years",
            vec![
                AccidentFixtures::at_fault(5),
                AccidentFixtures::at_fault(4),
                AccidentFixtures::at_fault(3),
            ],
        )
        .unwrap();

        assert_eq!(
            underwrite_vehicle(&policy, TemporalFixtures::today()).unwrap().rejection(),
            Some(RejectionReason::VehicleTooOld)
        );
    }

    /// Three at-fault accidents in five years is too many
    #[test]
    fn test_three_at_fault_accidents_rejected() {
        let decision = underwrite_vehicle(&PolicyFixtures::reckless_vehicle(), TemporalFixtures::today()).unwrap();
        assert_eq!(
            decision,
            UnderwritingDecision::Rejected(RejectionReason::ExcessiveAtFaultHistory)
        );
    }

    /// Two at-fault accidents are tolerated
    #[test]
    fn test_two_at_fault_accidents_accepted() {
        let policy = VehiclePolicy::new(
            "10 years",
            vec![AccidentFixtures::at_fault(100), AccidentFixtures::at_fault(200)],
        )
        .unwrap();
        assert!(underwrite_vehicle(&policy, TemporalFixtures::today()).unwrap().is_accepted());
    }

    /// Accidents without fault never count towards the limit
    #[test]
    fn test_not_at_fault_accidents_ignored() {
        let history: Vec<_> = (0..6).map(|n| AccidentFixtures::not_at_fault(n * 30)).collect();
        let policy = VehiclePolicy::new("10 years", history).unwrap();
        assert!(underwrite_vehicle(&policy, TemporalFixtures::today()).unwrap().is_accepted());
    }

    /// Accidents older than five years fall out of the window
    #[test]
    fn test_old_accidents_ignored() {
        let policy = VehiclePolicy::new(
            "10 years",
            vec![
                AccidentFixtures::at_fault(1826),
                AccidentFixtures::at_fault(2000),
                AccidentFixtures::at_fault(10),
            ],
        )
        .unwrap();
        assert!(underwrite_vehicle(&policy, TemporalFixtures::today()).unwrap().is_accepted());
    }
}

// ============================================================================
// HOUSE RULES
// ============================================================================

mod house_rules {
    use super::*;

    fn house_with_windows(windows: WindowCondition) -> HousePolicy {
        HousePolicy::new("20 years").unwrap().with_windows(windows)
    }

    /// Five parrots is the limit
    #[test]
    fn test_parrot_ceiling_boundary() {
        let five = PolicyFixtures::standard_house().with_parrots(5);
        let six = PolicyFixtures::standard_house().with_parrots(6);
        assert!(underwrite_house(&five, TemporalFixtures::today()).unwrap().is_accepted());
        assert_eq!(
            underwrite_house(&six, TemporalFixtures::today()).unwrap().rejection(),
            Some(RejectionReason::TooManyParrots)
        );
    }

    /// Equal broken and intact counts are acceptable
    #[test]
    fn test_equal_window_counts_accepted() {
        let policy = house_with_windows(WindowCondition::new().with("intact", 3).with("broken", 3));
        assert!(underwrite_house(&policy, TemporalFixtures::today()).unwrap().is_accepted());
    }

    /// More broken than intact windows is rejected
    #[test]
    fn test_more_broken_than_intact() {
        let policy = house_with_windows(WindowCondition::new().with("intact", 3).with("broken", 4));
        assert_eq!(
            underwrite_house(&policy, TemporalFixtures::today()).unwrap().rejection(),
            Some(RejectionReason::ExcessiveBrokenWindows)
        );
    }

    /// A broken count with no intact count is compared against zero
    #[test]
    fn test_broken_only() {
        let damaged = house_with_windows(WindowCondition::new().with("broken", 5));
        let undamaged = house_with_windows(WindowCondition::new().with("broken", 0));
        assert_eq!(
            underwrite_house(&damaged, TemporalFixtures::today()).unwrap().rejection(),
            Some(RejectionReason::ExcessiveBrokenWindows)
        );
        assert!(underwrite_house(&undamaged, TemporalFixtures::today()).unwrap().is_accepted());
    }

    /// Without either count the rule cannot be evaluated
    #[test]
    fn test_missing_window_counts() {
        let policy = house_with_windows(WindowCondition::new().with("cracked", 2));
        assert_eq!(
            underwrite_house(&policy, TemporalFixtures::today()),
            Err(DataShapeError::MissingWindowCounts)
        );
    }
}

// ============================================================================
// DECISIONS
// ============================================================================

mod decisions {
    use super::*;

    /// The union entry point dispatches on the product line
    #[test]
    fn test_underwrite_dispatch() {
        let vehicle = Policy::from(PolicyFixtures::reckless_vehicle());
        let house = Policy::from(PolicyFixtures::standard_house());
        assert_eq!(
            underwrite(&vehicle, TemporalFixtures::today()).unwrap().rejection(),
            Some(RejectionReason::ExcessiveAtFaultHistory)
        );
        assert!(underwrite(&house, TemporalFixtures::today()).unwrap().is_accepted());
    }

    /// Rejection messages are human readable
    #[test]
    fn test_rejection_messages() {
        assert_eq!(RejectionReason::VehicleTooOld.to_string(), "Vehicle is too old to insure");
        assert_eq!(RejectionReason::TooManyParrots.to_string(), "Too many parrots");
    }

    /// Decisions serialize with a tag and an optional reason
    #[test]
    fn test_decision_serialization() {
        let rejected = serde_json::to_value(UnderwritingDecision::Rejected(RejectionReason::TooManyParrots)).unwrap();
        assert_eq!(rejected, serde_json::json!({"decision": "rejected", "reason": "TooManyParrots"}));

        let accepted = serde_json::to_value(UnderwritingDecision::Accepted).unwrap();
        assert_eq!(accepted, serde_json::json!({"decision": "accepted"}));
    }
}
