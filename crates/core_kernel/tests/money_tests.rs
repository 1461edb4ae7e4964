//! Unit tests for the Money module
//!
//! Tests cover money creation, checked multiplication, rounding, parsing,
//! display formatting, serialization, and rates.

use core_kernel::{Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50));
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789));
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::new(dec!(-100.00));
        assert!(m.is_negative());
    }

    #[test]
    fn test_zero_is_not_negative() {
        assert!(!Money::zero().is_negative());
        assert!(!Money::new(dec!(-0.00)).is_negative());
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_parse_integer_amount() {
        assert_eq!(Money::parse("500").unwrap().amount(), dec!(500));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Money::parse(" 312.50 ").unwrap().amount(), dec!(312.50));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = Money::parse("five hundred");
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_from_str_matches_parse() {
        let parsed: Money = "300".parse().unwrap();
        assert_eq!(parsed, Money::new(dec!(300)));
    }
}

mod multiplication {
    use super::*;

    #[test]
    fn test_checked_multiply() {
        let m = Money::new(dec!(500));
        assert_eq!(m.checked_multiply(dec!(1.25)), Some(Money::new(dec!(625))));
    }

    #[test]
    fn test_checked_multiply_rounds_result() {
        let m = Money::new(dec!(0.3333));
        assert_eq!(m.checked_multiply(dec!(0.5)).map(|r| r.amount()), Some(dec!(0.1666)));
    }

    #[test]
    fn test_checked_multiply_overflow_is_none() {
        let m = Money::new(Decimal::MAX);
        assert_eq!(m.checked_multiply(dec!(2)), None);
    }
}

mod rounding_and_display {
    use super::*;

    #[test]
    fn test_round_to_cents_is_bankers() {
        assert_eq!(Money::new(dec!(100.125)).round_to_cents().amount(), dec!(100.12));
        assert_eq!(Money::new(dec!(100.135)).round_to_cents().amount(), dec!(100.14));
    }

    #[test]
    fn test_display_pads_whole_amounts() {
        assert_eq!(format!("{}", Money::new(dec!(345))), "$345.00");
    }

    #[test]
    fn test_display_keeps_cents() {
        assert_eq!(format!("{}", Money::new(dec!(1234.5))), "$1234.50");
    }
}

mod rate {
    use super::*;

    #[test]
    fn test_rate_as_percentage() {
        assert_eq!(Rate::new(dec!(0.20)).as_percentage(), dec!(20));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::new(dec!(0.05)).to_string(), "5%");
        assert_eq!(Rate::new(dec!(0.125)).to_string(), "12.5%");
    }

    #[test]
    fn test_zero_rate_is_zero() {
        assert!(Rate::zero().is_zero());
        assert!(!Rate::new(dec!(0.05)).is_zero());
    }

    #[test]
    fn test_rate_serializes_as_decimal() {
        let json = serde_json::to_string(&Rate::new(dec!(0.15))).unwrap();
        assert_eq!(json, "\"0.15\"");
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_money_serializes_as_decimal() {
        let json = serde_json::to_string(&Money::new(dec!(625))).unwrap();
        assert_eq!(json, "\"625\"");
    }

    #[test]
    fn test_deserialized_money_is_rounded() {
        let money: Money = serde_json::from_str("\"312.123456\"").unwrap();
        assert_eq!(money.amount(), dec!(312.1235));
        assert_eq!(money, Money::new(dec!(312.123456)));
    }

    #[test]
    fn test_money_deserializes_from_number() {
        let money: Money = serde_json::from_str("500").unwrap();
        assert_eq!(money, Money::new(dec!(500)));
    }
}
