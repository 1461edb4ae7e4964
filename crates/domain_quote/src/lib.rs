//! Quote Domain
//!
//! This crate turns a raw quote request into either a premium or a
//! rejection for the two supported product lines, vehicle and house.
//!
//! # Pipeline
//!
//! ```text
//! raw fields -> Policy (validation) -> underwriting -> rating -> QuoteOutcome
//!                   |                       |              |
//!            ValidationError       Rejected / DataShape   RatingError
//! ```
//!
//! The reference date is always passed in explicitly, so every step is
//! deterministic for a given input. Nothing in this crate logs or prints.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use domain_quote::{PolicyLine, QuoteService, RejectionReason};
//! use serde_json::json;
//!
//! let service = QuoteService::default();
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//!
//! let outcome = service
//!     .evaluate(PolicyLine::Vehicle, &json!({"age": "16 years", "accident_history": []}), today)
//!     .unwrap();
//! assert_eq!(outcome.rejection(), Some(RejectionReason::VehicleTooOld));
//! ```

pub mod error;
pub mod policy;
pub mod vehicle;
pub mod house;
pub mod underwriting;
pub mod rating;
pub mod services;

pub use error::{DataShapeError, QuoteError, RatingError, ValidationError};
pub use policy::{Policy, PolicyAge, PolicyLine};
pub use vehicle::{AccidentEntry, AccidentRecord, VehiclePolicy};
pub use house::{FloodRisk, HousePolicy, WindowCondition};
pub use underwriting::{RejectionReason, UnderwritingDecision};
pub use rating::{FactorKind, Premium, PremiumCalculator, RatingConfig, RatingFactor};
pub use services::{evaluate_quote, QuoteOutcome, QuoteService};
