//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! quote engine test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built dates, rates and policies
//! - `builders`: Builders for raw JSON quote payloads
//! - `assertions`: Custom assertion helpers for quote outcomes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
