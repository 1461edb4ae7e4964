//! Core Kernel - Foundational types for the quote engine
//!
//! This crate provides the building blocks shared by the quoting domain
//! and its command-line front end:
//! - Money and rate types with precise decimal arithmetic
//! - Rolling look-back windows measured in whole days

pub mod money;
pub mod temporal;

pub use money::{Money, MoneyError, Rate};
pub use temporal::LookbackWindow;
