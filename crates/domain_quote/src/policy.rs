//! Policy data model
//!
//! A quote request is turned into a [`Policy`], a closed union over the
//! supported product lines. Every variant is validated when it is built,
//! so a `Policy` value is always well-formed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::house::HousePolicy;
use crate::vehicle::VehiclePolicy;

/// Insurance product line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyLine {
    /// Motor vehicle cover
    Vehicle,
    /// Home buildings cover
    House,
}

impl PolicyLine {
    /// All supported product lines
    pub const ALL: [PolicyLine; 2] = [PolicyLine::Vehicle, PolicyLine::House];

    /// Returns the lowercase tag used on the command line and in payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyLine::Vehicle => "vehicle",
            PolicyLine::House => "house",
        }
    }
}

impl fmt::Display for PolicyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyLine {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        PolicyLine::ALL
            .into_iter()
            .find(|line| line.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ValidationError::UnknownPolicyLine(s.to_string()))
    }
}

/// Age of the insured object, written as `"<number> years"`
///
/// The unit is matched case-insensitively and the number must be a
/// plain non-negative integer.
///
/// # Example
///
/// ```
/// use domain_quote::PolicyAge;
///
/// let age: PolicyAge = "12 Years".parse().unwrap();
/// assert_eq!(age.years(), 12);
/// assert!("twelve years".parse::<PolicyAge>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PolicyAge {
    raw: String,
    years: u64,
}

impl PolicyAge {
    /// Parses an age string
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidAge(format!("{input:?}"));

        let mut tokens = input.split_whitespace();
        let (number, unit) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(number), Some(unit), None) => (number, unit),
            _ => return Err(invalid()),
        };

        if !unit.eq_ignore_ascii_case("years") || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let years = number.parse::<u64>().map_err(|_| invalid())?;

        Ok(Self {
            raw: input.to_string(),
            years,
        })
    }

    /// Reads an age from a raw payload value, which must be a string
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::String(s) => Self::parse(s),
            other => Err(ValidationError::InvalidAge(other.to_string())),
        }
    }

    /// Returns the age in whole years
    pub fn years(&self) -> u64 {
        self.years
    }

    /// Returns the age exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for PolicyAge {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PolicyAge {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PolicyAge> for String {
    fn from(age: PolicyAge) -> Self {
        age.raw
    }
}

impl fmt::Display for PolicyAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A validated policy for one of the supported product lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "policy_line", rename_all = "lowercase")]
pub enum Policy {
    Vehicle(VehiclePolicy),
    House(HousePolicy),
}

impl Policy {
    /// Builds a policy of the given line from a raw JSON payload
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the payload is not an object or
    /// any field fails validation.
    pub fn from_fields(line: PolicyLine, fields: &Value) -> Result<Self, ValidationError> {
        let fields = as_object(fields)?;
        match line {
            PolicyLine::Vehicle => VehiclePolicy::from_fields(fields).map(Policy::Vehicle),
            PolicyLine::House => HousePolicy::from_fields(fields).map(Policy::House),
        }
    }

    /// Returns the product line of this policy
    pub fn line(&self) -> PolicyLine {
        match self {
            Policy::Vehicle(_) => PolicyLine::Vehicle,
            Policy::House(_) => PolicyLine::House,
        }
    }

    /// Returns the age of the insured object
    pub fn age(&self) -> &PolicyAge {
        match self {
            Policy::Vehicle(p) => p.age(),
            Policy::House(p) => p.age(),
        }
    }
}

impl From<VehiclePolicy> for Policy {
    fn from(policy: VehiclePolicy) -> Self {
        Policy::Vehicle(policy)
    }
}

impl From<HousePolicy> for Policy {
    fn from(policy: HousePolicy) -> Self {
        Policy::House(policy)
    }
}

pub(crate) fn as_object(fields: &Value) -> Result<&Map<String, Value>, ValidationError> {
    fields.as_object().ok_or(ValidationError::PayloadNotObject)
}

pub(crate) fn required<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Value, ValidationError> {
    fields.get(key).ok_or_else(|| ValidationError::missing(key))
}
