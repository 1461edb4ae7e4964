//! House policies

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::policy::{required, PolicyAge};

/// Window label for undamaged windows
pub const INTACT: &str = "intact";

/// Window label for damaged windows
pub const BROKEN: &str = "broken";

/// Flood zone classification, ordered by severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FloodRisk {
    #[default]
    Low,
    Medium,
    High,
}

impl FloodRisk {
    /// Returns the upper-case code used in payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            FloodRisk::Low => "LOW",
            FloodRisk::Medium => "MEDIUM",
            FloodRisk::High => "HIGH",
        }
    }

    /// Medium and high flood zones attract a surcharge
    pub fn is_elevated(&self) -> bool {
        matches!(self, FloodRisk::Medium | FloodRisk::High)
    }
}

impl fmt::Display for FloodRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FloodRisk {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(FloodRisk::Low),
            "MEDIUM" => Ok(FloodRisk::Medium),
            "HIGH" => Ok(FloodRisk::High),
            other => Err(ValidationError::InvalidFloodRisk(format!("{other:?}"))),
        }
    }
}

/// Window counts keyed by condition label (`"intact"`, `"broken"`, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WindowCondition(BTreeMap<String, u64>);

impl WindowCondition {
    /// Creates an empty window condition
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the count for a label
    pub fn with(mut self, label: impl Into<String>, count: u64) -> Self {
        self.0.insert(label.into(), count);
        self
    }

    /// Reads window counts from a raw payload value
    ///
    /// # Errors
    ///
    /// Fails when the value is not a mapping or any count is not a
    /// non-negative integer.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let map = value.as_object().ok_or(ValidationError::WindowsNotMapping)?;

        map.iter()
            .map(|(label, count)| {
                count
                    .as_u64()
                    .map(|c| (label.clone(), c))
                    .ok_or_else(|| ValidationError::InvalidWindowCount {
                        label: label.clone(),
                        value: count.to_string(),
                    })
            })
            .collect()
    }

    /// Count for an arbitrary label
    pub fn get(&self, label: &str) -> Option<u64> {
        self.0.get(label).copied()
    }

    /// Number of intact windows, if reported
    pub fn intact(&self) -> Option<u64> {
        self.get(INTACT)
    }

    /// Number of broken windows, if reported
    pub fn broken(&self) -> Option<u64> {
        self.get(BROKEN)
    }

    /// Returns true if no labels are present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates labels and counts in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(label, count)| (label.as_str(), *count))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for WindowCondition {
    fn from_iter<T: IntoIterator<Item = (S, u64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(label, count)| (label.into(), count)).collect())
    }
}

/// A validated house policy
///
/// Flood risk defaults to [`FloodRisk::Low`], the parrot count to zero
/// and the window condition to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HousePolicy {
    age: PolicyAge,
    flood_risk: FloodRisk,
    #[serde(rename = "n_parrots")]
    parrot_count: u64,
    #[serde(rename = "windows")]
    window_condition: WindowCondition,
}

impl HousePolicy {
    /// Creates a house policy with default risk attributes
    pub fn new(age: &str) -> Result<Self, ValidationError> {
        Ok(Self::with_age(PolicyAge::parse(age)?))
    }

    fn with_age(age: PolicyAge) -> Self {
        Self {
            age,
            flood_risk: FloodRisk::default(),
            parrot_count: 0,
            window_condition: WindowCondition::new(),
        }
    }

    /// Sets the flood risk
    pub fn with_flood_risk(mut self, flood_risk: FloodRisk) -> Self {
        self.flood_risk = flood_risk;
        self
    }

    /// Sets the number of parrots kept at the property
    pub fn with_parrots(mut self, parrot_count: u64) -> Self {
        self.parrot_count = parrot_count;
        self
    }

    /// Sets the window condition
    pub fn with_windows(mut self, window_condition: WindowCondition) -> Self {
        self.window_condition = window_condition;
        self
    }

    /// Builds a house policy from raw payload fields
    ///
    /// `age` is required; `flood_risk`, `n_parrots` and `windows` fall back
    /// to their defaults when absent.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut policy = Self::with_age(PolicyAge::from_value(required(fields, "age")?)?);

        if let Some(value) = fields.get("flood_risk") {
            policy.flood_risk = value
                .as_str()
                .ok_or_else(|| ValidationError::InvalidFloodRisk(value.to_string()))?
                .parse()?;
        }

        if let Some(value) = fields.get("n_parrots") {
            policy.parrot_count = value
                .as_u64()
                .ok_or_else(|| ValidationError::InvalidParrotCount(value.to_string()))?;
        }

        if let Some(value) = fields.get("windows") {
            policy.window_condition = WindowCondition::from_value(value)?;
        }

        Ok(policy)
    }

    /// Age of the house
    pub fn age(&self) -> &PolicyAge {
        &self.age
    }

    /// Flood zone of the property
    pub fn flood_risk(&self) -> FloodRisk {
        self.flood_risk
    }

    /// Number of parrots kept at the property
    pub fn parrot_count(&self) -> u64 {
        self.parrot_count
    }

    /// Reported window condition
    pub fn window_condition(&self) -> &WindowCondition {
        &self.window_condition
    }
}
