//! Vehicle policies and accident history

use chrono::NaiveDate;
use core_kernel::LookbackWindow;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::policy::{required, PolicyAge};

/// A single accident in the insured vehicle's history
///
/// Raw payloads describe an accident as `{"date": "YYYY-MM-DD", "at_fault": bool}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccidentRecord {
    #[serde(rename = "date")]
    occurred_on: NaiveDate,
    at_fault: bool,
}

impl AccidentRecord {
    /// Creates an accident record
    pub fn new(occurred_on: NaiveDate, at_fault: bool) -> Self {
        Self {
            occurred_on,
            at_fault,
        }
    }

    /// Converts a raw `{date, at_fault}` mapping into a record
    ///
    /// # Errors
    ///
    /// Fails when the value is not a mapping, a key is missing, the date is
    /// not an ISO-8601 calendar date, or `at_fault` is not a boolean.
    pub fn from_mapping(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }

    /// Date the accident happened
    pub fn occurred_on(&self) -> NaiveDate {
        self.occurred_on
    }

    /// Whether the insured party was at fault
    pub fn at_fault(&self) -> bool {
        self.at_fault
    }
}

/// An accident history entry as supplied by the caller
///
/// Entries that are already typed pass through untouched; raw entries are
/// converted when the policy is built.
#[derive(Debug, Clone, PartialEq)]
pub enum AccidentEntry {
    Record(AccidentRecord),
    Raw(Value),
}

impl AccidentEntry {
    fn into_record(self, index: usize) -> Result<AccidentRecord, ValidationError> {
        match self {
            AccidentEntry::Record(record) => Ok(record),
            AccidentEntry::Raw(value) => AccidentRecord::from_mapping(&value)
                .map_err(|e| ValidationError::accident_entry(index, format!("{value}: {e}"))),
        }
    }
}

impl From<AccidentRecord> for AccidentEntry {
    fn from(record: AccidentRecord) -> Self {
        AccidentEntry::Record(record)
    }
}

impl From<Value> for AccidentEntry {
    fn from(value: Value) -> Self {
        AccidentEntry::Raw(value)
    }
}

/// A validated vehicle policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehiclePolicy {
    age: PolicyAge,
    accident_history: Vec<AccidentRecord>,
}

impl VehiclePolicy {
    /// Builds a vehicle policy, normalising every accident entry
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use domain_quote::{AccidentEntry, AccidentRecord, VehiclePolicy};
    /// use serde_json::json;
    ///
    /// let policy = VehiclePolicy::new(
    ///     "10 years",
    ///     vec![
    ///         AccidentEntry::from(json!({"date": "2023-04-23", "at_fault": true})),
    ///         AccidentEntry::from(AccidentRecord::new(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(), false)),
    ///     ],
    /// ).unwrap();
    /// assert_eq!(policy.accident_history().len(), 2);
    /// ```
    pub fn new<I, E>(age: &str, accident_history: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = E>,
        E: Into<AccidentEntry>,
    {
        let age = PolicyAge::parse(age)?;
        Self::with_age(age, accident_history)
    }

    fn with_age<I, E>(age: PolicyAge, accident_history: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = E>,
        E: Into<AccidentEntry>,
    {
        let accident_history = accident_history
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into().into_record(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            age,
            accident_history,
        })
    }

    /// Builds a vehicle policy from raw payload fields
    ///
    /// Expects `age` (string) and `accident_history` (list of mappings).
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, ValidationError> {
        let age = PolicyAge::from_value(required(fields, "age")?)?;
        let history = required(fields, "accident_history")?
            .as_array()
            .ok_or(ValidationError::AccidentHistoryNotList)?;

        Self::with_age(age, history.iter().cloned().map(AccidentEntry::Raw))
    }

    /// Age of the vehicle
    pub fn age(&self) -> &PolicyAge {
        &self.age
    }

    /// Accident history in the order supplied
    pub fn accident_history(&self) -> &[AccidentRecord] {
        &self.accident_history
    }

    /// Accidents that happened inside `window`, counted back from `today`
    pub fn accidents_within(
        &self,
        window: LookbackWindow,
        today: NaiveDate,
    ) -> impl Iterator<Item = &AccidentRecord> + '_ {
        self.accident_history
            .iter()
            .filter(move |a| window.contains(a.occurred_on, today))
    }
}
