//! Test Data Builders
//!
//! Builders for raw quote payloads. Tests set only the fields they care
//! about; everything else keeps a value that passes validation.

use chrono::NaiveDate;
use serde_json::{json, Map, Value};

/// Builder for raw vehicle payloads
pub struct VehiclePayloadBuilder {
    age: Value,
    accidents: Vec<Value>,
}

impl Default for VehiclePayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VehiclePayloadBuilder {
    /// Creates a payload for a ten year old vehicle with no accidents
    pub fn new() -> Self {
        Self {
            age: json!("10 years"),
            accidents: Vec::new(),
        }
    }

    /// Sets the age string
    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = Value::String(age.into());
        self
    }

    /// Sets an arbitrary raw age value
    pub fn with_raw_age(mut self, age: Value) -> Self {
        self.age = age;
        self
    }

    /// Adds an accident
    pub fn with_accident(mut self, date: NaiveDate, at_fault: bool) -> Self {
        self.accidents.push(json!({"date": date.to_string(), "at_fault": at_fault}));
        self
    }

    /// Adds a raw accident entry, valid or not
    pub fn with_raw_accident(mut self, entry: Value) -> Self {
        self.accidents.push(entry);
        self
    }

    /// Builds the payload
    pub fn build(self) -> Value {
        json!({"age": self.age, "accident_history": self.accidents})
    }
}

/// Builder for raw house payloads
///
/// Optional fields are only emitted when set, so defaults can be tested.
pub struct HousePayloadBuilder {
    fields: Map<String, Value>,
}

impl Default for HousePayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HousePayloadBuilder {
    /// Creates a payload for a twenty year old house with no optional fields
    pub fn new() -> Self {
        let mut fields = Map::new();
        fields.insert("age".to_string(), json!("20 years"));
        Self { fields }
    }

    /// Sets the age string
    pub fn with_age(self, age: impl Into<String>) -> Self {
        self.with_field("age", Value::String(age.into()))
    }

    /// Sets the flood risk code
    pub fn with_flood_risk(self, flood_risk: &str) -> Self {
        self.with_field("flood_risk", json!(flood_risk))
    }

    /// Sets the parrot count
    pub fn with_parrots(self, count: i64) -> Self {
        self.with_field("n_parrots", json!(count))
    }

    /// Sets intact and broken window counts
    pub fn with_windows(self, intact: u64, broken: u64) -> Self {
        self.with_field("windows", json!({"intact": intact, "broken": broken}))
    }

    /// Sets any field to an arbitrary value
    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Removes a field
    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    /// Builds the payload
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
