//! Attribute storage for parts.

use crate::field::Field;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The attribute mapping of a part, keyed by its field enumeration.
///
/// An attribute explicitly set to `null` is present; an attribute never set is
/// absent. Computed accessors rely on that distinction.
#[derive(Clone, PartialEq)]
pub struct Attributes<F: Field> {
    values: BTreeMap<F, Value>,
}

impl<F: Field> Attributes<F> {
    /// Create an empty attribute mapping.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Copy every key of `payload` that names a field of `F`.
    ///
    /// Unknown keys are ignored. Returns how many attributes were set.
    pub fn fill(&mut self, payload: &Map<String, Value>) -> usize {
        let mut applied = 0;
        for (key, value) in payload {
            if let Some(field) = F::from_name(key) {
                self.values.insert(field, value.clone());
                applied += 1;
            }
        }
        applied
    }

    /// Get the stored value of a field.
    pub fn get(&self, field: F) -> Option<&Value> {
        self.values.get(&field)
    }

    /// Get a field as a string slice.
    pub fn get_str(&self, field: F) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Get a field as a boolean.
    pub fn get_bool(&self, field: F) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    /// Get a field as an unsigned integer.
    ///
    /// Discord sends large integers (snowflakes, permission sets) as strings,
    /// so numeric strings are accepted too.
    pub fn get_u64(&self, field: F) -> Option<u64> {
        match self.get(field)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Set a field, returning the previous value.
    pub fn set(&mut self, field: F, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(field, value.into())
    }

    /// Remove a field, returning its value.
    pub fn remove(&mut self, field: F) -> Option<Value> {
        self.values.remove(&field)
    }

    /// Whether the field has been set (including to `null`).
    pub fn contains(&self, field: F) -> bool {
        self.values.contains_key(&field)
    }

    /// Iterate over the set attributes in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (F, &Value)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }

    /// Number of set attributes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render the attributes as a JSON object keyed by wire names.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .values
            .iter()
            .map(|(field, value)| (field.name().to_string(), value.clone()))
            .collect();
        Value::Object(map)
    }
}

impl<F: Field> Default for Attributes<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field> std::fmt::Debug for Attributes<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.values.iter().map(|(field, value)| (field.name(), value)))
            .finish()
    }
}
