//! # Parts
//!
//! A part is an attribute-bearing domain object hydrated from a gateway
//! payload. Its attributes are keyed by a [`Field`] enumeration, so the set of
//! attributes hydration may touch is fixed at compile time; payload keys
//! outside that set are dropped rather than rejected, which keeps older
//! clients working when the protocol grows new fields.
//!
//! Reads go through [`Part::get_attribute`], which prefers a computed
//! [`Accessor`] over the stored value and never fails on a missing field.

use crate::{attributes::Attributes, error::HydrateError, field::Field};
use serde_json::Value;

/// A computed attribute derived from the stored attributes only.
pub type Accessor<F> = fn(&Attributes<F>) -> Value;

/// An attribute-bearing domain object.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
/// pub enum EmbedFieldField { Name, Value, Inline }
///
/// #[derive(Debug, Clone)]
/// pub struct EmbedField { attributes: Attributes<EmbedFieldField> }
///
/// impl Part for EmbedField {
///     type Field = EmbedFieldField;
///     const KIND: &'static str = "embed field";
///     const KEY: EmbedFieldField = EmbedFieldField::Name;
///     // ...
/// }
/// ```
pub trait Part: Clone + Send + Sync + 'static {
    /// The fillable field enumeration.
    type Field: Field;

    /// Human readable kind, used in errors and logs.
    const KIND: &'static str;

    /// The field collections key this part by.
    const KEY: Self::Field;

    /// Build the part around an attribute mapping.
    fn from_attributes(attributes: Attributes<Self::Field>) -> Self;

    /// The stored attributes.
    fn attributes(&self) -> &Attributes<Self::Field>;

    /// Mutable access to the stored attributes.
    fn attributes_mut(&mut self) -> &mut Attributes<Self::Field>;

    /// The computed accessor backing `field`, if any.
    fn accessor(_field: Self::Field) -> Option<Accessor<Self::Field>> {
        None
    }

    /// Fields a payload must carry for the part to be usable.
    fn required() -> &'static [Self::Field] {
        &[]
    }

    /// Hydrate a new part from a raw payload.
    fn hydrate(payload: &Value) -> Result<Self, HydrateError> {
        let mut part = Self::from_attributes(Attributes::new());
        part.fill(payload)?;
        Ok(part)
    }

    /// Merge a raw payload into this part.
    ///
    /// The payload is validated before anything is written, so a rejected
    /// payload leaves the part untouched.
    fn fill(&mut self, payload: &Value) -> Result<(), HydrateError> {
        let Some(object) = payload.as_object() else {
            return Err(HydrateError::NotAnObject { kind: Self::KIND });
        };

        for field in Self::required() {
            let supplied = object.get(field.name()).is_some_and(|v| !v.is_null());
            let stored = self
                .attributes()
                .get(*field)
                .is_some_and(|v| !v.is_null());
            if !supplied && !stored {
                return Err(HydrateError::MissingField {
                    kind: Self::KIND,
                    field: field.name(),
                });
            }
        }

        self.attributes_mut().fill(object);
        Ok(())
    }

    /// Read an attribute: computed accessor first, then the stored value,
    /// then `null`.
    fn get_attribute(&self, field: Self::Field) -> Value {
        if let Some(accessor) = Self::accessor(field) {
            return accessor(self.attributes());
        }
        self.attributes().get(field).cloned().unwrap_or(Value::Null)
    }

    /// Read an attribute by wire name. Unknown names read as `null`.
    fn get_attribute_by_name(&self, name: &str) -> Value {
        Self::Field::from_name(name)
            .map(|field| self.get_attribute(field))
            .unwrap_or(Value::Null)
    }

    /// The value of the key field, rendered as a string.
    fn key(&self) -> Option<String> {
        key_string(self.attributes().get(Self::KEY)?)
    }
}

/// Render a key-like attribute value as a string.
///
/// Strings are taken as-is and numbers by their decimal form; anything else
/// cannot serve as a key.
pub fn key_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Accessor for boolean flags that read `false` when never set.
///
/// An explicit `null` also reads `false`; any other stored value is coerced by
/// truthiness the way the wire format uses it (`0`/`1`, booleans).
pub fn flag<F: Field>(attributes: &Attributes<F>, field: F) -> Value {
    let set = match attributes.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty() && s != "0",
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(_)) => true,
    };
    Value::Bool(set)
}
