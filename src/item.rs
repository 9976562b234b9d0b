//! A single typed configuration cell.

use crate::catalog::Key;
use crate::error::ConfigError;
use crate::value::{self, ConfigValue, Value, ValueType};

/// One setting: a key bound to a value whose type is fixed at construction.
///
/// Reads and writes are exact. The only coercion anywhere is on JSON import,
/// where a `Double` item accepts a JSON integer.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationItem {
    key: Key,
    value: Value,
}

impl ConfigurationItem {
    pub fn new(key: Key, value: impl Into<Value>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Read the value as `T`, failing if `T` is not the item's type.
    pub fn read_as<T: ConfigValue>(&self) -> Result<T, ConfigError> {
        T::extract(&self.value).ok_or_else(|| self.mismatch(T::TYPE))
    }

    /// Replace the value. The new value must have the item's type.
    pub fn write(&mut self, value: impl Into<Value>) -> Result<(), ConfigError> {
        let value = value.into();
        if value.value_type() != self.value_type() {
            return Err(self.mismatch(value.value_type()));
        }
        tracing::trace!(key = %self.key, value = %value, "config value written");
        self.value = value;
        Ok(())
    }

    pub fn set_bool(&mut self, value: bool) -> Result<(), ConfigError> {
        self.write(value)
    }

    pub fn set_int(&mut self, value: i64) -> Result<(), ConfigError> {
        self.write(value)
    }

    pub fn set_double(&mut self, value: f64) -> Result<(), ConfigError> {
        self.write(value)
    }

    pub fn set_string(&mut self, value: impl Into<String>) -> Result<(), ConfigError> {
        self.write(value.into())
    }

    /// Render the item as a named JSON member.
    ///
    /// Fails for non-finite doubles, which JSON numbers cannot represent.
    pub fn to_json_member(&self) -> Result<(&'static str, serde_json::Value), ConfigError> {
        let json = match &self.value {
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Double(d) => serde_json::Number::from_f64(*d)
                .map(serde_json::Value::Number)
                .ok_or_else(|| ConfigError::Internal {
                    key: self.key.name().into(),
                    reason: format!("{d} is not representable as a JSON number"),
                })?,
            Value::String(s) => serde_json::Value::String(s.clone()),
        };
        Ok((self.key.name(), json))
    }

    /// Validate a JSON value against the item's type without storing it.
    ///
    /// A `Double` item widens JSON integers. Every other type must match
    /// exactly.
    pub fn parse_json(&self, json: &serde_json::Value) -> Result<Value, ConfigError> {
        let parsed = match (self.value_type(), json) {
            (ValueType::Bool, serde_json::Value::Bool(b)) => Some(Value::Bool(*b)),
            (ValueType::Int, serde_json::Value::Number(n)) => n.as_i64().map(Value::Int),
            (ValueType::Double, serde_json::Value::Number(n)) => n.as_f64().map(Value::Double),
            (ValueType::String, serde_json::Value::String(s)) => Some(Value::String(s.clone())),
            _ => None,
        };
        parsed.ok_or_else(|| ConfigError::InvalidValue {
            key: self.key.name().into(),
            reason: format!(
                "expected {}, found {} `{}`",
                expected_json(self.value_type()),
                value::json_kind(json),
                value::json_fragment(json),
            ),
        })
    }

    /// Validate and store a JSON value. The item is untouched on failure.
    pub fn set_from_json(&mut self, json: &serde_json::Value) -> Result<(), ConfigError> {
        let value = self.parse_json(json)?;
        self.value = value;
        Ok(())
    }

    fn mismatch(&self, found: ValueType) -> ConfigError {
        ConfigError::TypeMismatch {
            key: self.key.name().into(),
            expected: self.value_type(),
            found,
        }
    }
}

fn expected_json(ty: ValueType) -> &'static str {
    match ty {
        ValueType::Bool => "a boolean",
        ValueType::Int => "an integer",
        ValueType::Double => "a number (or something that can be cast to double)",
        ValueType::String => "a string",
    }
}

impl TryFrom<&ConfigurationItem> for bool {
    type Error = ConfigError;

    fn try_from(item: &ConfigurationItem) -> Result<Self, Self::Error> {
        item.read_as()
    }
}

impl TryFrom<&ConfigurationItem> for i64 {
    type Error = ConfigError;

    fn try_from(item: &ConfigurationItem) -> Result<Self, Self::Error> {
        item.read_as()
    }
}

impl TryFrom<&ConfigurationItem> for f64 {
    type Error = ConfigError;

    fn try_from(item: &ConfigurationItem) -> Result<Self, Self::Error> {
        item.read_as()
    }
}

impl TryFrom<&ConfigurationItem> for String {
    type Error = ConfigError;

    fn try_from(item: &ConfigurationItem) -> Result<Self, Self::Error> {
        item.read_as()
    }
}
