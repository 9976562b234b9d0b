//! Typed setting values.
//!
//! A [`Value`] holds exactly one of the four representations a setting can
//! take. Its variant is the setting's type tag ([`ValueType`]); items never
//! change variant after construction.

use std::fmt;

use serde::Serialize;

/// The fixed value kind of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    Int,
    Double,
    String,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Bool => "bool",
            ValueType::Int => "integer",
            ValueType::Double => "double",
            ValueType::String => "string",
        };
        f.write_str(name)
    }
}

/// A setting value. Serializes as a bare JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Double(_) => ValueType::Double,
            Value::String(_) => ValueType::String,
        }
    }

    /// Parse a raw user-supplied string as a value of type `ty`.
    ///
    /// Booleans accept `true`/`false` in any case. Doubles must be finite, since
    /// JSON cannot carry NaN or infinities. Strings are taken verbatim.
    pub fn parse_as(ty: ValueType, raw: &str) -> Option<Value> {
        match ty {
            ValueType::Bool => {
                if raw.eq_ignore_ascii_case("true") {
                    Some(Value::Bool(true))
                } else if raw.eq_ignore_ascii_case("false") {
                    Some(Value::Bool(false))
                } else {
                    None
                }
            }
            ValueType::Int => raw.trim().parse().ok().map(Value::Int),
            ValueType::Double => raw
                .trim()
                .parse()
                .ok()
                .filter(|d: &f64| d.is_finite())
                .map(Value::Double),
            ValueType::String => Some(Value::String(raw.to_string())),
        }
    }
}

/// Renders the value as its JSON scalar, matching what export writes.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // serde_json would print these as `null`.
            Value::Double(d) if !d.is_finite() => write!(f, "{d:?}"),
            _ => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

/// A Rust type that maps onto exactly one [`ValueType`].
///
/// Extraction is exact: an `f64` is never read out of an `Int` value.
pub trait ConfigValue: Sized {
    const TYPE: ValueType;

    fn extract(value: &Value) -> Option<Self>;
}

impl ConfigValue for bool {
    const TYPE: ValueType = ValueType::Bool;

    fn extract(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl ConfigValue for i64 {
    const TYPE: ValueType = ValueType::Int;

    fn extract(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl ConfigValue for f64 {
    const TYPE: ValueType = ValueType::Double;

    fn extract(value: &Value) -> Option<Self> {
        match value {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }
}

impl ConfigValue for String {
    const TYPE: ValueType = ValueType::String;

    fn extract(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Name of a JSON value's type, for diagnostics.
pub(crate) fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(n) if n.is_f64() => "floating-point number",
        serde_json::Value::Number(_) => "integer",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

const FRAGMENT_LIMIT: usize = 64;

/// Compact rendering of a JSON value, cut at a char boundary.
pub(crate) fn json_fragment(json: &serde_json::Value) -> String {
    let text = json.to_string();
    if text.chars().count() <= FRAGMENT_LIMIT {
        return text;
    }
    let mut cut: String = text.chars().take(FRAGMENT_LIMIT).collect();
    cut.push_str("...");
    cut
}
