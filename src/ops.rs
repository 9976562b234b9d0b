//! Config operations: listing, key lookup, setting from raw strings, and the
//! result type callers use to display them.
//!
//! Provides the logic behind `list`, `describe`, `gen`, `get` and `set` for
//! any front end that works with key names and text values.

use std::fmt;

use crate::catalog::{self, Key};
use crate::error::ConfigError;
use crate::registry::Configuration;
use crate::types::ConfigAction;
use crate::value::Value;

/// Result of a config operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// A JSON document of default values.
    Template(String),
    /// A key's current value and its description.
    KeyValue {
        key: String,
        value: String,
        doc: Vec<String>,
    },
    /// Confirmation that a value was stored.
    ValueSet { key: String, value: String },
    /// All current key-value pairs.
    Listing { entries: Vec<(String, String)> },
    /// One block per key: type, default and description.
    Descriptions { entries: Vec<KeyDescription> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyDescription {
    pub key: String,
    pub value_type: String,
    pub default: String,
    pub description: String,
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::Template(t) => write!(f, "{t}"),
            ConfigResult::KeyValue { key, value, doc } => {
                for line in doc {
                    writeln!(f, "# {line}")?;
                }
                write!(f, "{key} = {value}")
            }
            ConfigResult::ValueSet { key, value } => write!(f, "Set {key} = {value}"),
            ConfigResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
            ConfigResult::Descriptions { entries } => {
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                        writeln!(f)?;
                    }
                    writeln!(f, "{} ({}, default {})", entry.key, entry.value_type, entry.default)?;
                    write!(f, "    {}", entry.description)?;
                }
                Ok(())
            }
        }
    }
}

/// Run a `ConfigAction` against a registry.
pub fn handle(
    config: &mut Configuration,
    action: &ConfigAction,
) -> Result<ConfigResult, ConfigError> {
    match action {
        ConfigAction::List => Ok(list_values(config)),
        ConfigAction::Describe => Ok(describe_keys()),
        ConfigAction::Gen => generate_template().map(ConfigResult::Template),
        ConfigAction::Get { key } => get_value(config, key),
        ConfigAction::Set { key, value } => set_value(config, key, value),
    }
}

/// Pretty JSON document holding every catalog default.
pub fn generate_template() -> Result<String, ConfigError> {
    Configuration::new().to_json_string_pretty()
}

/// Get a value by canonical name, including its description.
pub fn get_value(config: &Configuration, name: &str) -> Result<ConfigResult, ConfigError> {
    let key: Key = name.parse()?;
    let item = config.get_item(key)?;
    Ok(ConfigResult::KeyValue {
        key: key.name().into(),
        value: item.value().to_string(),
        doc: wrap_description(key.description()),
    })
}

/// Parse `raw` according to the key's type and store it.
pub fn set_value(
    config: &mut Configuration,
    name: &str,
    raw: &str,
) -> Result<ConfigResult, ConfigError> {
    let key: Key = name.parse()?;
    let ty = config.get_item(key)?.value_type();
    let value = Value::parse_as(ty, raw).ok_or_else(|| ConfigError::InvalidValue {
        key: key.name().into(),
        reason: format!("'{raw}' is not a valid {ty}"),
    })?;
    let display = value.to_string();
    config.set(key, value)?;
    Ok(ConfigResult::ValueSet {
        key: key.name().into(),
        value: display,
    })
}

/// List all current values in catalog order.
pub fn list_values(config: &Configuration) -> ConfigResult {
    let entries = config
        .items()
        .map(|item| (item.key().name().to_string(), item.value().to_string()))
        .collect();
    ConfigResult::Listing { entries }
}

/// Describe every catalog key.
pub fn describe_keys() -> ConfigResult {
    let entries = catalog::entries()
        .map(|entry| KeyDescription {
            key: entry.name.into(),
            value_type: entry.default.value_type().to_string(),
            default: entry.default.to_value().to_string(),
            description: entry.description.into(),
        })
        .collect();
    ConfigResult::Descriptions { entries }
}

/// Split a description into its sentences. Catalog descriptions separate
/// sentences with two spaces.
fn wrap_description(description: &str) -> Vec<String> {
    description
        .split("  ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
