//! The configuration registry: one item per catalog key, with typed accessors
//! and bulk JSON import/export.
//!
//! Imports are all-or-nothing. Every member of the document is validated
//! against its item first, and values are only committed once the whole
//! document has passed. A failed import leaves the registry untouched.

use std::collections::BTreeMap;

use crate::catalog::{self, Key};
use crate::error::ConfigError;
use crate::item::ConfigurationItem;
use crate::value::{self, ConfigValue, Value};

/// Keyed collection of [`ConfigurationItem`]s, exhaustively populated from
/// the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    items: BTreeMap<Key, ConfigurationItem>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    pub fn new() -> Self {
        let mut config = Self {
            items: BTreeMap::new(),
        };
        config.set_defaults();
        config
    }

    /// Reset every item to its catalog default.
    pub fn set_defaults(&mut self) {
        self.items.clear();
        for entry in catalog::entries() {
            self.add_item(ConfigurationItem::new(entry.key, entry.default.to_value()));
        }
        tracing::debug!(items = self.items.len(), "configuration defaults loaded");
    }

    /// Insert an item. The first item for a key wins; later ones are ignored
    /// and `false` is returned.
    pub fn add_item(&mut self, item: ConfigurationItem) -> bool {
        let key = item.key();
        if self.items.contains_key(&key) {
            tracing::warn!(%key, "duplicate configuration item ignored");
            return false;
        }
        self.items.insert(key, item);
        true
    }

    pub fn get_item(&self, key: Key) -> Result<&ConfigurationItem, ConfigError> {
        self.items
            .get(&key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.name().into()))
    }

    pub fn get_item_mut(&mut self, key: Key) -> Result<&mut ConfigurationItem, ConfigError> {
        self.items
            .get_mut(&key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.name().into()))
    }

    /// Items in catalog declaration order.
    pub fn items(&self) -> impl Iterator<Item = &ConfigurationItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get<T: ConfigValue>(&self, key: Key) -> Result<T, ConfigError> {
        self.get_item(key)?.read_as()
    }

    pub fn get_bool(&self, key: Key) -> Result<bool, ConfigError> {
        self.get(key)
    }

    pub fn get_int(&self, key: Key) -> Result<i64, ConfigError> {
        self.get(key)
    }

    pub fn get_double(&self, key: Key) -> Result<f64, ConfigError> {
        self.get(key)
    }

    pub fn get_string(&self, key: Key) -> Result<String, ConfigError> {
        self.get(key)
    }

    pub fn set(&mut self, key: Key, value: impl Into<Value>) -> Result<(), ConfigError> {
        self.get_item_mut(key)?.write(value)
    }

    pub fn set_bool(&mut self, key: Key, value: bool) -> Result<(), ConfigError> {
        self.set(key, value)
    }

    pub fn set_int(&mut self, key: Key, value: i64) -> Result<(), ConfigError> {
        self.set(key, value)
    }

    pub fn set_double(&mut self, key: Key, value: f64) -> Result<(), ConfigError> {
        self.set(key, value)
    }

    pub fn set_string(&mut self, key: Key, value: impl Into<String>) -> Result<(), ConfigError> {
        self.set(key, value.into())
    }

    /// Export every item as one flat JSON object, in catalog order.
    pub fn to_json(&self) -> Result<serde_json::Value, ConfigError> {
        let mut doc = serde_json::Map::with_capacity(self.items.len());
        for item in self.items() {
            let (name, json) = item.to_json_member()?;
            doc.insert(name.to_string(), json);
        }
        Ok(serde_json::Value::Object(doc))
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(&self.to_json()?)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(&self.to_json()?)?)
    }

    /// Merge a JSON object into the registry.
    ///
    /// Only the members present are updated. Unknown member names and
    /// type-incompatible values reject the whole document.
    pub fn apply_json(&mut self, doc: &serde_json::Value) -> Result<(), ConfigError> {
        let staged = self.stage_json(doc)?;
        let count = staged.len();
        for (key, value) in staged {
            // Staged values were validated against these same items.
            self.get_item_mut(key)?.write(value)?;
        }
        tracing::debug!(members = count, "configuration document applied");
        Ok(())
    }

    /// Parse JSON text and merge it into the registry.
    pub fn apply_json_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let doc: serde_json::Value = serde_json::from_str(text)?;
        self.apply_json(&doc)
    }

    fn stage_json(&self, doc: &serde_json::Value) -> Result<Vec<(Key, Value)>, ConfigError> {
        let Some(members) = doc.as_object() else {
            return Err(ConfigError::InvalidValue {
                key: "<document>".into(),
                reason: format!(
                    "expected a JSON object, found {} `{}`",
                    value::json_kind(doc),
                    value::json_fragment(doc),
                ),
            });
        };

        let mut staged = Vec::with_capacity(members.len());
        for (name, json) in members {
            let key: Key = name
                .parse()
                .map_err(|_| ConfigError::UnknownKey { key: name.clone() })?;
            let value = self.get_item(key)?.parse_json(json)?;
            staged.push((key, value));
        }
        Ok(staged)
    }
}
