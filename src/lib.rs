//! Typed, process-wide configuration for a thermophysical property library.
//!
//! Thermoconf holds a fixed, compile-time set of named settings. Each setting
//! has exactly one value type (boolean, integer, double or string), a default
//! and a description. The whole set can be exported to and imported from a
//! flat JSON object.
//!
//! ```ignore
//! let mut config = Configuration::new();
//! config.set_bool(Key::NormalizeGasConstants, false)?;
//! config.apply_json_str(r#"{"MAXIMUM_TABLE_DIRECTORY_SIZE_IN_GB": 2}"#)?;
//! let text = config.to_json_string()?;
//! ```
//!
//! # Design: catalog as source of truth
//!
//! The [`catalog`] table lists every key with its canonical name, default and
//! description. Everything else derives from it:
//!
//! - **The default's type is the key's type.** A key declared with `true` only
//!   ever accepts booleans. Writing a double to it fails with
//!   [`ConfigError::TypeMismatch`]; nothing is converted implicitly.
//! - **The canonical name is the wire name.** `NORMALIZE_GAS_CONSTANTS` is both
//!   what [`Key::name`] returns and the JSON member name on import and export.
//!   Renaming a key breaks every persisted configuration.
//! - **Every key is always present.** [`Configuration::new`] populates one item
//!   per catalog entry, so a lookup by [`Key`] only fails if the registry was
//!   tampered with.
//!
//! # Values
//!
//! A [`Value`] is a plain enum; its variant is the item's type tag. Reads are
//! exact through [`ConfigurationItem::read_as`], the typed getters, or
//! `TryFrom<&ConfigurationItem>`:
//!
//! ```ignore
//! let item = config.get_item(Key::PhaseEnvelopeStartingPressurePa)?;
//! let pressure: f64 = item.try_into()?;
//! ```
//!
//! # JSON import and export
//!
//! [`Configuration::to_json`] emits one member per key in catalog order, so
//! exported documents diff cleanly. [`Configuration::apply_json`] is a sparse
//! merge: members absent from the document keep their current value.
//!
//! Import is strict:
//!
//! - Unknown member names fail with [`ConfigError::UnknownKey`]. A typo in a
//!   persisted file is reported, never silently ignored.
//! - Each value must have its key's JSON type. The one exception is a double
//!   key, which accepts a JSON integer (`2` becomes `2.0`).
//! - The document is applied **all-or-nothing**. Every member is validated
//!   before any is stored, so a failed import leaves the registry unchanged.
//!
//! Export fails only for a non-finite double, which JSON cannot represent.
//!
//! # Shared instance
//!
//! The [`global`] module holds a lazily created registry behind one lock, with
//! free functions such as [`get_config_bool`] and [`set_config_as_json_string`].
//! Prefer passing a [`Configuration`] explicitly where the host allows it.
//!
//! # Actions
//!
//! [`ConfigAction`] and [`handle`] give any front end `list`, `describe`,
//! `gen`, `get` and `set` over key names and raw string values. Results are
//! [`ConfigResult`]s that implement `Display`.
//!
//! # Error handling
//!
//! All fallible operations return [`ConfigError`]. Messages name the key by
//! its canonical name and, for rejected JSON, quote the offending fragment.
//! [`ConfigError::kind`] groups variants into [`ErrorKind`]s. With the
//! `rich-errors` feature the error also implements `miette::Diagnostic`.

pub mod catalog;
pub mod error;
pub mod global;
pub mod types;

mod item;
mod ops;
mod registry;
mod value;

#[cfg(test)]
mod fixtures;

pub use catalog::Key;
pub use error::{ConfigError, ErrorKind};
pub use global::{
    config_key_description, config_key_description_by_name, config_key_to_string,
    get_config_as_json, get_config_as_json_string, get_config_bool, get_config_double,
    get_config_int, get_config_string, reset_config, set_config_as_json_string, set_config_bool,
    set_config_double, set_config_int, set_config_json, set_config_string, with_config,
};
pub use item::ConfigurationItem;
pub use ops::{ConfigResult, KeyDescription, handle};
pub use registry::Configuration;
pub use types::ConfigAction;
pub use value::{ConfigValue, Value, ValueType};
