//! The process-wide registry and its free-function facade.
//!
//! The shared [`Configuration`] is created on first use and guarded by one
//! coarse lock. Every function here takes the lock once, so a bulk import
//! is never observed half-applied by a concurrent export.
//!
//! Hosts that can pass a [`Configuration`] explicitly should prefer that; this
//! module exists for call sites that need ambient access.

use std::sync::LazyLock;

use parking_lot::Mutex;

use crate::catalog::Key;
use crate::error::ConfigError;
use crate::registry::Configuration;

static CONFIG: LazyLock<Mutex<Configuration>> =
    LazyLock::new(|| Mutex::new(Configuration::new()));

/// Run `f` with exclusive access to the shared registry.
///
/// The lock is not reentrant: calling any other function of this module from
/// inside `f` deadlocks. Use the `&mut Configuration` it is given instead.
pub fn with_config<R>(f: impl FnOnce(&mut Configuration) -> R) -> R {
    f(&mut *CONFIG.lock())
}

/// Restore every shared setting to its catalog default.
pub fn reset_config() {
    with_config(Configuration::set_defaults);
}

pub fn config_key_to_string(key: Key) -> &'static str {
    key.name()
}

pub fn config_key_description(key: Key) -> &'static str {
    key.description()
}

pub fn config_key_description_by_name(name: &str) -> Result<&'static str, ConfigError> {
    Ok(name.parse::<Key>()?.description())
}

pub fn get_config_bool(key: Key) -> Result<bool, ConfigError> {
    with_config(|config| config.get_bool(key))
}

pub fn get_config_int(key: Key) -> Result<i64, ConfigError> {
    with_config(|config| config.get_int(key))
}

pub fn get_config_double(key: Key) -> Result<f64, ConfigError> {
    with_config(|config| config.get_double(key))
}

pub fn get_config_string(key: Key) -> Result<String, ConfigError> {
    with_config(|config| config.get_string(key))
}

pub fn get_config_as_json() -> Result<serde_json::Value, ConfigError> {
    with_config(|config| config.to_json())
}

pub fn get_config_as_json_string() -> Result<String, ConfigError> {
    with_config(|config| config.to_json_string())
}

pub fn set_config_bool(key: Key, value: bool) -> Result<(), ConfigError> {
    with_config(|config| config.set_bool(key, value))
}

pub fn set_config_int(key: Key, value: i64) -> Result<(), ConfigError> {
    with_config(|config| config.set_int(key, value))
}

pub fn set_config_double(key: Key, value: f64) -> Result<(), ConfigError> {
    with_config(|config| config.set_double(key, value))
}

pub fn set_config_string(key: Key, value: impl Into<String>) -> Result<(), ConfigError> {
    let value = value.into();
    with_config(|config| config.set_string(key, value))
}

/// Merge a JSON object into the shared registry (all-or-nothing).
pub fn set_config_json(doc: &serde_json::Value) -> Result<(), ConfigError> {
    with_config(|config| config.apply_json(doc))
}

pub fn set_config_as_json_string(text: &str) -> Result<(), ConfigError> {
    // Parse outside the lock; only the apply needs exclusive access.
    let doc: serde_json::Value = serde_json::from_str(text)?;
    set_config_json(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    // The shared registry is process state; tests touching it run one at a time.
    static SERIAL: Mutex<()> = parking_lot::const_mutex(());

    #[test]
    fn facade_reads_and_writes_shared_registry() {
        let _guard = SERIAL.lock();
        reset_config();

        assert!(get_config_bool(Key::NormalizeGasConstants).unwrap());
        set_config_bool(Key::NormalizeGasConstants, false).unwrap();
        assert!(!get_config_bool(Key::NormalizeGasConstants).unwrap());
        assert_eq!(
            get_config_as_json().unwrap()["NORMALIZE_GAS_CONSTANTS"],
            json!(false)
        );

        set_config_string(Key::AlternativeRefpropHmxBncPath, "/opt/HMX.BNC").unwrap();
        assert_eq!(
            get_config_string(Key::AlternativeRefpropHmxBncPath).unwrap(),
            "/opt/HMX.BNC"
        );

        let err = get_config_double(Key::NormalizeGasConstants).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        let err = get_config_int(Key::SaveRawTables).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert!(set_config_int(Key::SaveRawTables, 1).is_err());

        reset_config();
        assert!(get_config_bool(Key::NormalizeGasConstants).unwrap());
    }

    #[test]
    fn json_string_round_trip_through_shared_registry() {
        let _guard = SERIAL.lock();
        reset_config();

        set_config_double(Key::MaximumTableDirectorySizeInGb, 8.25).unwrap();
        let text = get_config_as_json_string().unwrap();

        reset_config();
        assert_eq!(get_config_double(Key::MaximumTableDirectorySizeInGb).unwrap(), 1.0);
        set_config_as_json_string(&text).unwrap();
        assert_eq!(get_config_double(Key::MaximumTableDirectorySizeInGb).unwrap(), 8.25);

        let err = set_config_as_json_string("not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        let err = set_config_json(&json!({"NOPE": 1})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(get_config_double(Key::MaximumTableDirectorySizeInGb).unwrap(), 8.25);

        reset_config();
    }

    #[test]
    fn with_config_sees_consistent_state() {
        let _guard = SERIAL.lock();
        reset_config();
        let snapshot = with_config(|config| config.clone());
        assert_eq!(snapshot, Configuration::new());
    }

    #[test]
    fn concurrent_export_never_sees_partial_import() {
        let _guard = SERIAL.lock();
        reset_config();

        let first = json!({
            "SAVE_RAW_TABLES": true,
            "MAXIMUM_TABLE_DIRECTORY_SIZE_IN_GB": 4.5,
            "ALTERNATIVE_TABLES_DIRECTORY": "/first",
        });
        let second = json!({
            "SAVE_RAW_TABLES": false,
            "MAXIMUM_TABLE_DIRECTORY_SIZE_IN_GB": 9.0,
            "ALTERNATIVE_TABLES_DIRECTORY": "/second",
        });
        set_config_json(&first).unwrap();

        let texts = [first.to_string(), second.to_string()];
        let names = [
            "SAVE_RAW_TABLES",
            "MAXIMUM_TABLE_DIRECTORY_SIZE_IN_GB",
            "ALTERNATIVE_TABLES_DIRECTORY",
        ];

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for round in 0..500 {
                    set_config_as_json_string(&texts[round % 2]).unwrap();
                }
            });
            scope.spawn(|| {
                for _ in 0..500 {
                    let doc = get_config_as_json().unwrap();
                    let seen: Vec<&serde_json::Value> = names.iter().map(|n| &doc[*n]).collect();
                    let is_state = |state: &serde_json::Value| {
                        names.iter().zip(&seen).all(|(n, v)| &state[*n] == *v)
                    };
                    assert!(is_state(&first) || is_state(&second), "mixed snapshot: {seen:?}");
                }
            });
        });

        reset_config();
    }

    #[test]
    fn key_descriptions() {
        assert_eq!(config_key_to_string(Key::SaveRawTables), "SAVE_RAW_TABLES");
        assert_eq!(
            config_key_description(Key::SaveRawTables),
            config_key_description_by_name("SAVE_RAW_TABLES").unwrap()
        );
        let err = config_key_description_by_name("SAVE_RAW").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
