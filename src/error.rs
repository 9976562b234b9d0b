use thiserror::Error;

use crate::value::ValueType;

/// Broad classification of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A key is absent from the registry or a name has no catalog entry.
    NotFound,
    /// A read or write used a type other than the item's fixed type.
    TypeMismatch,
    /// A JSON value or member name was rejected during import.
    Value,
    /// The JSON text was not well-formed.
    Parse,
    /// A stored value could not be exported.
    Internal,
}

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum ConfigError {
    #[error("Key not found: {0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(thermoconf::key_not_found)))]
    KeyNotFound(String),

    #[error("Type mismatch for '{key}': item holds {expected}, got {found}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(thermoconf::type_mismatch)))]
    TypeMismatch {
        key: String,
        expected: ValueType,
        found: ValueType,
    },

    #[error("Invalid value for '{key}': {reason}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(thermoconf::invalid_value)))]
    InvalidValue { key: String, reason: String },

    #[error("Unknown key '{key}' in configuration document")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(thermoconf::unknown_key),
            help("member names must match a catalog key exactly, e.g. NORMALIZE_GAS_CONSTANTS")
        )
    )]
    UnknownKey { key: String },

    #[error("Failed to parse configuration JSON: {0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(thermoconf::parse_error)))]
    ParseError(#[from] serde_json::Error),

    #[error("Cannot export '{key}': {reason}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(thermoconf::internal)))]
    Internal { key: String, reason: String },
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::KeyNotFound(_) => ErrorKind::NotFound,
            ConfigError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ConfigError::InvalidValue { .. } | ConfigError::UnknownKey { .. } => ErrorKind::Value,
            ConfigError::ParseError(_) => ErrorKind::Parse,
            ConfigError::Internal { .. } => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_formats_correctly() {
        let err = ConfigError::TypeMismatch {
            key: "NORMALIZE_GAS_CONSTANTS".into(),
            expected: ValueType::Bool,
            found: ValueType::Double,
        };
        let msg = err.to_string();
        assert!(msg.contains("NORMALIZE_GAS_CONSTANTS"));
        assert!(msg.contains("bool"));
        assert!(msg.contains("double"));
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn key_not_found_formats() {
        let err = ConfigError::KeyNotFound("NOT_A_KEY".into());
        assert!(err.to_string().contains("NOT_A_KEY"));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn unknown_key_is_a_value_error() {
        let err = ConfigError::UnknownKey {
            key: "SAVE_RAW_TABLE".into(),
        };
        assert!(err.to_string().contains("SAVE_RAW_TABLE"));
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn parse_error_wraps_serde_json() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::from(source);
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}
