//! The key catalog: every recognized setting, its canonical name, default and
//! description.
//!
//! The catalog is the single source of truth for typing. The variant of an
//! entry's default decides the only [`ValueType`] the key ever accepts.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::value::{Value, ValueType};

/// A configuration key. Ordering follows catalog declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    NormalizeGasConstants,
    CriticalWithin1Uk,
    CriticalSplinesEnabled,
    SaveRawTables,
    AlternativeTablesDirectory,
    AlternativeRefpropPath,
    AlternativeRefpropHmxBncPath,
    RefpropDontEstimateInteractionParameters,
    MaximumTableDirectorySizeInGb,
    DontCheckPropertyLimits,
    HenrysLawToGenerateVleGuesses,
    PhaseEnvelopeStartingPressurePa,
}

/// A catalog default. Kept separate from [`Value`] so the table can be `static`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    Str(&'static str),
}

impl DefaultValue {
    pub fn to_value(self) -> Value {
        match self {
            DefaultValue::Bool(b) => Value::Bool(b),
            DefaultValue::Int(i) => Value::Int(i),
            DefaultValue::Double(d) => Value::Double(d),
            DefaultValue::Str(s) => Value::String(s.to_string()),
        }
    }

    pub fn value_type(self) -> ValueType {
        match self {
            DefaultValue::Bool(_) => ValueType::Bool,
            DefaultValue::Int(_) => ValueType::Int,
            DefaultValue::Double(_) => ValueType::Double,
            DefaultValue::Str(_) => ValueType::String,
        }
    }
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub key: Key,
    pub name: &'static str,
    pub default: DefaultValue,
    pub description: &'static str,
}

static CATALOG: [Entry; 12] = [
    Entry {
        key: Key::NormalizeGasConstants,
        name: "NORMALIZE_GAS_CONSTANTS",
        default: DefaultValue::Bool(true),
        description: "If true, for mixtures, the molar gas constant (R) will be set to the CODATA value",
    },
    Entry {
        key: Key::CriticalWithin1Uk,
        name: "CRITICAL_WITHIN_1UK",
        default: DefaultValue::Bool(true),
        description: "If true, any temperature within 1 uK of the critical temperature will be considered to be AT the critical point",
    },
    Entry {
        key: Key::CriticalSplinesEnabled,
        name: "CRITICAL_SPLINES_ENABLED",
        default: DefaultValue::Bool(true),
        description: "If true, the critical splines will be used in the near-vicinity of the critical point",
    },
    Entry {
        key: Key::SaveRawTables,
        name: "SAVE_RAW_TABLES",
        default: DefaultValue::Bool(false),
        description: "If true, the raw, uncompressed tables will also be written to file",
    },
    Entry {
        key: Key::AlternativeTablesDirectory,
        name: "ALTERNATIVE_TABLES_DIRECTORY",
        default: DefaultValue::Str(""),
        description: "If provided, this path will be the root directory for the tabular data.  Otherwise, ${HOME}/.CoolProp/Tables is used",
    },
    Entry {
        key: Key::AlternativeRefpropPath,
        name: "ALTERNATIVE_REFPROP_PATH",
        default: DefaultValue::Str(""),
        description: "An alternative path to be provided to the directory that contains REFPROP's fluids and mixtures directories.  If provided, the SETPATH function will be called with this directory prior to calling any REFPROP functions.",
    },
    Entry {
        key: Key::AlternativeRefpropHmxBncPath,
        name: "ALTERNATIVE_REFPROP_HMX_BNC_PATH",
        default: DefaultValue::Str(""),
        description: "An alternative path to the HMX.BNC file.  If provided, it will be passed into REFPROP's SETUP or SETMIX routines",
    },
    Entry {
        key: Key::RefpropDontEstimateInteractionParameters,
        name: "REFPROP_DONT_ESTIMATE_INTERACTION_PARAMETERS",
        default: DefaultValue::Bool(false),
        description: "If true, if the binary interaction parameters in REFPROP are estimated, throw an error rather than silently continuing",
    },
    Entry {
        key: Key::MaximumTableDirectorySizeInGb,
        name: "MAXIMUM_TABLE_DIRECTORY_SIZE_IN_GB",
        default: DefaultValue::Double(1.0),
        description: "The maximum allowed size of the directory that is used to store tabular data",
    },
    Entry {
        key: Key::DontCheckPropertyLimits,
        name: "DONT_CHECK_PROPERTY_LIMITS",
        default: DefaultValue::Bool(false),
        description: "If true, when possible, CoolProp will skip checking whether values are inside the property limits",
    },
    Entry {
        key: Key::HenrysLawToGenerateVleGuesses,
        name: "HENRYS_LAW_TO_GENERATE_VLE_GUESSES",
        default: DefaultValue::Bool(false),
        description: "If true, when doing water-based mixture dewpoint calculations, use Henry's Law to generate guesses for liquid-phase composition",
    },
    Entry {
        key: Key::PhaseEnvelopeStartingPressurePa,
        name: "PHASE_ENVELOPE_STARTING_PRESSURE_PA",
        default: DefaultValue::Double(100.0),
        description: "Starting pressure [Pa] for phase envelope construction",
    },
];

/// Iterate the catalog in declaration order.
pub fn entries() -> impl Iterator<Item = &'static Entry> {
    CATALOG.iter()
}

impl Key {
    /// Every key, in declaration order.
    pub const ALL: [Key; 12] = [
        Key::NormalizeGasConstants,
        Key::CriticalWithin1Uk,
        Key::CriticalSplinesEnabled,
        Key::SaveRawTables,
        Key::AlternativeTablesDirectory,
        Key::AlternativeRefpropPath,
        Key::AlternativeRefpropHmxBncPath,
        Key::RefpropDontEstimateInteractionParameters,
        Key::MaximumTableDirectorySizeInGb,
        Key::DontCheckPropertyLimits,
        Key::HenrysLawToGenerateVleGuesses,
        Key::PhaseEnvelopeStartingPressurePa,
    ];

    /// The catalog row for this key.
    ///
    /// Variants are declared in the same order as the table, so the
    /// discriminant is the row index.
    pub fn entry(self) -> &'static Entry {
        &CATALOG[self as usize]
    }

    /// Canonical name, used as the JSON member name.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn description(self) -> &'static str {
        self.entry().description
    }

    pub fn default_value(self) -> Value {
        self.entry().default.to_value()
    }

    pub fn value_type(self) -> ValueType {
        self.entry().default.value_type()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Key {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        entries()
            .find(|entry| entry.name == name)
            .map(|entry| entry.key)
            .ok_or_else(|| ConfigError::KeyNotFound(name.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_rows_match_variant_order() {
        for (index, entry) in entries().enumerate() {
            assert_eq!(entry.key as usize, index, "row {index} is {}", entry.name);
            assert_eq!(Key::ALL[index], entry.key);
        }
        assert_eq!(entries().count(), Key::ALL.len());
    }

    #[test]
    fn name_and_key_are_inverse() {
        for key in Key::ALL {
            assert_eq!(key.name().parse::<Key>().unwrap(), key);
        }
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = entries().map(|e| e.name).collect();
        assert_eq!(names.len(), Key::ALL.len());
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = "NORMALIZE_GAS_CONSTANT".parse::<Key>().unwrap_err();
        assert!(matches!(err, ConfigError::KeyNotFound(name) if name == "NORMALIZE_GAS_CONSTANT"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!("normalize_gas_constants".parse::<Key>().is_err());
    }

    #[test]
    fn defaults_carry_their_type() {
        assert_eq!(Key::NormalizeGasConstants.default_value(), Value::Bool(true));
        assert_eq!(Key::MaximumTableDirectorySizeInGb.value_type(), ValueType::Double);
        assert_eq!(
            Key::PhaseEnvelopeStartingPressurePa.default_value(),
            Value::Double(100.0)
        );
        assert_eq!(
            Key::AlternativeRefpropPath.default_value(),
            Value::String(String::new())
        );
    }

    #[test]
    fn descriptions_are_present() {
        for key in Key::ALL {
            assert!(!key.description().is_empty(), "{key} has no description");
        }
        let description = Key::PhaseEnvelopeStartingPressurePa.description();
        assert!(description.contains("phase envelope"));
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(Key::CriticalWithin1Uk.to_string(), "CRITICAL_WITHIN_1UK");
    }

    #[test]
    fn entries_is_restartable() {
        let first: Vec<Key> = entries().map(|e| e.key).collect();
        let second: Vec<Key> = entries().map(|e| e.key).collect();
        assert_eq!(first, second);
    }
}
