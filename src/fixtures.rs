#[cfg(test)]
pub mod test {
    use crate::catalog::Key;
    use crate::registry::Configuration;

    /// A document touching one key of each catalog type.
    pub const CUSTOM_DOCUMENT: &str = r#"{
        "CRITICAL_SPLINES_ENABLED": false,
        "ALTERNATIVE_TABLES_DIRECTORY": "/data/tables",
        "PHASE_ENVELOPE_STARTING_PRESSURE_PA": 50.5
    }"#;

    /// The registry `CUSTOM_DOCUMENT` describes when applied to the defaults.
    pub fn custom_config() -> Configuration {
        let mut config = Configuration::new();
        config.set_bool(Key::CriticalSplinesEnabled, false).unwrap();
        config
            .set_string(Key::AlternativeTablesDirectory, "/data/tables")
            .unwrap();
        config
            .set_double(Key::PhaseEnvelopeStartingPressurePa, 50.5)
            .unwrap();
        config
    }

    #[test]
    fn custom_config_differs_from_defaults() {
        let config = custom_config();
        assert!(!config.get_bool(Key::CriticalSplinesEnabled).unwrap());
        assert_eq!(
            config.get_double(Key::PhaseEnvelopeStartingPressurePa).unwrap(),
            50.5
        );
        assert_ne!(config, Configuration::new());
    }
}
