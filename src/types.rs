/// A config operation, independent of any CLI framework.
///
/// Keys are canonical names (e.g. `"SAVE_RAW_TABLES"`), values are raw strings
/// parsed according to the key's type.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    /// Every key with its current value.
    List,
    /// Every key with its type, default and description.
    Describe,
    /// Pretty JSON document of the catalog defaults.
    Gen,
    Get { key: String },
    Set { key: String, value: String },
}
