use serde::Serialize;

/// The result of turning a feature's answers into configuration.
///
/// The definition itself is opaque to the engine; it is handed to whatever
/// writes the project's configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureDefinition {
    /// Feature-specific definition object.
    pub definition: serde_json::Value,

    /// Whether the definition should be persisted into the final configuration.
    pub save: bool,
}

impl FeatureDefinition {
    /// A definition that should be persisted.
    pub fn saved(definition: serde_json::Value) -> Self {
        Self {
            definition,
            save: true,
        }
    }

    /// A definition that is only used during generation.
    pub fn transient(definition: serde_json::Value) -> Self {
        Self {
            definition,
            save: false,
        }
    }
}
