use surveyor::{AnswerSet, Feature, FeatureDefinition};

/// Health check endpoints. Always enabled by the framework, so it cannot be
/// picked from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Health;

impl Feature for Health {
    fn name(&self) -> &str {
        "mikros_health"
    }

    fn ui_name(&self) -> Option<&str> {
        Some("health")
    }

    fn is_cli_supported(&self) -> bool {
        false
    }

    fn answers(&self, _: &AnswerSet) -> anyhow::Result<Option<FeatureDefinition>> {
        Ok(None)
    }
}
