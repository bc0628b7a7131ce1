use surveyor::{AnswerSet, Feature, FeatureDefinition};

/// Request tracking headers. Nothing to ask; the definition is only used
/// while generating and is not written to the service configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tracker;

impl Feature for Tracker {
    fn name(&self) -> &str {
        "tracker"
    }

    fn answers(&self, _: &AnswerSet) -> anyhow::Result<Option<FeatureDefinition>> {
        Ok(Some(FeatureDefinition::transient(
            serde_json::json!({ "enabled": true }),
        )))
    }
}
