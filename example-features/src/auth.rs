use serde::Serialize;
use surveyor::{AnswerSet, Feature, FeatureDefinition, Question, Survey};

/// Request authentication, optionally with per-RPC scopes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Auth;

/// What the auth feature writes to the service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthDefinition {
    pub scopes: bool,
}

impl Feature for Auth {
    fn name(&self) -> &str {
        "mikros_auth"
    }

    fn ui_name(&self) -> Option<&str> {
        Some("auth")
    }

    fn survey(&self) -> Option<Survey> {
        Some(Survey::new(vec![
            Question::confirm("scopes", "Enable scopes?").required(),
        ]))
    }

    fn answers(&self, answers: &AnswerSet) -> anyhow::Result<Option<FeatureDefinition>> {
        let definition = AuthDefinition {
            scopes: answers.get_bool("scopes")?,
        };
        Ok(Some(FeatureDefinition::saved(serde_json::to_value(
            definition,
        )?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_answer_is_an_error() {
        assert!(Auth.answers(&AnswerSet::new()).is_err());
    }

    #[test]
    fn scopes_definition() {
        let answers = AnswerSet::new().with("scopes", false);
        let definition = Auth.answers(&answers).unwrap().unwrap();
        assert_eq!(definition.definition, serde_json::json!({ "scopes": false }));
        assert!(definition.save);
    }
}
