//! Feature and service registries.
//!
//! A registry maps names to [`Feature`] implementations. What a feature can do
//! (whether it has a survey, whether it supports the command line, how it is
//! listed) is read once, when it is registered.
//!
//! Lookups by the orchestrator go through [`resolve`]: the exact name first,
//! then the name with a namespacing prefix. This lets a selected `auth` resolve
//! to a registered `mikros_auth`, and lets a service-specific `auth` override
//! the built-in one.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use crate::{AnswerSet, Feature, FeatureDefinition, Registry, RegistryError, Survey};

/// Prefix of the framework's built-in feature names.
pub const DEFAULT_FEATURE_PREFIX: &str = "mikros_";

/// Whether a registered feature exposes a survey.
#[derive(Debug, Clone)]
pub enum SurveyCapability {
    /// Configured without questions.
    NoSurvey,

    /// Configured through this survey.
    HasSurvey(Survey),
}

impl SurveyCapability {
    /// The survey, if any.
    pub fn survey(&self) -> Option<&Survey> {
        match self {
            Self::NoSurvey => None,
            Self::HasSurvey(survey) => Some(survey),
        }
    }
}

struct RegistryEntry {
    feature: Box<dyn Feature>,
    ui_name: String,
    cli_supported: bool,
    survey: SurveyCapability,
}

/// A registry of features (or service kinds), keyed by name.
#[derive(Default)]
pub struct FeatureRegistry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl FeatureRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a feature, replacing any feature with the same name.
    pub fn register(&mut self, feature: impl Feature + 'static) -> &mut Self {
        let name = feature.name().to_string();
        let entry = RegistryEntry {
            ui_name: feature.ui_name().unwrap_or(&name).to_string(),
            cli_supported: feature.is_cli_supported(),
            survey: match feature.survey() {
                Some(survey) => SurveyCapability::HasSurvey(survey),
                None => SurveyCapability::NoSurvey,
            },
            feature: Box::new(feature),
        };

        debug!(
            feature = %name,
            cli = entry.cli_supported,
            survey = entry.survey.survey().is_some(),
            "registering feature"
        );
        if self.entries.insert(name.clone(), entry).is_some() {
            warn!(feature = %name, "feature registered twice, keeping the last one");
        }
        self
    }

    /// Builder-style register.
    pub fn with(mut self, feature: impl Feature + 'static) -> Self {
        self.register(feature);
        self
    }

    /// The capability recorded for `name`.
    pub fn capability(&self, name: &str) -> Option<&SurveyCapability> {
        self.entries.get(name).map(|entry| &entry.survey)
    }

    /// Number of registered features.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for FeatureRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureRegistry")
            .field("features", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Registry for FeatureRegistry {
    fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn feature_names(&self) -> Vec<String> {
        self.entries
            .values()
            .filter(|entry| entry.cli_supported)
            .map(|entry| entry.ui_name.clone())
            .collect()
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn is_cli_supported(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|entry| entry.cli_supported)
    }

    fn survey(&self, name: &str) -> Option<&Survey> {
        self.entries.get(name).and_then(|entry| entry.survey.survey())
    }

    fn answers(
        &self,
        name: &str,
        answers: &AnswerSet,
    ) -> Result<Option<FeatureDefinition>, RegistryError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| RegistryError::UnknownFeature(name.to_string()))?;

        entry
            .feature
            .answers(answers)
            .map_err(|source| RegistryError::Answers {
                name: name.to_string(),
                source,
            })
    }
}

/// Resolve `name` to a registered name: exact match first, then `prefix + name`.
pub fn resolve<R>(registry: &R, name: &str, prefix: &str) -> Result<String, RegistryError>
where
    R: Registry + ?Sized,
{
    if registry.contains(name) {
        return Ok(name.to_string());
    }

    let prefixed = format!("{prefix}{name}");
    if registry.contains(&prefixed) {
        debug!(feature = name, resolved = %prefixed, "resolved through prefix");
        return Ok(prefixed);
    }

    Err(RegistryError::UnknownFeature(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Question;

    struct Auth;

    impl Feature for Auth {
        fn name(&self) -> &str {
            "mikros_auth"
        }

        fn ui_name(&self) -> Option<&str> {
            Some("auth")
        }

        fn survey(&self) -> Option<Survey> {
            Some(Survey::new(vec![Question::confirm("scopes", "Enable scopes?")]))
        }

        fn answers(&self, answers: &AnswerSet) -> anyhow::Result<Option<FeatureDefinition>> {
            let scopes = answers.get_bool("scopes")?;
            Ok(Some(FeatureDefinition::saved(
                serde_json::json!({ "scopes": scopes }),
            )))
        }
    }

    struct Internal;

    impl Feature for Internal {
        fn name(&self) -> &str {
            "internal"
        }

        fn is_cli_supported(&self) -> bool {
            false
        }

        fn answers(&self, _: &AnswerSet) -> anyhow::Result<Option<FeatureDefinition>> {
            Ok(None)
        }
    }

    fn registry() -> FeatureRegistry {
        FeatureRegistry::new().with(Auth).with(Internal)
    }

    #[test]
    fn capabilities_are_recorded() {
        let registry = registry();
        assert!(matches!(
            registry.capability("mikros_auth"),
            Some(SurveyCapability::HasSurvey(_))
        ));
        assert!(matches!(
            registry.capability("internal"),
            Some(SurveyCapability::NoSurvey)
        ));
        assert!(registry.survey("internal").is_none());
    }

    #[test]
    fn feature_names_use_ui_names_and_skip_non_cli() {
        let registry = registry();
        assert_eq!(registry.feature_names(), ["auth"]);
        assert_eq!(registry.names(), ["internal", "mikros_auth"]);
        assert!(!registry.is_cli_supported("internal"));
    }

    #[test]
    fn resolve_exact_then_prefixed() {
        let registry = registry();
        assert_eq!(
            resolve(&registry, "internal", DEFAULT_FEATURE_PREFIX).unwrap(),
            "internal"
        );
        assert_eq!(
            resolve(&registry, "auth", DEFAULT_FEATURE_PREFIX).unwrap(),
            "mikros_auth"
        );
        assert!(matches!(
            resolve(&registry, "billing", DEFAULT_FEATURE_PREFIX),
            Err(RegistryError::UnknownFeature(name)) if name == "billing"
        ));
    }

    #[test]
    fn answers_errors_are_wrapped() {
        let registry = registry();
        let err = registry
            .answers("mikros_auth", &AnswerSet::new())
            .unwrap_err();
        assert!(matches!(err, RegistryError::Answers { ref name, .. } if name == "mikros_auth"));
    }

    #[test]
    fn re_registering_replaces() {
        let mut registry = registry();
        registry.register(Auth);
        assert_eq!(registry.len(), 2);
    }
}
