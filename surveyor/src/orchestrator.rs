//! The service initialization survey.
//!
//! Asks the base questions every service has (name, type, version, product,
//! lifecycle events and features), then the survey of the chosen service kind,
//! then the survey of every selected feature. Each survey's answers are handed
//! to its registry entry, and the resulting definitions are collected into an
//! [`InitSurveyAnswers`].

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::registry::{DEFAULT_FEATURE_PREFIX, resolve};
use crate::{
    AnswerError, AnswerSet, FeatureDefinition, PromptAdapter, Question, Registry, RegistryError,
    Survey, SurveyError, Validator, executor,
};

/// Service types that are always available.
pub const BUILTIN_SERVICE_TYPES: [&str; 4] = ["grpc", "http", "native", "script"];

/// Lifecycle events a service may handle.
pub const LIFECYCLE_EVENTS: [&str; 2] = ["start", "finish"];

/// Version suggested for new services.
pub const DEFAULT_VERSION: &str = "v0.1.0";

const MAX_TEXT_LENGTH: usize = 512;
const MIN_PRODUCT_LENGTH: usize = 3;

/// Error type for the initialization survey.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Survey(#[from] SurveyError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("unexpected answer shape: {0}")]
    Answer(#[from] AnswerError),
}

impl InitError {
    /// Check if the operator cancelled the survey.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Survey(err) if err.is_cancelled())
    }
}

/// What the initialization survey may offer.
#[derive(Clone, Copy)]
pub struct InitOptions<'a> {
    kind: Option<&'a str>,
    features: Option<&'a dyn Registry>,
    services: Option<&'a dyn Registry>,
    feature_names: &'a [String],
    feature_prefix: &'a str,
}

impl Default for InitOptions<'_> {
    fn default() -> Self {
        Self {
            kind: None,
            features: None,
            services: None,
            feature_names: &[],
            feature_prefix: DEFAULT_FEATURE_PREFIX,
        }
    }
}

impl<'a> InitOptions<'a> {
    /// Options without registries: only the base questions are asked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `kind` as the service type instead of asking for it.
    pub fn with_kind(mut self, kind: &'a str) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Offer the CLI-capable features of `registry`.
    pub fn with_features(mut self, registry: &'a dyn Registry) -> Self {
        self.features = Some(registry);
        self
    }

    /// Offer the service kinds of `registry` next to the built-in types.
    pub fn with_services(mut self, registry: &'a dyn Registry) -> Self {
        self.services = Some(registry);
        self
    }

    /// Extra feature names listed before the registry's own.
    pub fn with_feature_names(mut self, names: &'a [String]) -> Self {
        self.feature_names = names;
        self
    }

    /// Prefix tried when a selected feature is not registered under its own name.
    pub fn with_feature_prefix(mut self, prefix: &'a str) -> Self {
        self.feature_prefix = prefix;
        self
    }

    /// Service type fixed up front, if any.
    pub fn kind(&self) -> Option<&'a str> {
        self.kind
    }

    /// Prefix tried when a selected feature is not registered under its own name.
    pub fn feature_prefix(&self) -> &'a str {
        self.feature_prefix
    }

    /// Built-in types and registered service kinds, sorted and de-duplicated.
    pub fn service_types(&self) -> Vec<String> {
        let mut types: Vec<String> = BUILTIN_SERVICE_TYPES.iter().map(|t| t.to_string()).collect();
        if let Some(services) = self.services {
            types.extend(services.names());
        }
        types.sort();
        types.dedup();
        types
    }

    /// Names offered by the `features` question.
    pub fn offered_features(&self) -> Vec<String> {
        let mut names = self.feature_names.to_vec();
        if let Some(features) = self.features {
            names.extend(features.feature_names());
        }
        names
    }
}

/// Everything collected by [`run_init_survey`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitSurveyAnswers {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub product: String,
    pub lifecycle: Vec<String>,
    pub features: Vec<String>,

    /// Definition returned by the chosen service kind, if it has a survey.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<FeatureDefinition>,

    /// Definitions returned by the selected features, keyed by the selected name.
    pub definitions: BTreeMap<String, FeatureDefinition>,
}

impl InitSurveyAnswers {
    /// Read the base survey's answers.
    pub fn from_answers(answers: &AnswerSet) -> Result<Self, AnswerError> {
        let list = |name: &str| -> Result<Vec<String>, AnswerError> {
            match answers.get(name) {
                None => Ok(Vec::new()),
                Some(_) => answers.get_list(name).map(<[String]>::to_vec),
            }
        };

        Ok(Self {
            name: answers.get_string("name")?.to_string(),
            kind: answers.get_string("type")?.to_string(),
            version: answers.get_string("version")?.to_string(),
            product: answers.get_string("product")?.to_string(),
            lifecycle: list("lifecycle")?,
            features: list("features")?,
            service: None,
            definitions: BTreeMap::new(),
        })
    }

    /// Record the definition produced by the service kind's survey.
    pub fn set_service_definition(&mut self, definition: FeatureDefinition) {
        self.service = Some(definition);
    }

    /// Record a feature's definition under the name the operator selected.
    pub fn add_feature_definition(&mut self, name: impl Into<String>, definition: FeatureDefinition) {
        self.definitions.insert(name.into(), definition);
    }

    /// Feature definitions that should be written to the service configuration.
    pub fn persisted(&self) -> impl Iterator<Item = (&str, &FeatureDefinition)> {
        self.definitions
            .iter()
            .filter(|(_, definition)| definition.save)
            .map(|(name, definition)| (name.as_str(), definition))
    }
}

/// The questions every service is asked, in batch mode.
pub fn base_survey(options: &InitOptions<'_>) -> Survey {
    let mut kind = Question::select("type", "Select the type of service:", options.service_types())
        .required();
    if let Some(assumed) = options.kind() {
        kind = kind.with_assumption(assumed);
    }

    let mut survey = Survey::new(vec![
        Question::input(
            "name",
            "Name. Can be a fully qualified service name (URL + name):",
        )
        .with_validator(Validator::compose([
            Validator::required(),
            Validator::max_length(MAX_TEXT_LENGTH),
        ])),
        kind,
        Question::input(
            "version",
            "Version. A semver version string for the service, with 'v' as prefix (ex: v1.0.0):",
        )
        .with_suggestion(DEFAULT_VERSION)
        .with_validator(Validator::semver()),
        Question::input(
            "product",
            "Product name. Enter the product name that the service belongs to:",
        )
        .with_validator(Validator::compose([
            Validator::required(),
            Validator::min_length(MIN_PRODUCT_LENGTH),
            Validator::max_length(MAX_TEXT_LENGTH),
        ])),
        Question::multi_select(
            "lifecycle",
            "Select lifecycle events to handle in the service:",
            LIFECYCLE_EVENTS,
        ),
    ]);

    // An empty MultiSelect is malformed, so no features means no question.
    let features = options.offered_features();
    if options.features.is_some() && !features.is_empty() {
        survey.push(Question::multi_select(
            "features",
            "Select the features the service will have:",
            features,
        ));
    }

    survey
}

/// Run the whole initialization survey.
///
/// Any failure aborts the run; a selected feature that cannot be resolved is a
/// [`RegistryError::UnknownFeature`].
pub fn run_init_survey<A>(
    adapter: &mut A,
    options: &InitOptions<'_>,
) -> Result<InitSurveyAnswers, InitError>
where
    A: PromptAdapter + ?Sized,
{
    let base = executor::run(adapter, &base_survey(options), "")?;
    let mut answers = InitSurveyAnswers::from_answers(&base)?;
    info!(service = %answers.name, kind = %answers.kind, "base survey answered");

    if let Some(definition) = run_service_survey(adapter, options, &answers.kind)? {
        answers.set_service_definition(definition);
    }

    for name in answers.features.clone() {
        if let Some(definition) = run_feature_survey(adapter, options, &name)? {
            answers.add_feature_definition(name, definition);
        }
    }

    Ok(answers)
}

/// Run the survey of the service kind `kind`, if it is registered, CLI-capable
/// and has one.
pub fn run_service_survey<A>(
    adapter: &mut A,
    options: &InitOptions<'_>,
    kind: &str,
) -> Result<Option<FeatureDefinition>, InitError>
where
    A: PromptAdapter + ?Sized,
{
    let Some(services) = options.services else {
        return Ok(None);
    };
    if !services.contains(kind) || !services.is_cli_supported(kind) {
        return Ok(None);
    }
    let Some(survey) = services.survey(kind) else {
        debug!(service = kind, "service kind has no survey");
        return Ok(None);
    };

    let answers = executor::run(adapter, survey, kind)?;
    Ok(services.answers(kind, &answers)?)
}

/// Resolve the selected feature `name`, run its survey if it has one and
/// return its definition.
pub fn run_feature_survey<A>(
    adapter: &mut A,
    options: &InitOptions<'_>,
    name: &str,
) -> Result<Option<FeatureDefinition>, InitError>
where
    A: PromptAdapter + ?Sized,
{
    let Some(features) = options.features else {
        return Err(RegistryError::UnknownFeature(name.to_string()).into());
    };
    let resolved = resolve(features, name, options.feature_prefix())?;

    let answers = match features.survey(&resolved) {
        Some(survey) => executor::run(adapter, survey, name)?,
        None => AnswerSet::new(),
    };

    let definition = features.answers(&resolved, &answers)?;
    debug!(
        feature = name,
        resolved = %resolved,
        defined = definition.is_some(),
        "feature survey done"
    );
    Ok(definition)
}
