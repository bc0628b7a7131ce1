use crate::{AnswerSet, AnswerValue, FeatureDefinition, Prompt, RegistryError, Survey, SurveyError};

/// Trait for implementations that render prompts and collect raw answers.
///
/// Adapters decide how to present questions (terminal wizard, scripted test
/// answers, etc.) and handle validation internally in retry loops: a validator
/// failure is shown to the operator and the same question is asked again.
/// Only hard failures are returned as errors.
///
/// Select answers may be returned as `AnswerValue::Selected` and MultiSelect
/// answers as `AnswerValue::SelectedList`; the executor sanitizes them.
pub trait PromptAdapter {
    /// Present several prompts as one interaction, returning one answer per prompt name.
    fn ask_batch(&mut self, prompts: &[Prompt]) -> Result<AnswerSet, SurveyError>;

    /// Present a single prompt and return its answer.
    fn ask_one(&mut self, prompt: &Prompt) -> Result<AnswerValue, SurveyError>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> Result<bool, SurveyError>;
}

impl<A: PromptAdapter + ?Sized> PromptAdapter for &mut A {
    fn ask_batch(&mut self, prompts: &[Prompt]) -> Result<AnswerSet, SurveyError> {
        (**self).ask_batch(prompts)
    }

    fn ask_one(&mut self, prompt: &Prompt) -> Result<AnswerValue, SurveyError> {
        (**self).ask_one(prompt)
    }

    fn confirm(&mut self, message: &str) -> Result<bool, SurveyError> {
        (**self).confirm(message)
    }
}

/// A pluggable feature (or service kind) that can be configured through a survey.
///
/// Only `name` and `answers` are mandatory. Features that expose no survey are
/// still asked for a definition, with an empty answer set.
pub trait Feature {
    /// Registry name of the feature.
    fn name(&self) -> &str;

    /// Name shown in the feature list; defaults to `name`.
    fn ui_name(&self) -> Option<&str> {
        None
    }

    /// Whether the feature can be configured from the command line.
    fn is_cli_supported(&self) -> bool {
        true
    }

    /// The feature's survey, if it has one.
    fn survey(&self) -> Option<Survey> {
        None
    }

    /// Turn normalized answers into a definition, or `None` to contribute nothing.
    fn answers(&self, answers: &AnswerSet) -> anyhow::Result<Option<FeatureDefinition>>;
}

/// The registry contract consumed by the survey orchestrator.
pub trait Registry {
    /// Every registered name.
    fn names(&self) -> Vec<String>;

    /// Display names of the features that support command-line surveys.
    fn feature_names(&self) -> Vec<String>;

    /// Exact-name lookup.
    fn contains(&self, name: &str) -> bool;

    /// Whether the named entry supports command-line surveys.
    fn is_cli_supported(&self, name: &str) -> bool;

    /// The named entry's survey, if it declares one.
    fn survey(&self, name: &str) -> Option<&Survey>;

    /// Convert normalized answers into the named entry's definition.
    fn answers(
        &self,
        name: &str,
        answers: &AnswerSet,
    ) -> Result<Option<FeatureDefinition>, RegistryError>;
}
