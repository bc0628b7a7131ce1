//! Scripted adapter for running surveys without user interaction.
//!
//! `ScriptedAdapter` answers prompts from pre-defined per-question queues and
//! answers confirm gates from a queue of booleans. This is useful for testing
//! features and surveys.
//!
//! # Example
//!
//! ```rust
//! use surveyor::{ConfirmLoop, Question, ScriptedAdapter, Survey, executor};
//!
//! let survey = Survey::new(vec![Question::input("name", "RPC name:")])
//!     .with_confirm_loop(ConfirmLoop::after("Add another RPC?"));
//!
//! let mut adapter = ScriptedAdapter::new()
//!     .with_answer("name", "GetOrder")
//!     .with_answer("name", "ListOrders")
//!     .with_confirms([true, false]);
//!
//! let answers = executor::run(&mut adapter, &survey, "rpcs").unwrap();
//! assert_eq!(answers.get_nested_list("rpcs").unwrap().len(), 2);
//! ```

use std::collections::{HashMap, VecDeque};

use crate::{
    AnswerSet, AnswerValue, Prompt, PromptAdapter, PromptKind, SelectedOption, SurveyError,
};

/// An adapter that returns pre-configured answers.
///
/// Answers for the same question name are consumed in the order they were
/// added, so questions inside confirm loops can be answered once per
/// iteration. A prompt without a scripted answer falls back to its default.
///
/// Select and MultiSelect answers are returned wrapped as selected options,
/// like a real UI library would, and validators are applied to the plain
/// value. A scripted adapter cannot ask again, so a validator failure is
/// returned as `SurveyError::Validation`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAdapter {
    answers: HashMap<String, VecDeque<AnswerValue>>,
    confirms: VecDeque<bool>,
    asked: Vec<String>,
    batches: usize,
}

impl ScriptedAdapter {
    /// Create a new adapter with no scripted answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the question `name`.
    pub fn with_answer(mut self, name: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.answers
            .entry(name.into())
            .or_default()
            .push_back(value.into());
        self
    }

    /// Queue a string answer.
    pub fn with_string(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_answer(name, AnswerValue::String(value.into()))
    }

    /// Queue a boolean answer.
    pub fn with_bool(self, name: impl Into<String>, value: bool) -> Self {
        self.with_answer(name, AnswerValue::Bool(value))
    }

    /// Queue a list answer (MultiSelect).
    pub fn with_list<I, S>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_answer(
            name,
            AnswerValue::List(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Queue the answer to the next confirm gate.
    pub fn with_confirm(mut self, value: bool) -> Self {
        self.confirms.push_back(value);
        self
    }

    /// Queue answers to the next confirm gates, in order.
    pub fn with_confirms(mut self, values: impl IntoIterator<Item = bool>) -> Self {
        self.confirms.extend(values);
        self
    }

    /// Messages of every prompt and confirm gate shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Number of `ask_batch` calls so far.
    pub fn batch_count(&self) -> usize {
        self.batches
    }

    /// Check whether every scripted answer was consumed.
    pub fn is_exhausted(&self) -> bool {
        self.confirms.is_empty() && self.answers.values().all(VecDeque::is_empty)
    }

    fn answer(&mut self, prompt: &Prompt) -> Result<AnswerValue, SurveyError> {
        self.asked.push(prompt.message().to_string());

        let scripted = self
            .answers
            .get_mut(prompt.name())
            .and_then(VecDeque::pop_front);
        let value = match scripted.or_else(|| prompt.default().cloned()) {
            Some(value) => value,
            None if matches!(prompt.kind(), PromptKind::MultiSelect(_)) => {
                AnswerValue::List(Vec::new())
            }
            None => {
                return Err(SurveyError::adapter(anyhow::anyhow!(
                    "no scripted answer for '{}'",
                    prompt.name()
                )));
            }
        };

        if let Err(message) = prompt.validate(&value) {
            return Err(SurveyError::Validation {
                question: prompt.name().to_string(),
                message,
            });
        }

        wrap_selection(prompt, value)
    }
}

/// Present select answers the way a UI library would: as picked options.
fn wrap_selection(prompt: &Prompt, value: AnswerValue) -> Result<AnswerValue, SurveyError> {
    let pick = |options: &[String], picked: String| {
        options
            .iter()
            .position(|option| *option == picked)
            .map(|index| SelectedOption::new(index, picked.clone()))
            .ok_or_else(|| SurveyError::Validation {
                question: prompt.name().to_string(),
                message: format!("'{picked}' is not one of the options"),
            })
    };

    match (prompt.kind(), value) {
        (PromptKind::Select(options), AnswerValue::String(picked)) => {
            Ok(AnswerValue::Selected(pick(options, picked)?))
        }
        (PromptKind::MultiSelect(options), AnswerValue::List(picked)) => picked
            .into_iter()
            .map(|p| pick(options, p))
            .collect::<Result<Vec<_>, _>>()
            .map(AnswerValue::SelectedList),
        (_, value) => Ok(value),
    }
}

impl PromptAdapter for ScriptedAdapter {
    fn ask_batch(&mut self, prompts: &[Prompt]) -> Result<AnswerSet, SurveyError> {
        self.batches += 1;
        let mut answers = AnswerSet::new();
        for prompt in prompts {
            let value = self.answer(prompt)?;
            answers.insert(prompt.name(), value);
        }
        Ok(answers)
    }

    fn ask_one(&mut self, prompt: &Prompt) -> Result<AnswerValue, SurveyError> {
        self.answer(prompt)
    }

    fn confirm(&mut self, message: &str) -> Result<bool, SurveyError> {
        self.asked.push(message.to_string());
        self.confirms.pop_front().ok_or_else(|| {
            SurveyError::adapter(anyhow::anyhow!("no scripted confirmation for '{message}'"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Question;

    fn prompt(question: &Question) -> Prompt {
        Prompt::from_question("test", question).unwrap()
    }

    #[test]
    fn answers_in_order() {
        let q = prompt(&Question::input("name", "Name:"));
        let mut adapter = ScriptedAdapter::new()
            .with_answer("name", "first")
            .with_answer("name", "second");

        assert_eq!(adapter.ask_one(&q).unwrap(), AnswerValue::from("first"));
        assert_eq!(adapter.ask_one(&q).unwrap(), AnswerValue::from("second"));
        assert!(adapter.is_exhausted());
    }

    #[test]
    fn falls_back_to_default() {
        let q = prompt(&Question::input("version", "Version:").with_suggestion("v0.1.0"));
        let mut adapter = ScriptedAdapter::new();
        assert_eq!(adapter.ask_one(&q).unwrap(), AnswerValue::from("v0.1.0"));
    }

    #[test]
    fn missing_answer_is_an_adapter_error() {
        let q = prompt(&Question::input("name", "Name:"));
        let mut adapter = ScriptedAdapter::new();
        assert!(matches!(
            adapter.ask_one(&q),
            Err(SurveyError::Adapter(_))
        ));
    }

    #[test]
    fn wraps_selections() {
        let q = prompt(&Question::select("type", "Type:", ["grpc", "http"]));
        let mut adapter = ScriptedAdapter::new().with_answer("type", "http");
        assert_eq!(
            adapter.ask_one(&q).unwrap(),
            AnswerValue::Selected(SelectedOption::new(1, "http"))
        );
    }

    #[test]
    fn rejects_unknown_option() {
        let q = prompt(&Question::select("type", "Type:", ["grpc", "http"]));
        let mut adapter = ScriptedAdapter::new().with_answer("type", "soap");
        assert!(matches!(
            adapter.ask_one(&q),
            Err(SurveyError::Validation { .. })
        ));
    }

    #[test]
    fn validation_failure() {
        let q = prompt(&Question::input("name", "Name:").required());
        let mut adapter = ScriptedAdapter::new().with_answer("name", "");

        let err = adapter.ask_one(&q).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid answer for 'name': Value is required"
        );
    }

    #[test]
    fn confirm_queue() {
        let mut adapter = ScriptedAdapter::new().with_confirms([true, false]);
        assert!(adapter.confirm("More?").unwrap());
        assert!(!adapter.confirm("More?").unwrap());
        assert!(adapter.confirm("More?").is_err());
        assert_eq!(adapter.asked().len(), 3);
    }
}
