use serde::Serialize;

use crate::AnswerSet;

/// An option picked from a Select or MultiSelect prompt, as reported by the UI layer.
///
/// Carries both the index into the question's options and the option text.
/// The sanitizer replaces it with the plain option value before answers reach
/// feature logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedOption {
    /// Position of the option in the question's option list.
    pub index: usize,

    /// The option text.
    pub value: String,
}

impl SelectedOption {
    /// Create a new selected option.
    pub fn new(index: usize, value: impl Into<String>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }
}

/// A single answer value collected from a survey.
///
/// This is the value stored in an `AnswerSet` for each answered question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A string value (from Input, Multiline or Select questions).
    String(String),

    /// A boolean value (from Confirm questions).
    Bool(bool),

    /// A list of strings (from MultiSelect questions).
    List(Vec<String>),

    /// The answers of a nested sub-survey.
    Nested(AnswerSet),

    /// One answer set per iteration of a confirm loop.
    NestedList(Vec<AnswerSet>),

    /// A selected option as produced by a prompt adapter. Removed by sanitizing.
    Selected(SelectedOption),

    /// Selected options as produced by a prompt adapter. Removed by sanitizing.
    SelectedList(Vec<SelectedOption>),
}

impl AnswerValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a list of strings.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Try to get this value as a nested answer set.
    pub fn as_nested(&self) -> Option<&AnswerSet> {
        match self {
            Self::Nested(answers) => Some(answers),
            _ => None,
        }
    }

    /// Try to get this value as a list of nested answer sets.
    pub fn as_nested_list(&self) -> Option<&[AnswerSet]> {
        match self {
            Self::NestedList(list) => Some(list),
            _ => None,
        }
    }

    /// Check whether this value still carries UI-layer option wrappers.
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Self::Selected(_) | Self::SelectedList(_))
    }

    /// Check whether this value is "empty" in the sense of a required answer.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::String(s) => s.trim().is_empty(),
            Self::Bool(_) => false,
            Self::List(list) => list.is_empty(),
            Self::Nested(answers) => answers.is_empty(),
            Self::NestedList(list) => list.is_empty(),
            Self::Selected(option) => option.value.is_empty(),
            Self::SelectedList(options) => options.is_empty(),
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Bool(_) => "Bool",
            Self::List(_) => "List",
            Self::Nested(_) => "Nested",
            Self::NestedList(_) => "NestedList",
            Self::Selected(_) => "Selected",
            Self::SelectedList(_) => "SelectedList",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(list: Vec<String>) -> Self {
        Self::List(list)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(list: Vec<&str>) -> Self {
        Self::List(list.into_iter().map(String::from).collect())
    }
}

impl From<AnswerSet> for AnswerValue {
    fn from(answers: AnswerSet) -> Self {
        Self::Nested(answers)
    }
}

impl From<Vec<AnswerSet>> for AnswerValue {
    fn from(list: Vec<AnswerSet>) -> Self {
        Self::NestedList(list)
    }
}

impl From<SelectedOption> for AnswerValue {
    fn from(option: SelectedOption) -> Self {
        Self::Selected(option)
    }
}
