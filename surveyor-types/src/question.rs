use crate::{AnswerValue, Condition, DefaultValue, Survey, Validator};

/// A single question in a survey.
#[derive(Debug, Clone)]
pub struct Question {
    /// Unique name within the owning survey; the answer key and condition target.
    name: String,

    /// The prompt text shown to the user.
    message: String,

    /// The kind of question (determines input type and nested structure).
    kind: QuestionKind,

    /// Default value for this question (none, suggested, or assumed).
    default: DefaultValue,

    /// Reject empty answers when no custom validator is set.
    required: bool,

    /// Custom validator, takes precedence over `required`.
    validator: Option<Validator>,

    /// Display rule referencing an earlier answer.
    condition: Option<Condition>,
}

impl Question {
    /// Create a new question.
    pub fn new(name: impl Into<String>, message: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind,
            default: DefaultValue::None,
            required: false,
            validator: None,
            condition: None,
        }
    }

    /// Single-line text input.
    pub fn input(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message, QuestionKind::Input)
    }

    /// Multi-line text input.
    pub fn multiline(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message, QuestionKind::Multiline)
    }

    /// Yes/no question.
    pub fn confirm(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message, QuestionKind::Confirm)
    }

    /// Pick exactly one of `options`.
    pub fn select<I, S>(name: impl Into<String>, message: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            message,
            QuestionKind::Select(options.into_iter().map(Into::into).collect()),
        )
    }

    /// Pick any number of `options`.
    pub fn multi_select<I, S>(
        name: impl Into<String>,
        message: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            message,
            QuestionKind::MultiSelect(options.into_iter().map(Into::into).collect()),
        )
    }

    /// A nested survey asked in place of a direct prompt.
    pub fn sub_survey(name: impl Into<String>, message: impl Into<String>, survey: Survey) -> Self {
        Self::new(name, message, QuestionKind::SubSurvey(Box::new(survey)))
    }

    /// Mark the question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a custom validator.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Pre-fill the question with a value the user can change.
    pub fn with_suggestion(mut self, value: impl Into<AnswerValue>) -> Self {
        self.set_suggestion(value);
        self
    }

    /// Skip the question and use `value` directly.
    pub fn with_assumption(mut self, value: impl Into<AnswerValue>) -> Self {
        self.set_assumption(value);
        self
    }

    /// Only show the question when `condition` holds.
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Get the question name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the prompt text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get the default value.
    pub fn default(&self) -> &DefaultValue {
        &self.default
    }

    /// Whether an empty answer is rejected.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the custom validator, if any.
    pub fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    /// The validator prompts should apply: the custom one, else `required` when set.
    pub fn effective_validator(&self) -> Option<Validator> {
        match (&self.validator, self.required) {
            (Some(validator), _) => Some(validator.clone()),
            (None, true) => Some(Validator::required()),
            (None, false) => None,
        }
    }

    /// Get the display condition, if any.
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Set a suggested default value (user can modify).
    pub fn set_suggestion(&mut self, value: impl Into<AnswerValue>) {
        self.default = DefaultValue::Suggested(value.into());
    }

    /// Set an assumed value (question is skipped entirely).
    pub fn set_assumption(&mut self, value: impl Into<AnswerValue>) {
        self.default = DefaultValue::Assumed(value.into());
    }

    /// Clear any default value.
    pub fn clear_default(&mut self) {
        self.default = DefaultValue::None;
    }

    /// Check if this question should be skipped (has an assumed value).
    pub fn is_assumed(&self) -> bool {
        self.default.is_assumed()
    }
}

/// The kind of question, determining input type and structure.
#[derive(Debug, Clone)]
pub enum QuestionKind {
    /// Single-line text input.
    Input,

    /// Choose one of the options; answered with the option value.
    Select(Vec<String>),

    /// Choose any number of the options.
    MultiSelect(Vec<String>),

    /// Multi-line text input (opens an editor).
    Multiline,

    /// Yes/no confirmation.
    Confirm,

    /// A nested survey, answered as a nested answer set.
    SubSurvey(Box<Survey>),
}

impl QuestionKind {
    /// The options of a Select or MultiSelect question; empty otherwise.
    pub fn options(&self) -> &[String] {
        match self {
            Self::Select(options) | Self::MultiSelect(options) => options,
            _ => &[],
        }
    }

    /// Check if this is a nested survey.
    pub fn is_sub_survey(&self) -> bool {
        matches!(self, Self::SubSurvey(_))
    }

    /// Short label used in logs and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Select(_) => "select",
            Self::MultiSelect(_) => "multi-select",
            Self::Multiline => "multiline",
            Self::Confirm => "confirm",
            Self::SubSurvey(_) => "sub-survey",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_validator_prefers_custom() {
        let q = Question::input("name", "Name:")
            .required()
            .with_validator(Validator::min_length(3));
        let v = q.effective_validator().unwrap();
        assert!(v.validate(&AnswerValue::from("ab")).is_err());
        assert!(v.validate(&AnswerValue::from("abc")).is_ok());
    }

    #[test]
    fn effective_validator_from_required() {
        let q = Question::input("name", "Name:").required();
        let v = q.effective_validator().unwrap();
        assert!(v.validate(&AnswerValue::from("")).is_err());

        assert!(Question::input("name", "Name:").effective_validator().is_none());
    }

    #[test]
    fn select_keeps_option_order() {
        let q = Question::select("type", "Type:", ["http", "grpc", "script"]);
        assert_eq!(q.kind().options(), ["http", "grpc", "script"]);
        assert_eq!(q.kind().label(), "select");
    }

    #[test]
    fn defaults() {
        let q = Question::input("version", "Version:").with_suggestion("v0.1.0");
        assert!(q.default().is_suggested());
        assert!(!q.is_assumed());

        let mut q = Question::select("type", "Type:", ["http"]).with_assumption("http");
        assert!(q.is_assumed());
        q.clear_default();
        assert!(q.default().is_none());
    }
}
