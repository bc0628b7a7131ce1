use crate::{AnswerValue, Question, QuestionKind, Validator};

/// What a prompt adapter has to render for a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Single-line text input.
    Input,

    /// Choose one option.
    Select(Vec<String>),

    /// Choose any number of options.
    MultiSelect(Vec<String>),

    /// Multi-line text input.
    Multiline,

    /// Yes/no confirmation.
    Confirm,
}

/// A concrete, renderable question.
///
/// Built from a `Question` by the executor; carries everything a prompt
/// adapter needs and nothing about conditions or nesting.
#[derive(Debug, Clone)]
pub struct Prompt {
    name: String,
    message: String,
    kind: PromptKind,
    default: Option<AnswerValue>,
    validator: Option<Validator>,
}

impl Prompt {
    /// Create a prompt directly.
    pub fn new(name: impl Into<String>, message: impl Into<String>, kind: PromptKind) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind,
            default: None,
            validator: None,
        }
    }

    /// Build the prompt for `question`, tagging its message with `[prefix]`.
    ///
    /// Returns `None` for sub-survey questions, which are never prompted directly.
    pub fn from_question(prefix: &str, question: &Question) -> Option<Self> {
        let kind = match question.kind() {
            QuestionKind::Input => PromptKind::Input,
            QuestionKind::Select(options) => PromptKind::Select(options.clone()),
            QuestionKind::MultiSelect(options) => PromptKind::MultiSelect(options.clone()),
            QuestionKind::Multiline => PromptKind::Multiline,
            QuestionKind::Confirm => PromptKind::Confirm,
            QuestionKind::SubSurvey(_) => return None,
        };

        let message = if prefix.is_empty() {
            question.message().to_string()
        } else {
            format!("[{prefix}] {}", question.message())
        };

        Some(Self {
            name: question.name().to_string(),
            message,
            kind,
            default: question.default().suggested().cloned(),
            validator: question.effective_validator(),
        })
    }

    /// Set the pre-filled value.
    pub fn with_default(mut self, value: impl Into<AnswerValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Set the validator.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// The answer key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// What to render.
    pub fn kind(&self) -> &PromptKind {
        &self.kind
    }

    /// The pre-filled value, if any.
    pub fn default(&self) -> Option<&AnswerValue> {
        self.default.as_ref()
    }

    /// The default as a string, when it is one.
    pub fn default_str(&self) -> Option<&str> {
        self.default.as_ref().and_then(AnswerValue::as_str)
    }

    /// Index of the default option for Select prompts.
    pub fn default_index(&self) -> Option<usize> {
        let PromptKind::Select(options) = &self.kind else {
            return None;
        };
        let default = self.default_str()?;
        options.iter().position(|option| option == default)
    }

    /// The validator, if any.
    pub fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    /// Validate a plain answer value; passes when there is no validator.
    pub fn validate(&self, value: &AnswerValue) -> Result<(), String> {
        match &self.validator {
            Some(validator) => validator.validate(value),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Survey;

    #[test]
    fn message_is_prefixed() {
        let q = Question::confirm("scopes", "Enable scopes?");
        let prompt = Prompt::from_question("auth", &q).unwrap();
        assert_eq!(prompt.message(), "[auth] Enable scopes?");
        assert_eq!(prompt.kind(), &PromptKind::Confirm);

        let prompt = Prompt::from_question("", &q).unwrap();
        assert_eq!(prompt.message(), "Enable scopes?");
    }

    #[test]
    fn sub_surveys_have_no_prompt() {
        let q = Question::sub_survey("rpcs", "RPCs", Survey::empty());
        assert!(Prompt::from_question("svc", &q).is_none());
    }

    #[test]
    fn default_index_for_select() {
        let q = Question::select("method", "Method:", ["get", "post"]).with_suggestion("post");
        let prompt = Prompt::from_question("rpc", &q).unwrap();
        assert_eq!(prompt.default_index(), Some(1));
    }

    #[test]
    fn required_question_validates() {
        let q = Question::input("name", "Name:").required();
        let prompt = Prompt::from_question("", &q).unwrap();
        assert!(prompt.validate(&AnswerValue::from("")).is_err());
        assert!(prompt.validate(&AnswerValue::from("orders")).is_ok());
    }
}
