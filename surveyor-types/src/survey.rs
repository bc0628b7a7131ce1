use std::collections::HashSet;

use crate::{AnswerValue, DefaultValue, Question, QuestionKind, SurveyError};

/// Repeat-until-declined settings for a survey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmLoop {
    message: String,
    confirm_after: bool,
}

impl ConfirmLoop {
    /// Ask `message` before every iteration; a "no" ends the loop.
    pub fn before(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            confirm_after: false,
        }
    }

    /// Ask `message` after every iteration; the first iteration always runs.
    pub fn after(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            confirm_after: true,
        }
    }

    /// The yes/no gate text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the gate follows each iteration.
    pub fn confirm_after(&self) -> bool {
        self.confirm_after
    }
}

/// A declarative, possibly nested tree of questions.
///
/// A survey is presentation-agnostic: it says what to ask, in which order and
/// under which conditions. Executing it is the job of the survey executor.
#[derive(Debug, Clone, Default)]
pub struct Survey {
    /// Questions in declaration order.
    questions: Vec<Question>,

    /// Ask sequentially, making each answer visible to later conditions.
    ask_one_at_a_time: bool,

    /// Repeat the survey until the operator declines.
    confirm_loop: Option<ConfirmLoop>,
}

impl Survey {
    /// Create a survey whose questions are asked together in one batch.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ask_one_at_a_time: false,
            confirm_loop: None,
        }
    }

    /// Create an empty survey.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ask questions one at a time instead of in a single batch.
    pub fn one_at_a_time(mut self) -> Self {
        self.ask_one_at_a_time = true;
        self
    }

    /// Repeat the survey under a confirm gate.
    pub fn with_confirm_loop(mut self, confirm_loop: ConfirmLoop) -> Self {
        self.confirm_loop = Some(confirm_loop);
        self
    }

    /// Append a question.
    pub fn push(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get a mutable reference to the questions.
    pub fn questions_mut(&mut self) -> &mut Vec<Question> {
        &mut self.questions
    }

    /// Find a question by name at this level.
    pub fn question(&self, name: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.name() == name)
    }

    /// Whether questions are asked one at a time.
    pub fn ask_one_at_a_time(&self) -> bool {
        self.ask_one_at_a_time
    }

    /// The confirm loop, if any.
    pub fn confirm_loop(&self) -> Option<&ConfirmLoop> {
        self.confirm_loop.as_ref()
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of top-level questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check that the question model is well formed, including nested surveys.
    pub fn validate(&self) -> Result<(), SurveyError> {
        let mut seen = HashSet::new();

        for question in &self.questions {
            let invalid = |reason: &str| SurveyError::InvalidQuestion {
                question: question.name().to_string(),
                reason: reason.to_string(),
            };

            if question.name().trim().is_empty() {
                return Err(invalid("question name cannot be empty"));
            }
            if question.message().trim().is_empty() {
                return Err(invalid("question message cannot be empty"));
            }
            if !seen.insert(question.name()) {
                return Err(invalid("duplicate question name in the same survey"));
            }

            match question.kind() {
                QuestionKind::Select(options) | QuestionKind::MultiSelect(options)
                    if options.is_empty() =>
                {
                    return Err(invalid("options are required for select questions"));
                }
                QuestionKind::Select(options) => {
                    if let Some(AnswerValue::String(value)) = question.default().value()
                        && !options.contains(value)
                    {
                        return Err(invalid("default value is not one of the options"));
                    }
                }
                QuestionKind::SubSurvey(survey) => {
                    if matches!(question.default(), DefaultValue::Suggested(_)) {
                        return Err(invalid("sub-surveys cannot have a suggested value"));
                    }
                    survey.validate()?;
                }
                _ => {}
            }
        }

        Ok(())
    }
}
