use crate::AnswerValue;

/// Where a question's answer comes from before the operator is asked.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DefaultValue {
    /// Nothing pre-filled.
    #[default]
    None,

    /// Pre-filled; the operator can accept or change it.
    Suggested(AnswerValue),

    /// Taken as the answer; the question is never shown.
    Assumed(AnswerValue),
}

impl DefaultValue {
    /// Check if there is no default.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Check if the value is assumed (question skipped).
    pub fn is_assumed(&self) -> bool {
        matches!(self, Self::Assumed(_))
    }

    /// Check if the value only pre-fills the prompt.
    pub fn is_suggested(&self) -> bool {
        matches!(self, Self::Suggested(_))
    }

    /// The value to pre-fill a prompt with.
    pub fn suggested(&self) -> Option<&AnswerValue> {
        match self {
            Self::Suggested(value) => Some(value),
            _ => None,
        }
    }

    /// The value, suggested or assumed.
    pub fn value(&self) -> Option<&AnswerValue> {
        match self {
            Self::None => None,
            Self::Suggested(value) | Self::Assumed(value) => Some(value),
        }
    }
}
