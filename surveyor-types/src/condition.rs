/// The value (or values) a referenced answer must hold for a question to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedValue {
    /// The answer must equal this string exactly.
    One(String),

    /// The answer must be one of these strings.
    AnyOf(Vec<String>),
}

/// A display rule gating a question on an earlier answer at the same survey level.
///
/// Conditions may only reference questions declared before the gated one;
/// a reference to an unanswered question hides the gated question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    question: String,
    expected: ExpectedValue,
}

impl Condition {
    /// Show the question when `question` was answered with exactly `value`.
    pub fn equals(question: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            expected: ExpectedValue::One(value.into()),
        }
    }

    /// Show the question when `question` was answered with any of `values`.
    pub fn any_of<I, S>(question: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question: question.into(),
            expected: ExpectedValue::AnyOf(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Name of the referenced question.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The expected value(s).
    pub fn expected(&self) -> &ExpectedValue {
        &self.expected
    }
}
