//! Normalization of answers produced by prompt adapters.
//!
//! Adapters may report Select answers as the picked option (index and text).
//! Feature logic only ever sees plain values: option wrappers become their
//! text, lists of wrappers become lists of text in the same order. Every other
//! value, nested answer sets included, is left as it is.

use crate::{AnswerSet, AnswerValue};

/// Replace option wrappers in `answers` with their plain values.
///
/// Pure and idempotent: `sanitize(sanitize(x)) == sanitize(x)`.
pub fn sanitize(answers: AnswerSet) -> AnswerSet {
    answers
        .into_iter()
        .map(|(name, value)| (name, sanitize_value(value)))
        .collect()
}

/// Replace a single option wrapper with its plain value.
pub fn sanitize_value(value: AnswerValue) -> AnswerValue {
    match value {
        AnswerValue::Selected(option) => AnswerValue::String(option.value),
        AnswerValue::SelectedList(options) => {
            AnswerValue::List(options.into_iter().map(|option| option.value).collect())
        }
        other => other,
    }
}
