//! Question visibility.

use crate::{AnswerSet, AnswerValue, Condition, ExpectedValue};

/// Decide whether a question with `condition` is shown, given the answers so far.
///
/// - no condition: shown;
/// - the referenced question has no answer (yet): hidden;
/// - otherwise shown iff the answer is a string equal to, or a member of, the
///   expected value. A non-string answer never matches.
pub fn should_show(answers: &AnswerSet, condition: Option<&Condition>) -> bool {
    let Some(condition) = condition else {
        return true;
    };

    let Some(AnswerValue::String(answer)) = answers.get(condition.question()) else {
        return false;
    };

    match condition.expected() {
        ExpectedValue::One(expected) => answer == expected,
        ExpectedValue::AnyOf(expected) => expected.contains(answer),
    }
}
