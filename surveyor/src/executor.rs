//! Survey traversal.
//!
//! Questions are visited in declaration order. A question's condition is
//! evaluated against the answers already collected at the same level, so a
//! condition can only ever see earlier siblings. Sub-surveys are run in place
//! and stored under their own question name. Surveys with a confirm loop are
//! repeated until the operator declines, producing one answer set per
//! iteration.
//!
//! In batch mode every visible question is queued and asked with a single
//! `ask_batch` call at the end of the pass; in one-at-a-time mode each answer
//! is stored as soon as it is given.
//!
//! Any adapter error aborts the whole traversal; answers collected so far are
//! dropped.

use tracing::{debug, trace};

use crate::condition::should_show;
use crate::sanitize::{sanitize, sanitize_value};
use crate::{
    AnswerSet, AnswerValue, DefaultValue, Prompt, PromptAdapter, QuestionKind, Survey,
    SurveyError,
};

/// Run `survey`, tagging prompts with `name`.
///
/// The question model is checked first, so a malformed survey fails before any
/// prompt is shown. For a survey with a confirm loop the result is
/// `{name: [iteration answers...]}`; otherwise it is the flat answer set.
pub fn run<A>(adapter: &mut A, survey: &Survey, name: &str) -> Result<AnswerSet, SurveyError>
where
    A: PromptAdapter + ?Sized,
{
    survey.validate()?;
    debug!(survey = name, questions = survey.len(), "running survey");
    run_survey(adapter, survey, name)
}

fn run_survey<A>(adapter: &mut A, survey: &Survey, name: &str) -> Result<AnswerSet, SurveyError>
where
    A: PromptAdapter + ?Sized,
{
    let Some(confirm_loop) = survey.confirm_loop() else {
        return run_pass(adapter, survey, name);
    };

    let mut iterations = Vec::new();
    loop {
        if !confirm_loop.confirm_after() && !adapter.confirm(confirm_loop.message())? {
            break;
        }

        iterations.push(run_pass(adapter, survey, name)?);
        debug!(survey = name, iteration = iterations.len(), "confirm loop iteration done");

        if confirm_loop.confirm_after() && !adapter.confirm(confirm_loop.message())? {
            break;
        }
    }

    let mut answers = AnswerSet::new();
    answers.insert(name, AnswerValue::NestedList(iterations));
    Ok(answers)
}

/// One pass over the survey's questions.
fn run_pass<A>(adapter: &mut A, survey: &Survey, name: &str) -> Result<AnswerSet, SurveyError>
where
    A: PromptAdapter + ?Sized,
{
    let mut answers = AnswerSet::new();
    let mut batch: Vec<Prompt> = Vec::new();

    for question in survey.questions() {
        if !should_show(&answers, question.condition()) {
            trace!(survey = name, question = question.name(), "condition not met, skipping");
            continue;
        }

        if let DefaultValue::Assumed(value) = question.default() {
            trace!(survey = name, question = question.name(), "using assumed value");
            answers.insert(question.name(), sanitize_value(value.clone()));
            continue;
        }

        if let QuestionKind::SubSurvey(inner) = question.kind() {
            let nested = run_survey(adapter, inner, question.name())?;
            if !nested.is_empty() {
                answers.insert(question.name(), promote(question.name(), sanitize(nested)));
            }
            continue;
        }

        let Some(prompt) = Prompt::from_question(name, question) else {
            continue;
        };

        if survey.ask_one_at_a_time() {
            let value = adapter.ask_one(&prompt)?;
            answers.insert(question.name(), sanitize_value(value));
        } else {
            batch.push(prompt);
        }
    }

    if !batch.is_empty() {
        trace!(survey = name, prompts = batch.len(), "asking batch");
        let mut batched = adapter.ask_batch(&batch)?;
        for prompt in &batch {
            if let Some(value) = batched.remove(prompt.name()) {
                answers.insert(prompt.name(), value);
            }
        }
    }

    Ok(sanitize(answers))
}

/// A nested result keyed solely by its own question name (the confirm-loop
/// shape) is unwrapped so the value is not nested twice under the same key.
fn promote(name: &str, mut nested: AnswerSet) -> AnswerValue {
    if nested.len() == 1
        && let Some(value) = nested.remove(name)
    {
        return value;
    }
    AnswerValue::Nested(nested)
}
