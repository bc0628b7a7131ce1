//! Dialoguer implementation of the `PromptAdapter` trait.

use std::io::{self, Write};

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Editor, FuzzySelect, Input, MultiSelect, Select};
use surveyor::{
    AnswerSet, AnswerValue, Prompt, PromptAdapter, PromptKind, SelectedOption, SurveyError,
};
use thiserror::Error;
use tracing::trace;

/// Select prompts with more options than this get type-to-filter.
const FUZZY_THRESHOLD: usize = 10;

/// Error type for the Dialoguer adapter.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the survey (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl From<DialoguerError> for SurveyError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => SurveyError::Cancelled,
            other => SurveyError::adapter(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// Prompt diagnostics go to stderr with the rest of the rendering; stdout
/// carries the caller's output.
fn diagnostic<W: Write>(out: &mut W, line: &str) -> Result<(), DialoguerError> {
    writeln!(out, "{line}").map_err(|e| DialoguerError::Dialoguer(dialoguer::Error::IO(e)))
}

fn interact<T>(result: Result<T, dialoguer::Error>) -> Result<T, DialoguerError> {
    result.map_err(|e| {
        if is_cancelled(&e) {
            DialoguerError::Cancelled
        } else {
            DialoguerError::Dialoguer(e)
        }
    })
}

/// Dialoguer adapter for interactive CLI prompts.
///
/// Each prompt is asked on its own line, wizard style. Answers that fail the
/// prompt's validator are reported and the question is asked again.
#[derive(Debug, Default, Clone)]
pub struct DialoguerAdapter {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerAdapter {
    /// Create a new Dialoguer adapter with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create an adapter with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Whether prompts use the colorful theme.
    pub fn is_colorful(&self) -> bool {
        self.colorful
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// Ask until the answer passes the prompt's validator.
    fn ask(&self, prompt: &Prompt) -> Result<AnswerValue, DialoguerError> {
        trace!(prompt = prompt.name(), "asking");
        loop {
            let (plain, answer) = match prompt.kind() {
                PromptKind::Input => {
                    let value = AnswerValue::String(self.ask_input(prompt)?);
                    (value.clone(), value)
                }
                PromptKind::Multiline => {
                    let value = AnswerValue::String(self.ask_multiline(prompt)?);
                    (value.clone(), value)
                }
                PromptKind::Confirm => {
                    let value = AnswerValue::Bool(self.ask_confirm(prompt)?);
                    (value.clone(), value)
                }
                PromptKind::Select(options) => {
                    let picked = self.ask_select(prompt, options)?;
                    (
                        AnswerValue::String(picked.value.clone()),
                        AnswerValue::Selected(picked),
                    )
                }
                PromptKind::MultiSelect(options) => {
                    let picked = self.ask_multi_select(prompt, options)?;
                    (
                        AnswerValue::List(picked.iter().map(|p| p.value.clone()).collect()),
                        AnswerValue::SelectedList(picked),
                    )
                }
            };

            if let Err(msg) = prompt.validate(&plain) {
                diagnostic(&mut io::stderr().lock(), &format!("Error: {msg}"))?;
                continue;
            }
            return Ok(answer);
        }
    }

    fn ask_input(&self, prompt: &Prompt) -> Result<String, DialoguerError> {
        let theme = self.theme();
        let mut builder = Input::<String>::with_theme(&*theme)
            .with_prompt(prompt.message())
            .allow_empty(true);

        if let Some(default) = prompt.default_str() {
            builder = builder.default(default.to_string());
        }

        interact(builder.interact_text())
    }

    fn ask_multiline(&self, prompt: &Prompt) -> Result<String, DialoguerError> {
        diagnostic(&mut io::stderr().lock(), prompt.message())?;

        let text = interact(Editor::new().edit(prompt.default_str().unwrap_or("")))?;
        // Editor was aborted or empty, use empty string
        Ok(text.unwrap_or_default())
    }

    fn ask_confirm(&self, prompt: &Prompt) -> Result<bool, DialoguerError> {
        let default = prompt
            .default()
            .and_then(AnswerValue::as_bool)
            .unwrap_or(false);
        self.yes_no(prompt.message(), default)
    }

    fn ask_select(
        &self,
        prompt: &Prompt,
        options: &[String],
    ) -> Result<SelectedOption, DialoguerError> {
        let theme = self.theme();
        let default = prompt.default_index().unwrap_or(0);

        let index = if options.len() > FUZZY_THRESHOLD {
            interact(
                FuzzySelect::with_theme(&*theme)
                    .with_prompt(prompt.message())
                    .items(options)
                    .default(default)
                    .interact(),
            )?
        } else {
            interact(
                Select::with_theme(&*theme)
                    .with_prompt(prompt.message())
                    .items(options)
                    .default(default)
                    .max_length(options.len())
                    .interact(),
            )?
        };

        Ok(SelectedOption::new(index, options[index].clone()))
    }

    fn ask_multi_select(
        &self,
        prompt: &Prompt,
        options: &[String],
    ) -> Result<Vec<SelectedOption>, DialoguerError> {
        let theme = self.theme();
        let preselected = prompt.default().and_then(AnswerValue::as_list).unwrap_or(&[]);
        let defaults: Vec<bool> = options
            .iter()
            .map(|option| preselected.contains(option))
            .collect();

        let indices = interact(
            MultiSelect::with_theme(&*theme)
                .with_prompt(prompt.message())
                .items(options)
                .defaults(&defaults)
                .interact(),
        )?;

        Ok(indices
            .into_iter()
            .map(|index| SelectedOption::new(index, options[index].clone()))
            .collect())
    }

    fn yes_no(&self, message: &str, default: bool) -> Result<bool, DialoguerError> {
        let theme = self.theme();
        interact(
            Confirm::with_theme(&*theme)
                .with_prompt(message)
                .default(default)
                .interact(),
        )
    }
}

impl PromptAdapter for DialoguerAdapter {
    fn ask_batch(&mut self, prompts: &[Prompt]) -> Result<AnswerSet, SurveyError> {
        let mut answers = AnswerSet::new();
        for prompt in prompts {
            answers.insert(prompt.name(), self.ask(prompt)?);
        }
        Ok(answers)
    }

    fn ask_one(&mut self, prompt: &Prompt) -> Result<AnswerValue, SurveyError> {
        Ok(self.ask(prompt)?)
    }

    fn confirm(&mut self, message: &str) -> Result<bool, SurveyError> {
        Ok(self.yes_no(message, false)?)
    }
}
