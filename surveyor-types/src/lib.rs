//! Core types for the surveyor crate.
//!
//! This crate provides the foundational types for describing and answering surveys:
//! - `Survey`, `Question` and `QuestionKind` - The declarative question model
//! - `Condition` - Visibility rules referencing earlier answers
//! - `AnswerSet` and `AnswerValue` - Collected answers
//! - `Prompt` - A single renderable question handed to a prompt adapter
//! - `PromptAdapter`, `Feature` and `Registry` traits - The collaborator seams

mod answer_value;
pub use answer_value::{AnswerValue, SelectedOption};

mod answer_set;
pub use answer_set::{AnswerError, AnswerSet};

mod default_value;
pub use default_value::DefaultValue;

mod condition;
pub use condition::{Condition, ExpectedValue};

mod validator;
pub use validator::{Validator, is_semver_with_prefix};

mod question;
pub use question::{Question, QuestionKind};

mod survey;
pub use survey::{ConfirmLoop, Survey};

mod prompt;
pub use prompt::{Prompt, PromptKind};

mod definition;
pub use definition::FeatureDefinition;

mod error;
pub use error::{RegistryError, SurveyError};

mod traits;
pub use traits::{Feature, PromptAdapter, Registry};
