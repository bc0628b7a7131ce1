//! # surveyor
//!
//! Interactive configuration of pluggable features and services, driven by
//! declarative surveys. Backend-agnostic.
//!
//! A feature describes what it wants to know as a [`Survey`]; the engine walks
//! it (conditions, nested sub-surveys, confirm loops), asks a
//! [`PromptAdapter`] to render each question, normalizes the answers and
//! hands them back to the feature to build its definition.
//!
//! ## Usage
//!
//! ```rust
//! use surveyor::{Question, ScriptedAdapter, Survey, executor};
//!
//! let survey = Survey::new(vec![
//!     Question::input("name", "RPC name:").required(),
//!     Question::select("method", "Method:", ["get", "post"]),
//! ]);
//!
//! let mut adapter = ScriptedAdapter::new()
//!     .with_answer("name", "GetOrder")
//!     .with_answer("method", "get");
//!
//! let answers = executor::run(&mut adapter, &survey, "rpc").unwrap();
//! assert_eq!(answers.get_string("method").unwrap(), "get");
//! ```
//!
//! ## Modules
//!
//! - [`condition`] - whether a question is shown, given earlier answers
//! - [`executor`] - survey traversal
//! - [`sanitize`] - removal of UI-layer answer wrappers
//! - [`registry`] - feature lookup with namespaced fallback
//! - [`orchestrator`] - the service initialization survey
//!
//! ## Adapters
//!
//! Adapters implement [`PromptAdapter`]:
//! - [`ScriptedAdapter`] - pre-defined answers, for tests
//! - `surveyor-wizard-dialoguer` - terminal prompts via dialoguer

// Re-export all types from surveyor-types
pub use surveyor_types::*;

pub mod condition;
pub mod executor;
pub mod orchestrator;
pub mod registry;
pub mod sanitize;

pub use condition::should_show;
pub use orchestrator::{InitError, InitOptions, InitSurveyAnswers, run_init_survey};
pub use registry::{DEFAULT_FEATURE_PREFIX, FeatureRegistry, SurveyCapability, resolve};
pub use sanitize::{sanitize, sanitize_value};

// Scripted adapter for running surveys without user interaction
mod scripted;
pub use scripted::ScriptedAdapter;
