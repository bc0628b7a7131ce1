//! # surveyor-wizard-dialoguer
//!
//! Dialoguer prompt adapter for surveyor.
//!
//! This crate renders survey prompts on the terminal using the `dialoguer`
//! library. Questions are presented step-by-step in a classic CLI wizard
//! style, batches included.
//!
//! ## Example
//!
//! ```rust,no_run
//! use surveyor::{Question, Survey, executor};
//! use surveyor_wizard_dialoguer::DialoguerAdapter;
//!
//! fn main() -> anyhow::Result<()> {
//!     let survey = Survey::new(vec![
//!         Question::input("name", "What is the service called?").required(),
//!         Question::confirm("metrics", "Export metrics?"),
//!     ]);
//!
//!     let mut adapter = DialoguerAdapter::new();
//!     let answers = executor::run(&mut adapter, &survey, "service")?;
//!     println!("Hello, {}!", answers.get_string("name")?);
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerAdapter, DialoguerError};
