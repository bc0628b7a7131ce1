//! `surveyor init`: run the initialization survey.

use std::fs;
use std::io::{self, IsTerminal as _, Write};
use std::path::Path;

use surveyor::run_init_survey;
use surveyor_wizard_dialoguer::DialoguerAdapter;
use tracing::info;

use crate::cli::InitArgs;
use crate::config::Settings;
use crate::error::{CliError, CliResult};

pub fn execute(args: InitArgs, settings: &Settings) -> CliResult<()> {
    let features = example_features::features();
    let services = example_features::services();
    let mut options = super::offered(&features, &services, &settings.survey.feature_prefix);

    if let Some(kind) = args.kind.as_deref() {
        let supported = options.service_types();
        if !supported.iter().any(|t| t == kind) {
            return Err(CliError::usage(format!(
                "unsupported service type '{kind}' (expected one of: {})",
                supported.join(", ")
            )));
        }
        options = options.with_kind(kind);
    }

    if !io::stdin().is_terminal() {
        return Err(CliError::usage("init needs an interactive terminal"));
    }

    let mut adapter = if settings.plain_theme() {
        DialoguerAdapter::plain()
    } else {
        DialoguerAdapter::new()
    };

    let answers = run_init_survey(&mut adapter, &options)?;
    info!(
        service = %answers.name,
        features = answers.definitions.len(),
        "survey complete"
    );

    let json = serde_json::to_string_pretty(&answers).map_err(|e| CliError::Io {
        message: "cannot serialize the survey result".into(),
        source: io::Error::other(e),
    })?;

    match args.output.as_deref() {
        Some(path) => write_file(path, &json),
        None => writeln!(io::stdout(), "{json}").map_err(|source| CliError::Io {
            message: "cannot write to stdout".into(),
            source,
        }),
    }
}

fn write_file(path: &Path, json: &str) -> CliResult<()> {
    fs::write(path, format!("{json}\n")).map_err(|source| CliError::Io {
        message: format!("cannot write {}", path.display()),
        source,
    })?;
    info!(path = %path.display(), "result written");
    Ok(())
}
