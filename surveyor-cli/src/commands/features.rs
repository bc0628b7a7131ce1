//! `surveyor features`: list what the init survey offers.

use std::io::{self, Write};

use crate::config::Settings;
use crate::error::{CliError, CliResult};

pub fn execute(settings: &Settings) -> CliResult<()> {
    let features = example_features::features();
    let services = example_features::services();
    let options = super::offered(&features, &services, &settings.survey.feature_prefix);

    let mut out = String::from("Features:\n");
    for name in options.offered_features() {
        out.push_str(&format!("  {name}\n"));
    }
    out.push_str("Service types:\n");
    for kind in options.service_types() {
        out.push_str(&format!("  {kind}\n"));
    }

    io::stdout()
        .write_all(out.as_bytes())
        .map_err(|source| CliError::Io {
            message: "cannot write to stdout".into(),
            source,
        })
}
