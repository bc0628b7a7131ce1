//! # surveyor
//!
//! Interactive service initialization.
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber.
//! 3. Load settings.
//! 4. Dispatch to the command handler.
//! 5. Translate any [`CliError`] into a message on stderr and an exit code.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate::{
    cli::{Cli, Commands},
    config::Settings,
    error::{CliError, CliResult},
    logging::init_logging,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also land here and exit 0
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        "CLI started"
    );

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e),
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let settings = Settings::load(cli.global.config.as_deref())?;

    match cli.command {
        Commands::Init(args) => commands::init::execute(args, &settings),
        Commands::Features => commands::features::execute(&settings),
    }
}

fn handle_error(err: CliError) -> ExitCode {
    err.log();
    eprint!("{}", err.render());
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn init_arguments() {
        let cli = Cli::try_parse_from(["surveyor", "-vv", "init", "--kind", "grpc", "-o", "out.json"])
            .unwrap();
        assert_eq!(cli.global.verbose, 2);
        let Commands::Init(args) = cli.command else {
            panic!("expected init");
        };
        assert_eq!(args.kind.as_deref(), Some("grpc"));
        assert_eq!(args.output.unwrap().to_str(), Some("out.json"));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["surveyor", "-q", "-v", "features"]).is_err());
    }
}
