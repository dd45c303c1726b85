use clap::Parser;
use std::process::{ExitCode, ExitStatus};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod assets;
mod cli;
mod commands;
mod config;
mod error;
mod extensions;
mod hiverc;
mod runners;
mod search;
mod util;

use crate::cli::RootArgs;
use crate::error::LaunchError;

const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    match commands::run(&args.command, args.args) {
        Ok(status) => exit_code_for(status),
        Err(err) => {
            eprintln!("hadupils: {err:#}");
            match err.downcast_ref::<LaunchError>() {
                Some(LaunchError::UnknownCommand(_)) => ExitCode::from(EXIT_USAGE),
                _ => ExitCode::from(EXIT_FAILURE),
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Mirror the child's exit status, using `128 + signal` for signal deaths.
fn exit_code_for(status: ExitStatus) -> ExitCode {
    if let Some(code) = status.code() {
        return ExitCode::from(u8::try_from(code).unwrap_or(EXIT_FAILURE));
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return ExitCode::from(u8::try_from(128 + signal).unwrap_or(EXIT_FAILURE));
        }
    }
    ExitCode::from(EXIT_FAILURE)
}
