//! Map parsed command-line arguments to an [`Action`].

use crate::cli::actions::{demo, shell, Action};
use crate::cli::commands::{output, shell as shell_args, CMD_DEMO};
use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if the output format is invalid or no subcommand was given.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let format = output::Options::parse(matches)?.format;

    match matches.subcommand() {
        Some((CMD_DEMO, _)) => Ok(Action::Demo(demo::Args { format })),
        Some((shell_args::CMD_SHELL, sub_m)) => Ok(Action::Shell(shell::Args {
            format,
            script: sub_m.get_one::<PathBuf>(shell_args::ARG_SCRIPT).cloned(),
        })),
        Some((other, _)) => Err(anyhow!("unknown subcommand: {other}")),
        None => Err(anyhow!("missing subcommand")),
    }
}
