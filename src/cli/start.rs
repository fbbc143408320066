use crate::cli::commands::{self, logging};
use crate::cli::{actions::Action, dispatch, telemetry};
use anyhow::Result;

/// Parse arguments, install logging, and resolve the action to run.
///
/// # Errors
///
/// Returns an error if the subscriber cannot be installed or the arguments do not map to an action
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    telemetry::init(logging::Options::parse(&matches).level)?;

    dispatch::handler(&matches)
}
