use crate::cli::actions::{demo, shell, Action};
use anyhow::Result;

/// Execute the provided action.
/// # Errors
/// Returns an error if the action fails.
pub fn execute(action: Action) -> Result<()> {
    match action {
        Action::Demo(args) => demo::execute(&args),
        Action::Shell(args) => shell::execute(&args),
    }
}
