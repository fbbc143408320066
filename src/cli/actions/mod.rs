pub mod demo;
pub mod printer;
pub mod shell;

// Single match over every action lives in `run`.
mod run;

#[derive(Debug)]
pub enum Action {
    Demo(demo::Args),
    Shell(shell::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub fn execute(self) -> anyhow::Result<()> {
        run::execute(self)
    }
}
