use clap::{value_parser, Arg, Command};
use std::path::PathBuf;

pub const CMD_SHELL: &str = "shell";
pub const ARG_SCRIPT: &str = "script";

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_SHELL)
        .about("Execute user commands read from a script or stdin")
        .arg(
            Arg::new(ARG_SCRIPT)
                .short('s')
                .long("script")
                .help("Read commands from this file instead of stdin")
                .env("USERAUTH_SCRIPT")
                .value_parser(value_parser!(PathBuf)),
        )
}
