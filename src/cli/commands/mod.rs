pub mod logging;
pub mod output;
pub mod shell;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    ColorChoice, Command,
};

pub const CMD_DEMO: &str = "demo";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("userauth")
        .about("In-memory user registration and authentication")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(CMD_DEMO)
                .about("Register a customer and an admin, then walk through login and logout"),
        )
        .subcommand(shell::command());

    let command = output::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "userauth");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("In-memory user registration and authentication".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_subcommand_required() {
        let result = new().try_get_matches_from(vec!["userauth"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_shell_script_arg() {
        temp_env::with_vars([("USERAUTH_SCRIPT", None::<&str>)], || {
            let matches = new().get_matches_from(vec![
                "userauth",
                "shell",
                "--script",
                "/tmp/users.txt",
            ]);
            let script = matches
                .subcommand_matches(shell::CMD_SHELL)
                .and_then(|sub| sub.get_one::<PathBuf>(shell::ARG_SCRIPT))
                .cloned();
            assert_eq!(script, Some(PathBuf::from("/tmp/users.txt")));
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("USERAUTH_SCRIPT", Some("/tmp/env-script.txt")),
                ("USERAUTH_FORMAT", Some("json")),
                ("USERAUTH_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["userauth", "shell"]);
                assert_eq!(
                    matches
                        .get_one::<String>(output::ARG_FORMAT)
                        .map(String::as_str),
                    Some("json")
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
                let script = matches
                    .subcommand_matches(shell::CMD_SHELL)
                    .and_then(|sub| sub.get_one::<PathBuf>(shell::ARG_SCRIPT))
                    .cloned();
                assert_eq!(script, Some(PathBuf::from("/tmp/env-script.txt")));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("USERAUTH_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["userauth", "demo"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(u8::try_from(index).unwrap_or(u8::MAX))
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars([("USERAUTH_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["userauth".to_string(), "demo".to_string()];

                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(u8::try_from(index).unwrap_or(u8::MAX))
                );
            });
        }
    }
}
