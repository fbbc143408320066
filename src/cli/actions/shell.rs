//! Line oriented command interpreter over a single [`AuthService`].
//!
//! One command per line; blank lines and `#` comments are skipped. A line that
//! fails to parse is reported and the next line is processed.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use secrecy::SecretString;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::auth::{AuthService, UserKind};
use crate::cli::actions::printer::Printer;
use crate::cli::commands::output::OutputFormat;

pub const HELP: &str = "\
register customer <username> <email> <password> <address...>
register admin <username> <email> <password> <admin level...>
login <username> <password>
logout
whoami
list
delete <username>
help
exit | quit";

#[derive(Debug)]
pub struct Args {
    pub format: OutputFormat,
    pub script: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("{command}: missing argument <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("{command}: unexpected argument {argument}")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },
    #[error("unknown user kind: {0} (expected customer or admin)")]
    UnknownKind(String),
    #[error("line {0} is not valid UTF-8")]
    InvalidEncoding(usize),
}

#[derive(Debug)]
pub enum ShellCommand {
    Register {
        kind: UserKind,
        username: String,
        email: String,
        password: SecretString,
    },
    Login {
        username: String,
        password: SecretString,
    },
    Logout,
    WhoAmI,
    List,
    Delete {
        username: String,
    },
    Help,
    Exit,
}

impl ShellCommand {
    /// Parse one input line. `Ok(None)` for blank lines and comments.
    ///
    /// # Errors
    /// Returns a [`CommandError`] when the line is not a valid command.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };

        let command = match verb {
            "register" => {
                let kind = required(&mut words, "register", "kind")?;
                let username = required(&mut words, "register", "username")?.to_string();
                let email = required(&mut words, "register", "email")?.to_string();
                let password = SecretString::from(
                    required(&mut words, "register", "password")?.to_string(),
                );
                let rest: Vec<&str> = words.collect();

                let kind = match kind {
                    "customer" => UserKind::customer(trailing(&rest, "address")?),
                    "admin" => UserKind::admin(trailing(&rest, "admin level")?),
                    other => return Err(CommandError::UnknownKind(other.to_string())),
                };

                Self::Register {
                    kind,
                    username,
                    email,
                    password,
                }
            }
            "login" => {
                let username = required(&mut words, "login", "username")?.to_string();
                let password =
                    SecretString::from(required(&mut words, "login", "password")?.to_string());
                no_more(&mut words, "login")?;
                Self::Login { username, password }
            }
            "delete" => {
                let username = required(&mut words, "delete", "username")?.to_string();
                no_more(&mut words, "delete")?;
                Self::Delete { username }
            }
            "logout" => {
                no_more(&mut words, "logout")?;
                Self::Logout
            }
            "whoami" => {
                no_more(&mut words, "whoami")?;
                Self::WhoAmI
            }
            "list" => {
                no_more(&mut words, "list")?;
                Self::List
            }
            "help" => {
                no_more(&mut words, "help")?;
                Self::Help
            }
            "exit" | "quit" => {
                no_more(&mut words, "exit")?;
                Self::Exit
            }
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    words
        .next()
        .ok_or(CommandError::MissingArgument { command, argument })
}

// Variant fields may contain spaces, so they take the rest of the line.
fn trailing(rest: &[&str], argument: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "register",
            argument,
        });
    }
    Ok(rest.join(" "))
}

fn no_more<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<(), CommandError> {
    match words.next() {
        Some(argument) => Err(CommandError::UnexpectedArgument {
            command,
            argument: argument.to_string(),
        }),
        None => Ok(()),
    }
}

/// Run commands from the script file, or stdin when no script is given.
/// # Errors
/// Returns an error if the script cannot be opened, or reading/writing fails.
#[instrument]
pub fn execute(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut printer = Printer::new(stdout.lock(), args.format);
    let mut service = AuthService::new();

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            run(BufReader::new(file), &mut service, &mut printer)
        }
        None => run(io::stdin().lock(), &mut service, &mut printer),
    }
}

/// Lines that are not valid UTF-8 are reported like any other bad line.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn run<R: BufRead, W: Write>(
    input: R,
    service: &mut AuthService,
    printer: &mut Printer<W>,
) -> Result<()> {
    for (index, raw) in input.split(b'\n').enumerate() {
        let raw = raw.context("failed to read command")?;
        let parsed = std::str::from_utf8(&raw)
            .map_err(|_| CommandError::InvalidEncoding(index + 1))
            .and_then(ShellCommand::parse);
        let command = match parsed {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                debug!(line = index + 1, "rejected input: {err}");
                printer.note("error", &err.to_string())?;
                continue;
            }
        };

        if matches!(command, ShellCommand::Exit) {
            info!(line = index + 1, "exit requested");
            break;
        }
        dispatch(command, service, printer)?;
    }

    Ok(())
}

fn dispatch<W: Write>(
    command: ShellCommand,
    service: &mut AuthService,
    printer: &mut Printer<W>,
) -> Result<()> {
    match command {
        ShellCommand::Register {
            kind,
            username,
            email,
            password,
        } => printer.outcome(&service.register(kind, &username, &email, &password)),
        ShellCommand::Login { username, password } => {
            printer.outcome(&service.login(&username, &password))
        }
        ShellCommand::Logout => printer.outcome(&service.logout()),
        ShellCommand::WhoAmI => printer.outcome(&service.current_user()),
        ShellCommand::List => printer.listing(service.directory()),
        ShellCommand::Delete { username } => {
            printer.outcome(&service.directory_mut().delete_user(&username))
        }
        ShellCommand::Help => printer.note("help", HELP),
        ShellCommand::Exit => Ok(()),
    }
}
