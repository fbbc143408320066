//! Reference scenario: two registrations, a listing, logins, then logout.

use std::io::{self, Write};

use anyhow::Result;
use secrecy::SecretString;
use tracing::info;

use crate::auth::{AuthService, UserKind};
use crate::cli::actions::printer::Printer;
use crate::cli::commands::output::OutputFormat;

#[derive(Debug)]
pub struct Args {
    pub format: OutputFormat,
}

/// Run the scenario against a fresh service, printing to stdout.
/// # Errors
/// Returns an error if writing to stdout fails.
pub fn execute(args: &Args) -> Result<()> {
    info!("running demo scenario");
    let stdout = io::stdout();
    let mut printer = Printer::new(stdout.lock(), args.format);
    run(&mut AuthService::new(), &mut printer)
}

/// # Errors
/// Returns an error if the printer fails to write.
pub fn run<W: Write>(service: &mut AuthService, printer: &mut Printer<W>) -> Result<()> {
    printer.outcome(&service.register(
        UserKind::customer("Butlerova 17, floor 3"),
        "Dmitry",
        "dmitry@example.com",
        &SecretString::from("password123".to_string()),
    ))?;
    printer.outcome(&service.register(
        UserKind::admin("Super Admin"),
        "Mikhail",
        "mikhail@example.com",
        &SecretString::from("admin123".to_string()),
    ))?;
    printer.blank()?;

    printer.listing(service.directory())?;
    printer.blank()?;

    printer.outcome(&service.login("Dmitry", &SecretString::from("password123".to_string())))?;
    printer.outcome(&service.login("Mikhail", &SecretString::from("admin123".to_string())))?;
    printer.blank()?;

    printer.outcome(&service.current_user())?;
    printer.blank()?;

    printer.outcome(&service.logout())?;
    printer.blank()?;

    printer.outcome(&service.current_user())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn demo_text_output() -> Result<()> {
        let mut service = AuthService::new();
        let mut printer = Printer::new(Vec::new(), OutputFormat::Text);
        run(&mut service, &mut printer)?;
        let output = String::from_utf8(printer.into_inner())?;

        let expected = "\
User with name Dmitry has been registered
User with name Mikhail has been registered

--- User list: ---
User: Dmitry, e-mail: dmitry@example.com, Address: Butlerova 17, floor 3
User: Mikhail, e-mail: mikhail@example.com, Admin Level: Super Admin
--- End of list ---

Authentication of user Dmitry succeeded
Authentication of user Mikhail succeeded

User: Mikhail, e-mail: mikhail@example.com, Admin Level: Super Admin

User logged out successfully

No active user in the system
";
        assert_eq!(output, expected);
        Ok(())
    }

    #[test]
    fn demo_leaves_first_session_open() -> Result<()> {
        let mut service = AuthService::new();
        let mut printer = Printer::new(io::sink(), OutputFormat::Json);
        run(&mut service, &mut printer)?;

        let dmitry = service.directory().find_by_username("Dmitry").unwrap();
        let mikhail = service.directory().find_by_username("Mikhail").unwrap();
        assert!(dmitry.is_logged_in());
        assert!(!mikhail.is_logged_in());
        Ok(())
    }
}
