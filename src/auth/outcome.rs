//! Result values for directory and session operations.
//!
//! Expected conditions (duplicate names, bad credentials, no session, unknown
//! user) are reported here rather than through `Err`. The `Display` impls
//! render the messages shown to callers.

use std::fmt;

use serde::Serialize;

use super::user::User;

pub const NO_ACTIVE_USER: &str = "No active user in the system";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const LOGGED_OUT: &str = "User logged out successfully";
pub const LIST_HEADER: &str = "--- User list: ---";
pub const LIST_FOOTER: &str = "--- End of list ---";

/// Outcome of a registration request.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "username", rename_all = "snake_case")]
pub enum RegisterOutcome {
    Registered(String),
    AlreadyExists(String),
}

impl RegisterOutcome {
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        matches!(self, Self::Registered(_))
    }
}

impl fmt::Display for RegisterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registered(username) => {
                write!(f, "User with name {username} has been registered")
            }
            Self::AlreadyExists(username) => {
                write!(f, "User with name {username} already exists!")
            }
        }
    }
}

/// Outcome of a login attempt.
///
/// A wrong password and an unknown username both map to `InvalidCredentials`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "username", rename_all = "snake_case")]
pub enum LoginOutcome {
    Authenticated(String),
    InvalidCredentials,
}

impl LoginOutcome {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

impl fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated(username) => {
                write!(f, "Authentication of user {username} succeeded")
            }
            Self::InvalidCredentials => f.write_str(INVALID_CREDENTIALS),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LogoutOutcome {
    LoggedOut,
    NoActiveUser,
}

impl fmt::Display for LogoutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggedOut => f.write_str(LOGGED_OUT),
            Self::NoActiveUser => f.write_str(NO_ACTIVE_USER),
        }
    }
}

/// Outcome of a current user query; `Active` carries the user's description.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "description", rename_all = "snake_case")]
pub enum CurrentUserOutcome {
    Active(String),
    NoActiveUser,
}

impl fmt::Display for CurrentUserOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active(description) => f.write_str(description),
            Self::NoActiveUser => f.write_str(NO_ACTIVE_USER),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "username", rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted(String),
    NotFound(String),
}

impl DeleteOutcome {
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted(_))
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deleted(username) => write!(f, "User {username} deleted"),
            Self::NotFound(username) => write!(f, "User {username} not found"),
        }
    }
}

/// Snapshot of the directory in insertion order.
///
/// `Display` renders the header, one description per line, then the footer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserListing {
    descriptions: Vec<String>,
}

impl UserListing {
    pub(crate) fn from_users<'a>(users: impl Iterator<Item = &'a User>) -> Self {
        Self {
            descriptions: users.map(User::describe).collect(),
        }
    }

    #[must_use]
    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    #[must_use]
    pub const fn header(&self) -> &'static str {
        LIST_HEADER
    }

    /// Terminal marker printed after the last user.
    #[must_use]
    pub const fn footer(&self) -> &'static str {
        LIST_FOOTER
    }
}

impl fmt::Display for UserListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for description in &self.descriptions {
            writeln!(f, "{description}")?;
        }
        f.write_str(self.footer())
    }
}
