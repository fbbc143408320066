//! User records.
//!
//! Every user carries the same identity fields; what differs between a
//! customer and an administrator lives in [`UserKind`].

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::hasher::hash_password;

/// Stable handle for a user inside a [`Directory`](super::Directory).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct UserId(pub(crate) u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Variant specific data.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UserKind {
    Customer { address: String },
    Admin { admin_level: String },
}

impl UserKind {
    #[must_use]
    pub fn customer(address: impl Into<String>) -> Self {
        Self::Customer {
            address: address.into(),
        }
    }

    #[must_use]
    pub fn admin(admin_level: impl Into<String>) -> Self {
        Self::Admin {
            admin_level: admin_level.into(),
        }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin { .. })
    }

    /// Append the variant suffix to an already rendered base description.
    fn extend_description(&self, mut base: String) -> String {
        match self {
            Self::Customer { address } => {
                base.push_str(", Address: ");
                base.push_str(address);
            }
            Self::Admin { admin_level } => {
                base.push_str(", Admin Level: ");
                base.push_str(admin_level);
            }
        }
        base
    }
}

/// A registered user.
///
/// The plaintext password is hashed on construction and never kept.
/// `session_token` is `Some` only while the user is logged in.
#[derive(Clone)]
pub struct User {
    id: UserId,
    username: String,
    email: String,
    hashed_password: String,
    session_token: Option<String>,
    kind: UserKind,
}

impl User {
    pub(crate) fn new(
        id: UserId,
        username: String,
        email: String,
        password: &SecretString,
        kind: UserKind,
    ) -> Self {
        Self {
            id,
            username,
            email,
            hashed_password: hash_password(password.expose_secret()),
            session_token: None,
            kind,
        }
    }

    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn hashed_password(&self) -> &str {
        &self.hashed_password
    }

    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    #[must_use]
    pub const fn kind(&self) -> &UserKind {
        &self.kind
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.session_token.is_some()
    }

    pub(crate) fn start_session(&mut self, token: String) {
        self.session_token = Some(token);
    }

    pub(crate) fn end_session(&mut self) {
        self.session_token = None;
    }

    fn base_description(&self) -> String {
        format!("User: {}, e-mail: {}", self.username, self.email)
    }

    /// Human readable summary: the shared fields followed by the variant suffix.
    #[must_use]
    pub fn describe(&self) -> String {
        self.kind.extend_description(self.base_description())
    }

    /// Serializable view without the digest or session token.
    #[must_use]
    pub fn view(&self) -> UserView<'_> {
        UserView {
            username: &self.username,
            email: &self.email,
            kind: &self.kind,
            logged_in: self.is_logged_in(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("hashed_password", &"***")
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .field("kind", &self.kind)
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct UserView<'a> {
    pub username: &'a str,
    pub email: &'a str,
    #[serde(flatten)]
    pub kind: &'a UserKind,
    pub logged_in: bool,
}
