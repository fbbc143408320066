//! In-memory user directory.
//!
//! Users are kept in insertion order. The directory itself does not enforce
//! unique usernames; [`AuthService::register`](super::AuthService::register)
//! checks before creating.
//!
//! `list_users` and `delete_user` are the administrator operations. They act on
//! the whole directory and do not check who is calling.

use secrecy::SecretString;
use tracing::{debug, info, instrument};

use super::outcome::{DeleteOutcome, UserListing};
use super::user::{User, UserId, UserKind};

#[derive(Debug, Default)]
pub struct Directory {
    users: Vec<User>,
    next_id: u64,
}

impl Directory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a user and append it to the directory.
    ///
    /// Always succeeds; no format checks are applied to the username or email.
    #[instrument(skip_all, fields(username = %username.as_ref()))]
    pub fn create(
        &mut self,
        username: impl AsRef<str>,
        email: impl Into<String>,
        password: &SecretString,
        kind: UserKind,
    ) -> &User {
        let id = UserId(self.next_id);
        self.next_id += 1;

        let user = User::new(
            id,
            username.as_ref().to_string(),
            email.into(),
            password,
            kind,
        );
        self.users.push(user);

        debug!(user_id = %id, total = self.users.len(), "user appended to directory");

        &self.users[self.users.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut User> {
        self.users.iter_mut()
    }

    #[must_use]
    pub fn contains_username(&self, username: &str) -> bool {
        self.users.iter().any(|user| user.username() == username)
    }

    /// First user with an exactly matching (case sensitive) username.
    #[must_use]
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username() == username)
    }

    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id() == id)
    }

    /// Describe every user in insertion order.
    #[must_use]
    pub fn list_users(&self) -> UserListing {
        UserListing::from_users(self.users.iter())
    }

    /// Remove the first user whose username matches exactly.
    #[instrument(skip(self))]
    pub fn delete_user(&mut self, username: &str) -> DeleteOutcome {
        match self.users.iter().position(|user| user.username() == username) {
            Some(index) => {
                let removed = self.users.remove(index);
                info!(user_id = %removed.id(), "user deleted");
                DeleteOutcome::Deleted(username.to_string())
            }
            None => {
                debug!("no user to delete");
                DeleteOutcome::NotFound(username.to_string())
            }
        }
    }
}
