//! Registration, login and the single tracked session.
//!
//! Flow Overview:
//! 1) `register` rejects a username already present in the directory, otherwise
//!    creates the user.
//! 2) `login` scans the directory for a user whose name matches and whose digest
//!    verifies, issues a session token and remembers that user as current.
//! 3) `logout` clears the token and the current user together.
//!
//! Not safe for concurrent callers: the uniqueness check in `register` and the
//! insert that follows are separate steps. Wrap the service in a mutex if it is
//! ever shared across threads.

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument, warn};

use super::directory::Directory;
use super::hasher::verify_password;
use super::outcome::{CurrentUserOutcome, LoginOutcome, LogoutOutcome, RegisterOutcome};
use super::session::generate_session_token;
use super::user::{User, UserId, UserKind};

#[derive(Debug, Default)]
pub struct AuthService {
    directory: Directory,
    // Non-owning: resolved against the directory on every use.
    current_user: Option<UserId>,
}

impl AuthService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_directory(directory: Directory) -> Self {
        Self {
            directory,
            current_user: None,
        }
    }

    #[must_use]
    pub const fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Mutable access for the administrator operations.
    pub fn directory_mut(&mut self) -> &mut Directory {
        &mut self.directory
    }

    /// Register a new user of the given kind unless the username is taken.
    #[instrument(skip(self, kind, email, password))]
    pub fn register(
        &mut self,
        kind: UserKind,
        username: &str,
        email: &str,
        password: &SecretString,
    ) -> RegisterOutcome {
        if self.directory.contains_username(username) {
            debug!("username already taken");
            return RegisterOutcome::AlreadyExists(username.to_string());
        }

        let admin = kind.is_admin();
        self.directory.create(username, email, password, kind);
        info!(admin, "user registered");

        RegisterOutcome::Registered(username.to_string())
    }

    /// Authenticate by username and password and start a session.
    ///
    /// Unknown usernames and wrong passwords produce the same outcome.
    #[instrument(skip(self, password))]
    pub fn login(&mut self, username: &str, password: &SecretString) -> LoginOutcome {
        let matched = self.directory.iter_mut().find(|user| {
            user.username() == username
                && verify_password(user.hashed_password(), password.expose_secret())
        });

        let Some(user) = matched else {
            warn!("authentication failed");
            return LoginOutcome::InvalidCredentials;
        };

        user.start_session(generate_session_token());
        let id = user.id();
        let name = user.username().to_string();

        if let Some(previous) = self.current_user.replace(id) {
            if previous != id {
                debug!(previous = %previous, "replacing current user");
            }
        }
        info!(user_id = %id, "user authenticated");

        LoginOutcome::Authenticated(name)
    }

    /// End the current session, if any.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> LogoutOutcome {
        let Some(id) = self.current_user.take() else {
            debug!("logout without an active user");
            return LogoutOutcome::NoActiveUser;
        };

        match self.directory.get_mut(id) {
            Some(user) => {
                user.end_session();
                info!(user_id = %id, "user logged out");
                LogoutOutcome::LoggedOut
            }
            None => {
                warn!(user_id = %id, "current user no longer in directory");
                LogoutOutcome::NoActiveUser
            }
        }
    }

    /// Describe the logged in user.
    #[must_use]
    pub fn current_user(&self) -> CurrentUserOutcome {
        self.active_user()
            .map_or(CurrentUserOutcome::NoActiveUser, |user| {
                CurrentUserOutcome::Active(user.describe())
            })
    }

    /// The logged in user, if it still exists in the directory.
    #[must_use]
    pub fn active_user(&self) -> Option<&User> {
        self.current_user.and_then(|id| self.directory.get(id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::auth::outcome::{DeleteOutcome, INVALID_CREDENTIALS, NO_ACTIVE_USER};

    fn secret(password: &str) -> SecretString {
        SecretString::from(password.to_string())
    }

    fn seeded() -> AuthService {
        let mut service = AuthService::new();
        service.register(
            UserKind::customer("Addr 1"),
            "Dmitry",
            "d@x.com",
            &secret("password123"),
        );
        service.register(
            UserKind::admin("Super Admin"),
            "Mikhail",
            "m@x.com",
            &secret("admin123"),
        );
        service
    }

    #[test]
    fn register_new_user() {
        let mut service = AuthService::new();
        let outcome = service.register(
            UserKind::customer("Addr 1"),
            "Dmitry",
            "d@x.com",
            &secret("password123"),
        );
        assert_eq!(outcome, RegisterOutcome::Registered("Dmitry".to_string()));
        assert_eq!(service.directory().len(), 1);
    }

    #[test]
    fn register_duplicate_is_rejected_without_insert() {
        let mut service = seeded();
        let outcome = service.register(
            UserKind::admin("Other"),
            "Dmitry",
            "other@x.com",
            &secret("different"),
        );
        assert_eq!(
            outcome.to_string(),
            "User with name Dmitry already exists!"
        );
        assert_eq!(service.directory().len(), 2);
        assert_eq!(
            service
                .directory()
                .find_by_username("Dmitry")
                .map(User::email),
            Some("d@x.com")
        );
    }

    #[test]
    fn login_sets_token_and_current_user() {
        let mut service = seeded();
        let outcome = service.login("Dmitry", &secret("password123"));
        assert_eq!(
            outcome.to_string(),
            "Authentication of user Dmitry succeeded"
        );

        let user = service.active_user().unwrap();
        assert_eq!(user.username(), "Dmitry");
        assert!(user.session_token().is_some_and(|token| !token.is_empty()));

        let current = service.current_user().to_string();
        assert!(current.contains("Dmitry"));
        assert!(current.contains("Addr 1"));
    }

    #[test]
    fn login_failures_are_indistinguishable() {
        let mut service = seeded();
        let wrong_password = service.login("Dmitry", &secret("nope"));
        let unknown_user = service.login("Nobody", &secret("password123"));
        assert_eq!(wrong_password, unknown_user);
        assert_eq!(wrong_password.to_string(), INVALID_CREDENTIALS);
        assert!(service.active_user().is_none());
        assert!(service
            .directory()
            .iter()
            .all(|user| user.session_token().is_none()));
    }

    #[test]
    fn login_does_not_accept_the_digest_as_password() {
        let mut service = seeded();
        let digest = service
            .directory()
            .find_by_username("Dmitry")
            .map(|user| user.hashed_password().to_string())
            .unwrap();
        assert!(!service.login("Dmitry", &secret(&digest)).is_authenticated());
    }

    #[test]
    fn each_login_issues_a_fresh_token() {
        let mut service = seeded();
        service.login("Dmitry", &secret("password123"));
        let first = service
            .active_user()
            .and_then(User::session_token)
            .map(str::to_string)
            .unwrap();
        service.login("Dmitry", &secret("password123"));
        let second = service
            .active_user()
            .and_then(User::session_token)
            .unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn second_login_replaces_current_user() {
        let mut service = seeded();
        service.login("Dmitry", &secret("password123"));
        service.login("Mikhail", &secret("admin123"));

        assert_eq!(
            service.active_user().map(User::username),
            Some("Mikhail")
        );
        // The earlier session is not revoked.
        assert!(service
            .directory()
            .find_by_username("Dmitry")
            .is_some_and(User::is_logged_in));
    }

    #[test]
    fn logout_clears_token_and_current_user() {
        let mut service = seeded();
        service.login("Dmitry", &secret("password123"));

        assert_eq!(service.logout(), LogoutOutcome::LoggedOut);
        assert_eq!(service.current_user(), CurrentUserOutcome::NoActiveUser);
        assert_eq!(service.current_user().to_string(), NO_ACTIVE_USER);
        assert!(service
            .directory()
            .find_by_username("Dmitry")
            .is_some_and(|user| user.session_token().is_none()));
    }

    #[test]
    fn logout_without_session() {
        let mut service = seeded();
        assert_eq!(service.logout(), LogoutOutcome::NoActiveUser);
    }

    #[test]
    fn deleting_current_user_ends_the_session_view() {
        let mut service = seeded();
        service.login("Dmitry", &secret("password123"));

        let outcome = service.directory_mut().delete_user("Dmitry");
        assert_eq!(outcome, DeleteOutcome::Deleted("Dmitry".to_string()));

        assert_eq!(service.current_user(), CurrentUserOutcome::NoActiveUser);
        assert_eq!(service.logout(), LogoutOutcome::NoActiveUser);
    }

    #[test]
    fn deleted_username_can_register_again() {
        let mut service = seeded();
        service.directory_mut().delete_user("Dmitry");
        let outcome = service.register(
            UserKind::customer("Addr 2"),
            "Dmitry",
            "d2@x.com",
            &secret("password456"),
        );
        assert!(outcome.is_registered());
        assert!(!service.login("Dmitry", &secret("password123")).is_authenticated());
        assert!(service.login("Dmitry", &secret("password456")).is_authenticated());
    }

    #[test]
    fn with_directory_uses_existing_users() {
        let mut directory = Directory::new();
        directory.create(
            "Mikhail",
            "m@x.com",
            &secret("admin123"),
            UserKind::admin("Super Admin"),
        );
        let mut service = AuthService::with_directory(directory);
        assert!(service.login("Mikhail", &secret("admin123")).is_authenticated());
    }
}
