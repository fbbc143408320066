//! User registration, password verification and session tracking.
//!
//! Leaf first: [`hasher`] digests passwords, [`user`] holds the records,
//! [`directory`] owns them, and [`service`] drives register/login/logout on top.

pub mod directory;
pub mod hasher;
pub mod outcome;
pub mod service;
pub mod session;
pub mod user;

pub use directory::Directory;
pub use hasher::{hash_password, verify_password};
pub use outcome::{
    CurrentUserOutcome, DeleteOutcome, LoginOutcome, LogoutOutcome, RegisterOutcome, UserListing,
};
pub use service::AuthService;
pub use session::generate_session_token;
pub use user::{User, UserId, UserKind, UserView};
