//! # Userauth
//!
//! In-memory user registration and authentication.
//!
//! Users are either customers (with an address) or administrators (with an
//! admin level). Passwords are kept only as unsalted SHA-256 hex digests. A
//! successful login hands the user a random session token and makes it the
//! single current user of the [`auth::AuthService`]; logout clears both.
//!
//! Nothing is persisted and nothing is shared between threads. Expected
//! failures (duplicate username, bad credentials, no session, unknown user)
//! come back as outcome values, never as errors. Bad credentials report the
//! same outcome whether the username or the password was wrong.

pub mod auth;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
