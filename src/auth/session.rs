//! Session tokens handed out on login.

use uuid::Uuid;

/// Create a fresh opaque session token (random UUID v4, 122 random bits).
#[must_use]
pub fn generate_session_token() -> String {
    Uuid::new_v4().to_string()
}
