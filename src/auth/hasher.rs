//! Password digests.
//!
//! Passwords are stored as the lowercase hex SHA-256 of their UTF-8 bytes. There
//! is no salt and no work factor: identical passwords produce identical digests.

use sha2::{Digest, Sha256};

/// Length of a hex encoded SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Hash a plaintext password into a lowercase hex digest.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a candidate plaintext against a stored digest.
///
/// The candidate is hashed and compared to `stored_digest` with plain string
/// equality.
#[must_use]
pub fn verify_password(stored_digest: &str, candidate: &str) -> bool {
    hash_password(candidate) == stored_digest
}
