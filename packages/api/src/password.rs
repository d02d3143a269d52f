//! # Password hashing: Argon2id
//!
//! - [`hash_password`]: generates a random salt via [`OsRng`], hashes the plaintext
//!   with the default Argon2id parameters, and returns a PHC-format string
//!   (e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`). The parameters are fixed, so every
//!   record carries the same work factor.
//! - [`verify_password`]: parses a PHC-format hash and checks a plaintext against it.
//!   Returns `Ok(true)` on match, `Ok(false)` on mismatch, `Err` if the hash is malformed.
//!
//! The users collection stores whatever the client sends, so the hash is computed
//! here before the record leaves the form.
//!
//! TODO: move hashing behind the users endpoint once it accepts plaintext over TLS;
//! a client-side hash is itself the credential.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::RegistrationError;

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, RegistrationError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| RegistrationError::Hashing(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, RegistrationError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| RegistrationError::Hashing(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
