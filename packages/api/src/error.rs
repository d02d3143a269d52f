//! # Error kinds for registration and the users collection
//!
//! [`RegistrationError`] is what the form shows. Each variant has one fixed,
//! user-facing message (its `Display`) and knows which inputs it pertains to via
//! [`RegistrationError::fields`], so the UI never has to sniff message text to decide
//! which input to outline.
//!
//! [`DirectoryError`] is what a [`crate::UserDirectory`] returns when the users
//! collection cannot answer. The registrar turns it into
//! [`RegistrationError::Network`], which is distinct from
//! [`RegistrationError::UsernameTaken`] so a flaky connection never reads as
//! "taken" and the user can retry.

use thiserror::Error;

/// An input of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
    ConfirmPassword,
    ProfileImageUrl,
}

/// Why a registration attempt was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Required fields cannot be empty!")]
    RequiredFieldsMissing,

    #[error("Username cannot contain space")]
    UsernameContainsSpace,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password should contain at least 8 characters")]
    PasswordTooShort,

    #[error("Username too long")]
    UsernameTooLong,

    #[error("Password too long")]
    PasswordTooLong,

    #[error("URL is invalid, please try another")]
    InvalidImageUrl,

    /// The username lookup failed in transit. Carries the underlying description
    /// for logs; the message shown to the user stays generic.
    #[error("Could not check username availability, please try again")]
    Network(String),

    #[error("Could not secure password: {0}")]
    Hashing(String),

    #[error("Registration already in progress")]
    SubmitInFlight,
}

impl RegistrationError {
    /// Inputs this error is about. Empty when no single input is at fault.
    pub fn fields(&self) -> &'static [Field] {
        use Field::*;
        match self {
            Self::RequiredFieldsMissing => &[Username, Password, ConfirmPassword],
            Self::UsernameContainsSpace | Self::UsernameTaken | Self::UsernameTooLong => {
                &[Username]
            }
            Self::PasswordMismatch | Self::PasswordTooShort | Self::PasswordTooLong => {
                &[Password, ConfirmPassword]
            }
            Self::InvalidImageUrl => &[ProfileImageUrl],
            Self::Network(_) | Self::Hashing(_) | Self::SubmitInFlight => &[],
        }
    }

    pub fn pertains_to(&self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    /// Whether submitting again unchanged may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::SubmitInFlight)
    }
}

/// Failure talking to the users collection.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("users collection answered with status {0}")]
    Status(u16),

    #[error("users collection unavailable: {0}")]
    Unavailable(String),
}

impl From<DirectoryError> for RegistrationError {
    fn from(err: DirectoryError) -> Self {
        RegistrationError::Network(err.to_string())
    }
}
