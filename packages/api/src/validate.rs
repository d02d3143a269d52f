//! Registration draft and the local (no network) checks run on it.

use std::fmt;

use crate::error::RegistrationError;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 30;
pub const MAX_USERNAME_LENGTH: usize = 30;

/// A profile image URL must mention one of these somewhere.
pub const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// Uncommitted form values.
#[derive(Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    /// Empty means "use the default avatar".
    pub profile_image_url: String,
}

// Keep plaintext passwords out of logs
impl fmt::Debug for RegistrationDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationDraft")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .field("profile_image_url", &self.profile_image_url)
            .finish()
    }
}

impl RegistrationDraft {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
            profile_image_url: String::new(),
        }
    }

    pub fn with_profile_image_url(mut self, url: impl Into<String>) -> Self {
        self.profile_image_url = url.into();
        self
    }

    /// The supplied image URL, or `None` when left empty.
    pub fn profile_image(&self) -> Option<&str> {
        Some(self.profile_image_url.as_str()).filter(|url| !url.is_empty())
    }

    /// Every local check, in submit order, ignoring the username lookup that sits
    /// between [`validate_required`](Self::validate_required) and
    /// [`validate_rest`](Self::validate_rest).
    pub fn validate(&self) -> Result<(), RegistrationError> {
        self.validate_required()?;
        self.validate_rest()
    }

    /// Checks that must pass before the username lookup is worth making:
    /// required fields, whitespace, matching confirmation.
    pub fn validate_required(&self) -> Result<(), RegistrationError> {
        if self.username.is_empty() || self.password.is_empty() || self.confirm_password.is_empty()
        {
            return Err(RegistrationError::RequiredFieldsMissing);
        }
        check_username_input(&self.username)?;

        if self.password != self.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        Ok(())
    }

    /// Checks run once the username is known to be free: lengths, then image URL.
    pub fn validate_rest(&self) -> Result<(), RegistrationError> {
        let password_len = self.password.chars().count();
        if password_len < MIN_PASSWORD_LENGTH {
            return Err(RegistrationError::PasswordTooShort);
        }
        if self.username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(RegistrationError::UsernameTooLong);
        }
        if password_len > MAX_PASSWORD_LENGTH {
            return Err(RegistrationError::PasswordTooLong);
        }

        if let Some(url) = self.profile_image() {
            if !is_image_url(url) {
                return Err(RegistrationError::InvalidImageUrl);
            }
        }
        Ok(())
    }
}

/// Check a username value as typed or pasted. Runs on every change.
pub fn check_username_input(username: &str) -> Result<(), RegistrationError> {
    if username.chars().any(char::is_whitespace) {
        return Err(RegistrationError::UsernameContainsSpace);
    }
    Ok(())
}

pub fn is_image_url(url: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| url.contains(ext))
}
