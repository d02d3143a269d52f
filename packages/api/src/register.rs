//! # Registration submit flow
//!
//! [`Registrar::submit`] turns a [`RegistrationDraft`] into a dispatched
//! [`UserRecord`]:
//!
//! 1. refuse if another submit on the same registrar is still pending,
//! 2. required fields, whitespace and confirmation ([`RegistrationDraft::validate_required`]),
//! 3. ask the [`UserDirectory`] whether the username exists,
//! 4. lengths and image URL ([`RegistrationDraft::validate_rest`]),
//! 5. hash the password, build the record (default avatar, no reactions),
//! 6. dispatch [`UserEvent::Created`] to the [`UserSink`], navigate to [`HOME_ROUTE`].
//!
//! Any failure stops the flow and comes back as a [`RegistrationError`]; nothing is
//! dispatched and no navigation happens. Empty or mismatched input never reaches the
//! lookup; a taken username is reported ahead of length and URL problems.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use store::{UserEvent, UserRecord, UserSink};
use tracing::{debug, info, warn};

use crate::directory::UserDirectory;
use crate::error::RegistrationError;
use crate::password::hash_password;
use crate::settings::Settings;
use crate::validate::RegistrationDraft;

/// Where a successful registration lands.
pub const HOME_ROUTE: &str = "/";

/// Port to the router.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Submits registration drafts. Clones share the in-flight flag.
#[derive(Clone, Debug)]
pub struct Registrar<D> {
    directory: D,
    default_avatar_url: String,
    in_flight: Arc<AtomicBool>,
}

impl<D: UserDirectory> Registrar<D> {
    pub fn new(directory: D, settings: &Settings) -> Self {
        Self {
            directory,
            default_avatar_url: settings.default_avatar_url.clone(),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// True while a submit is waiting on the username lookup.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn submit<S, N>(
        &self,
        draft: &RegistrationDraft,
        sink: &mut S,
        navigator: &mut N,
    ) -> Result<(), RegistrationError>
    where
        S: UserSink,
        N: Navigator,
    {
        let _guard = InFlight::acquire(&self.in_flight)?;
        debug!(username = %draft.username, "registration submitted");

        draft.validate_required().inspect_err(|err| {
            debug!(username = %draft.username, %err, "registration rejected");
        })?;

        match self.directory.username_exists(&draft.username).await {
            Ok(false) => {}
            Ok(true) => {
                debug!(username = %draft.username, "username already taken");
                return Err(RegistrationError::UsernameTaken);
            }
            Err(err) => {
                warn!(username = %draft.username, error = %err, "username lookup failed");
                return Err(err.into());
            }
        }

        draft.validate_rest().inspect_err(|err| {
            debug!(username = %draft.username, %err, "registration rejected");
        })?;

        let record = self.build_record(draft)?;
        info!(username = %record.username, id = %record.id, "user registered");

        sink.dispatch(UserEvent::Created(record));
        navigator.navigate(HOME_ROUTE);
        Ok(())
    }

    fn build_record(&self, draft: &RegistrationDraft) -> Result<UserRecord, RegistrationError> {
        let password_hash = hash_password(&draft.password)?;
        let avatar = draft
            .profile_image()
            .unwrap_or(&self.default_avatar_url)
            .to_string();

        Ok(UserRecord::new(
            uuid::Uuid::new_v4().to_string(),
            draft.username.clone(),
            password_hash,
            avatar,
        ))
    }
}

/// Holds the in-flight flag for the lifetime of one submit.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, RegistrationError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| RegistrationError::SubmitInFlight)?;
        Ok(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
