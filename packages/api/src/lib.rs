//! # API crate: registration core shared by every frontend
//!
//! Everything the registration form needs that is not UI: the draft and its checks,
//! the error kinds the form displays, access to the remote users collection, password
//! hashing, settings, and the submit flow tying them together.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`validate`] | [`RegistrationDraft`] and the local checks (required fields, whitespace, lengths, image URL) |
//! | [`error`] | [`RegistrationError`] kinds with their form copy and the [`Field`]s they outline; [`DirectoryError`] |
//! | [`directory`] | [`UserDirectory`] port: [`HttpDirectory`] (reqwest) and [`MemoryDirectory`] |
//! | [`password`] | Argon2id hashing and verification |
//! | [`register`] | [`Registrar`] submit flow and the [`Navigator`] port |
//! | [`settings`] | Layered [`Settings`] (defaults, `registration.toml`, `REGISTRATION_*` env) |
//!
//! State updates leave through [`store::UserSink`]; navigation through [`Navigator`].
//! Neither is owned here, so the whole flow runs in tests without a browser.

pub mod directory;
pub mod error;
pub mod password;
pub mod register;
pub mod settings;
pub mod validate;

pub use directory::{HttpDirectory, MemoryDirectory, UserDirectory};
pub use error::{DirectoryError, Field, RegistrationError};
pub use password::{hash_password, verify_password};
pub use register::{Navigator, Registrar, HOME_ROUTE};
pub use settings::Settings;
pub use validate::{check_username_input, RegistrationDraft};

pub use store::{UserEvent, UserRecord, UserSink, UsersState};
