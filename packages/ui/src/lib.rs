//! This crate contains all shared UI for the workspace.

mod users;
pub use users::{use_registrar, use_users, AppRegistrar, CallbackNavigator, StateSink, UsersProvider};

mod register;
pub use register::RegisterForm;
