//! Client settings: where the users collection lives and which avatar new users get.
//!
//! Layered with the `config` crate, later sources winning:
//! built-in defaults, then `registration.toml` (optional), then `REGISTRATION_*`
//! environment variables (`REGISTRATION_USERS_URL`, `REGISTRATION_DEFAULT_AVATAR_URL`).

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_USERS_URL: &str = "http://localhost:3500/users";
pub const DEFAULT_AVATAR_URL: &str =
    "https://t3.ftcdn.net/jpg/03/53/11/00/360_F_353110097_nbpmfn9iHlxef4EDIhXB1tdTD0lcWhG9.jpg";

const CONFIG_FILE: &str = "registration.toml";
const ENV_PREFIX: &str = "REGISTRATION";

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Settings {
    /// Users collection endpoint, queried with `?username=` and posted to.
    pub users_url: String,
    /// Profile picture given to users who leave the URL empty.
    pub default_avatar_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_URL.into(),
            default_avatar_url: DEFAULT_AVATAR_URL.into(),
        }
    }
}

impl Settings {
    /// Load from defaults, `registration.toml` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        defaults()?
            .add_source(
                File::with_name(CONFIG_FILE)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse a TOML document on top of the defaults.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::from_str(s, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("users_url", DEFAULT_USERS_URL)?
        .set_default("default_avatar_url", DEFAULT_AVATAR_URL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_empty_toml_is_default() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_toml_overrides_single_key() {
        let settings = Settings::from_toml(r#"users_url = "https://api.example.com/users""#).unwrap();
        assert_eq!(settings.users_url, "https://api.example.com/users");
        assert_eq!(settings.default_avatar_url, DEFAULT_AVATAR_URL);
    }

    #[test]
    fn test_environment_overrides() {
        set_var("REGISTRATION_USERS_URL", "http://users.test/users");
        let settings = Settings::load().unwrap();
        assert_eq!(settings.users_url, "http://users.test/users");
        assert_eq!(settings.default_avatar_url, DEFAULT_AVATAR_URL);
    }
}
