//! # Domain models for registered users
//!
//! Defines the record produced by a successful registration and stored in the
//! application state. The type is `Serialize + Deserialize` so the same value can be
//! posted to the users collection and read back from it.
//!
//! ## Wire format
//!
//! The users collection speaks camel-cased JSON:
//!
//! ```json
//! {
//!   "id": "0b1c…",
//!   "username": "alice",
//!   "password": "$argon2id$v=19$m=19456,t=2,p=1$…",
//!   "profilePictureURL": "https://…/avatar.jpg",
//!   "reactions": []
//! }
//! ```
//!
//! `password` always holds a PHC-format hash, never the plaintext.

use serde::{Deserialize, Serialize};

/// A registered user as held in application state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque random identifier.
    pub id: String,
    pub username: String,
    /// PHC-format password hash.
    pub password: String,
    #[serde(rename = "profilePictureURL")]
    pub profile_picture_url: String,
    /// Ids of the posts this user reacted to, oldest first.
    #[serde(default)]
    pub reactions: Vec<String>,
}

impl UserRecord {
    /// Build a freshly registered user with no reactions yet.
    pub fn new(id: String, username: String, password_hash: String, profile_picture_url: String) -> Self {
        Self {
            id,
            username,
            password: password_hash,
            profile_picture_url,
            reactions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_reactions() {
        let user = UserRecord::new(
            "id-1".to_string(),
            "alice".to_string(),
            "$argon2id$hash".to_string(),
            "https://example.com/a.png".to_string(),
        );
        assert!(user.reactions.is_empty());
        assert_eq!(user.password, "$argon2id$hash");
    }

    #[test]
    fn test_json_uses_collection_field_names() {
        let user = UserRecord::new(
            "id-1".to_string(),
            "alice".to_string(),
            "hash".to_string(),
            "https://example.com/a.png".to_string(),
        );
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["profilePictureURL"], "https://example.com/a.png");
        assert_eq!(json["reactions"], serde_json::json!([]));
        assert!(json.get("profile_picture_url").is_none());
    }

    #[test]
    fn test_missing_reactions_defaults_to_empty() {
        let user: UserRecord = serde_json::from_str(
            r#"{"id":"x","username":"bob","password":"h","profilePictureURL":"u"}"#,
        )
        .unwrap();
        assert_eq!(user.username, "bob");
        assert!(user.reactions.is_empty());
    }
}
