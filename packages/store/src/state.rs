//! # Application state: registered users and the events that change them
//!
//! The registration form never mutates shared state directly. It emits a
//! [`UserEvent`] through a [`UserSink`], and whoever owns the state decides what to
//! do with it. [`UsersState`] is the reducer side: it applies events to the list of
//! known users.
//!
//! | Sink | Used by |
//! |------|---------|
//! | [`UsersState`] | Applies events in place (plain Rust owners). |
//! | [`crate::MemorySink`] | Records events for inspection in tests. |
//! | `ui::StateSink` | Writes into the Dioxus signal and persists in the background. |

use crate::models::UserRecord;

/// Something that happened to the set of users.
#[derive(Clone, Debug, PartialEq)]
pub enum UserEvent {
    /// A new user finished registration.
    Created(UserRecord),
}

/// Port through which state updates are emitted. Dispatch is fire-and-forget.
pub trait UserSink {
    fn dispatch(&mut self, event: UserEvent);
}

/// Users known to the running application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersState {
    pub users: Vec<UserRecord>,
}

impl UsersState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single event. The user list is append-only.
    pub fn apply(&mut self, event: UserEvent) {
        match event {
            UserEvent::Created(user) => self.users.push(user),
        }
    }

    pub fn find_by_username(&self, username: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserSink for UsersState {
    fn dispatch(&mut self, event: UserEvent) {
        self.apply(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserRecord {
        UserRecord::new(
            format!("id-{name}"),
            name.to_string(),
            "hash".to_string(),
            "https://example.com/a.png".to_string(),
        )
    }

    #[test]
    fn test_created_appends_in_order() {
        let mut state = UsersState::new();
        assert!(state.is_empty());

        state.apply(UserEvent::Created(user("alice")));
        state.apply(UserEvent::Created(user("bob")));

        assert_eq!(state.len(), 2);
        assert_eq!(state.users[0].username, "alice");
        assert_eq!(state.users[1].username, "bob");
    }

    #[test]
    fn test_find_by_username() {
        let mut state = UsersState::new();
        state.dispatch(UserEvent::Created(user("alice")));

        assert_eq!(state.find_by_username("alice").map(|u| u.id.as_str()), Some("id-alice"));
        assert!(state.find_by_username("Alice").is_none());
    }
}
