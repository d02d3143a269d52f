use std::sync::{Arc, Mutex};

use crate::state::{UserEvent, UserSink};

/// In-memory UserSink that records every dispatched event, for tests and headless use.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<UserEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events dispatched so far, oldest first.
    pub fn events(&self) -> Vec<UserEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl UserSink for MemorySink {
    fn dispatch(&mut self, event: UserEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
