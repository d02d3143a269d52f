pub mod models;
pub mod state;

mod memory;
pub use memory::MemorySink;

pub use models::UserRecord;
pub use state::{UserEvent, UserSink, UsersState};
