//! Storage backends for per-session dialog memory.

mod in_memory;
mod manager;

pub use in_memory::InMemorySessions;
pub use manager::{DEFAULT_LIFETIME_HOURS, SessionManager, StoredSession};
