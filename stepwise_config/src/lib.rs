mod schema;

pub use schema::{BotConfig, Config, ConfigSource, LoggingConfig, SessionConfig};
