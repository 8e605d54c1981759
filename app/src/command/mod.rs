//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use stepwise_config::Config;
use stepwise_conversation::{ConversationManager, DialogRouter};
use stepwise_session::SessionManager;
use tracing::info;

mod chat;
mod graph;
mod info;
mod init;
mod reset;
mod sessions;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use graph::{GraphInput, GraphStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use reset::{ResetInput, ResetStrategy};
pub use sessions::SessionsStrategy;
pub use version::VersionStrategy;

/// Build the conversation manager over file-backed sessions.
async fn init_conversation(
    config: &Config,
) -> anyhow::Result<ConversationManager<SessionManager>> {
    let session_dir = config.session_dir()?;
    let storage = SessionManager::new(session_dir)
        .await?
        .with_lifetime_hours(config.session.lifetime_hours);

    let router = DialogRouter::with_defaults()?;
    info!(
        "Loaded conversation graph with {} nodes",
        router.graph().len()
    );

    Ok(ConversationManager::new(router, storage))
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type, so
/// parameters are passed without runtime casting or boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
