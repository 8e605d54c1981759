use stepwise_config::Config;

use super::init_conversation;

#[derive(Debug, Clone)]
pub struct ResetInput {
    pub config: Config,
    pub session: String,
}

/// Strategy for clearing a session back to the main menu.
#[derive(Debug, Clone, Copy)]
pub struct ResetStrategy;

impl super::CommandStrategy for ResetStrategy {
    type Input = ResetInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let manager = init_conversation(&input.config).await?;
        let memory = manager.reset(&input.session).await?;

        println!(
            "Session '{}' reset (node: {}, steps: {})",
            input.session, memory.node, memory.steps
        );
        Ok(())
    }
}
