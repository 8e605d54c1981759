use stepwise_config::Config;

use super::init_conversation;

/// Strategy for listing stored session keys.
#[derive(Debug, Clone, Copy)]
pub struct SessionsStrategy;

impl super::CommandStrategy for SessionsStrategy {
    type Input = Config;

    async fn execute(&self, config: Self::Input) -> anyhow::Result<()> {
        let manager = init_conversation(&config).await?;
        let keys = manager.sessions().await?;

        if keys.is_empty() {
            println!("No stored sessions.");
        }
        for key in keys {
            let current = manager.current(&key).await?;
            println!(
                "{key}  node={} steps={}",
                current.node, current.memory.steps
            );
        }
        Ok(())
    }
}
