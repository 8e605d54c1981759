//! Chat with the coach, one message or interactively.

use stepwise_config::Config;
use stepwise_conversation::Banner;
use tracing::info;

use super::init_conversation;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    pub config: Config,
    /// Session key to load and store memory under
    pub session: String,
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
    /// Print the reply envelope as JSON
    pub json: bool,
}

/// Strategy for executing the Chat command.
///
/// With a message, routes it once and prints the reply. Without one, runs
/// the interactive loop on the same session.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let manager = init_conversation(&input.config).await?;
        info!("Using session: {}", input.session);

        if let Some(msg) = input.message {
            let reply = manager.process_message(&input.session, &msg).await?;

            if input.json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                println!("{}", reply.text);
                for (i, option) in reply.options.iter().enumerate() {
                    println!("  {}. {}", i + 1, option.text);
                }
            }
        } else {
            let banner = Banner {
                bot_name: input.config.bot.name.clone(),
                quote: input.config.bot.quote.clone(),
            };
            manager.run_interactive(&input.session, &banner).await?;
        }

        Ok(())
    }
}
