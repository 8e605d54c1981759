use stepwise_config::Config;
use stepwise_core::ConversationGraph;
use tracing::info;

use super::init_conversation;

/// Strategy for displaying configuration information.
///
/// Outputs the config file location, bot banner, session storage settings,
/// logging level and a summary of the conversation graph.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Config;

    async fn execute(&self, config: Self::Input) -> anyhow::Result<()> {
        println!("=== stepwise Configuration ===\n");

        let config_path = Config::config_path()?;
        println!("Config File:");
        if config_path.exists() {
            println!("  Path: {}", config_path.display());
        } else {
            println!("  Path: {} (not created, using defaults)", config_path.display());
        }
        println!();

        println!("Bot:");
        println!("  Name: {}", config.bot.name);
        println!("  Quote: {}", config.bot.quote);
        println!();

        println!("Sessions:");
        println!("  Directory: {}", config.session_dir()?.display());
        if config.session.lifetime_hours == 0 {
            println!("  Lifetime: unlimited");
        } else {
            println!("  Lifetime: {} hours", config.session.lifetime_hours);
        }

        info!("Reading session directory");
        match init_conversation(&config).await {
            Ok(manager) => match manager.sessions().await {
                Ok(keys) => println!("  Stored: {}", keys.len()),
                Err(e) => println!("  Stored: unreadable ({e})"),
            },
            Err(e) => {
                println!("  Status: unavailable");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);
        println!();

        let graph = ConversationGraph::builtin();
        println!("Conversation Graph:");
        println!("  Nodes: {}", graph.len());
        println!("  Dangling References: {}", graph.dangling_references().len());

        Ok(())
    }
}
