#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use stepwise_config::{Config, ConfigSource};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    ChatInput, ChatStrategy, CommandStrategy, GraphInput, GraphStrategy, InfoStrategy,
    InitStrategy, ResetInput, ResetStrategy, SessionsStrategy, VersionStrategy,
};

const DEFAULT_SESSION: &str = "cli:default";

#[derive(Parser)]
#[command(name = "stepwise")]
#[command(about = "stepwise rule-based habit and confidence coach", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the coach
    Chat {
        /// Session key to use
        #[arg(short = 's', long, default_value = DEFAULT_SESSION)]
        session: String,

        /// Start a new session with a generated key
        #[arg(long, conflicts_with = "session")]
        new: bool,

        /// Single message to send
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// Print the reply as JSON (with --message)
        #[arg(long, requires = "message")]
        json: bool,
    },
    /// Reset a session to the main menu
    Reset {
        /// Session key to reset
        #[arg(short = 's', long, default_value = DEFAULT_SESSION)]
        session: String,
    },
    /// List stored sessions
    Sessions,
    /// Print the conversation graph
    Graph {
        /// Only report option targets that do not resolve
        #[arg(long)]
        check: bool,

        /// Show a single node
        #[arg(short = 'n', long)]
        node: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, source) = Config::load_or_default()?;
    init_tracing(&config.logging.level)?;
    match &source {
        ConfigSource::File(path) => debug!("Loaded config from {}", path.display()),
        ConfigSource::Defaults(path) => {
            info!("No config at {}, using defaults", path.display());
        }
    }

    match cli.command {
        Commands::Chat {
            session,
            new,
            message,
            json,
        } => {
            let session = if new {
                uuid::Uuid::now_v7().to_string()
            } else {
                session
            };
            ChatStrategy
                .execute(ChatInput {
                    config,
                    session,
                    message,
                    json,
                })
                .await
        }
        Commands::Reset { session } => ResetStrategy.execute(ResetInput { config, session }).await,
        Commands::Sessions => SessionsStrategy.execute(config).await,
        Commands::Graph { check, node } => GraphStrategy.execute(GraphInput { check, node }).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(config).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
