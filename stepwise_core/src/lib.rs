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

use async_trait::async_trait;

pub mod graph;
pub mod matcher;
pub mod memory;
pub mod normalize;

pub use graph::{ConversationGraph, DialogNode, DialogOption, GraphError, NodeDef};
pub use matcher::{IntentMatch, IntentMatcher, MatchStrategy};
pub use memory::{ReplyEnvelope, SessionMemory};
pub use normalize::{normalize, tokenize};

/// Id of the graph root every new session starts on.
pub const START_NODE: &str = "start";

/// Id of the catch-all node shown when nothing else resolves.
pub const FALLBACK_NODE: &str = "fallback";

/// Persistence for per-session memory, owned by the calling layer.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn load(&self, key: &str) -> anyhow::Result<Option<SessionMemory>>;
    async fn save(&self, key: &str, memory: &SessionMemory) -> anyhow::Result<()>;
    async fn clear(&self, key: &str) -> anyhow::Result<()>;
    async fn list(&self) -> anyhow::Result<Vec<String>>;
}

#[async_trait]
impl<T: SessionStorage + ?Sized> SessionStorage for std::sync::Arc<T> {
    async fn load(&self, key: &str) -> anyhow::Result<Option<SessionMemory>> {
        (**self).load(key).await
    }

    async fn save(&self, key: &str, memory: &SessionMemory) -> anyhow::Result<()> {
        (**self).save(key, memory).await
    }

    async fn clear(&self, key: &str) -> anyhow::Result<()> {
        (**self).clear(key).await
    }

    async fn list(&self) -> anyhow::Result<Vec<String>> {
        (**self).list().await
    }
}
