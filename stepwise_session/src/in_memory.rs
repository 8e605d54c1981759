use std::collections::HashMap;

use async_trait::async_trait;
use stepwise_core::{SessionMemory, SessionStorage};
use tokio::sync::RwLock;
use tracing::info;

/// Process-local session storage. Everything is lost on exit.
#[derive(Debug, Default)]
pub struct InMemorySessions {
    sessions: RwLock<HashMap<String, SessionMemory>>,
}

impl InMemorySessions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorage for InMemorySessions {
    async fn load(&self, key: &str) -> anyhow::Result<Option<SessionMemory>> {
        Ok(self.sessions.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, memory: &SessionMemory) -> anyhow::Result<()> {
        self.sessions
            .write()
            .await
            .insert(key.to_string(), memory.clone());
        Ok(())
    }

    async fn clear(&self, key: &str) -> anyhow::Result<()> {
        if self.sessions.write().await.remove(key).is_some() {
            info!("Cleared session: {key}");
        }
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<String>> {
        let mut keys: Vec<String> = self.sessions.read().await.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}
