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

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use stepwise_core::{SessionMemory, SessionStorage};
use tracing::{debug, info, warn};

/// Idle time after which a stored session is forgotten.
pub const DEFAULT_LIFETIME_HOURS: u32 = 6;

/// On-disk record of one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub key: String,
    pub memory: SessionMemory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredSession {
    fn is_expired(&self, lifetime: Option<TimeDelta>, now: DateTime<Utc>) -> bool {
        lifetime.is_some_and(|lifetime| now.signed_duration_since(self.updated_at) > lifetime)
    }
}

/// Session storage keeping one JSON file per session in a directory.
pub struct SessionManager {
    dir: PathBuf,
    lifetime: Option<TimeDelta>,
}

impl SessionManager {
    pub async fn new(dir: PathBuf) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&dir).await?;
        info!("Session directory: {}", dir.display());

        Ok(Self {
            dir,
            lifetime: TimeDelta::try_hours(i64::from(DEFAULT_LIFETIME_HOURS)),
        })
    }

    /// Set the idle lifetime in hours; `0` keeps sessions forever.
    #[must_use]
    pub fn with_lifetime_hours(mut self, hours: u32) -> Self {
        self.lifetime = (hours > 0)
            .then(|| TimeDelta::try_hours(i64::from(hours)))
            .flatten();
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(key)))
    }

    async fn read(&self, key: &str) -> anyhow::Result<Option<StoredSession>> {
        let path = self.path_for(key);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<StoredSession>(&content) {
            Ok(stored) => Ok(Some(stored)),
            Err(e) => {
                warn!("Ignoring unreadable session file {}: {e}", path.display());
                Ok(None)
            }
        }
    }

    /// Replace the file for `key` through a temporary file and a rename so
    /// readers never see a partial write.
    async fn write_atomic(&self, key: &str, stored: &StoredSession) -> anyhow::Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        tokio::fs::write(&tmp, serde_json::to_string_pretty(stored)?).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                debug!("Could not remove {}: {cleanup}", tmp.display());
            }
            return Err(e.into());
        }
        Ok(())
    }
}

/// Encode `key` as a file name: ASCII letters, digits and `-` are kept,
/// every other byte becomes `_` followed by two hex digits.
fn file_stem(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            stem.push(char::from(byte));
        } else {
            stem.push_str(&format!("_{byte:02x}"));
        }
    }
    stem
}

#[async_trait]
impl SessionStorage for SessionManager {
    async fn load(&self, key: &str) -> anyhow::Result<Option<SessionMemory>> {
        let Some(stored) = self.read(key).await? else {
            debug!("No stored session: {key}");
            return Ok(None);
        };

        if stored.is_expired(self.lifetime, Utc::now()) {
            warn!(
                "Session {key} idle since {}, starting fresh",
                stored.updated_at
            );
            return Ok(None);
        }

        Ok(Some(stored.memory))
    }

    async fn save(&self, key: &str, memory: &SessionMemory) -> anyhow::Result<()> {
        let now = Utc::now();
        let created_at = self
            .read(key)
            .await?
            .filter(|stored| !stored.is_expired(self.lifetime, now))
            .map_or(now, |stored| stored.created_at);

        let stored = StoredSession {
            key: key.to_string(),
            memory: memory.clone(),
            created_at,
            updated_at: now,
        };
        self.write_atomic(key, &stored).await?;

        debug!("Saved session: {key}");
        Ok(())
    }

    async fn clear(&self, key: &str) -> anyhow::Result<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => info!("Cleared session: {key}"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<String>> {
        let now = Utc::now();
        let mut keys = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let content = tokio::fs::read_to_string(&path).await?;
            match serde_json::from_str::<StoredSession>(&content) {
                Ok(stored) if stored.is_expired(self.lifetime, now) => {
                    debug!("Skipping expired session: {}", stored.key);
                }
                Ok(stored) => keys.push(stored.key),
                Err(e) => warn!("Skipping unreadable session file {}: {e}", path.display()),
            }
        }

        keys.sort();
        Ok(keys)
    }
}
