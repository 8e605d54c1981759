//! Conversation manager: the calling layer around the router.
//!
//! The `ConversationManager` loads a session's memory, routes one message,
//! and stores the returned memory. Calls for the same session key are
//! serialized; different sessions run concurrently.

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use stepwise_core::{ReplyEnvelope, SessionMemory, SessionStorage};
use thiserror::Error;
use tracing::{debug, info};

use crate::router::DialogRouter;

/// Errors that can occur while handling a message.
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("Empty message.")]
    EmptyMessage,

    #[error("Session storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Text shown at the top of an interactive session.
#[derive(Debug, Clone)]
pub struct Banner {
    pub bot_name: String,
    pub quote: String,
}

pub struct ConversationManager<S>
where
    S: SessionStorage,
{
    router: DialogRouter<'static>,
    storage: S,
    locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl<S> ConversationManager<S>
where
    S: SessionStorage,
{
    pub fn new(router: DialogRouter<'static>, storage: S) -> Self {
        Self {
            router,
            storage,
            locks: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub const fn router(&self) -> &DialogRouter<'static> {
        &self.router
    }

    fn session_lock(&self, key: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(key.to_string()).or_default())
    }

    /// Give back the caller's handle on the lock for `key` and drop the entry
    /// once nobody else holds or awaits it. Handles are only released under
    /// the map mutex, so the last one out always sees a count of one.
    fn release_lock(&self, key: &str, lock: Arc<tokio::sync::Mutex<()>>) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        drop(lock);
        if locks
            .get(key)
            .is_some_and(|entry| Arc::strong_count(entry) == 1)
        {
            locks.remove(key);
        }
    }

    async fn route_and_store(
        &self,
        key: &str,
        text: &str,
    ) -> Result<ReplyEnvelope, ConversationError> {
        let memory = self.storage.load(key).await?;
        let reply = self.router.route(text, memory.as_ref());
        self.storage.save(key, &reply.memory).await?;
        Ok(reply)
    }

    /// Route `text` for session `key` and persist the new memory.
    ///
    /// Surrounding whitespace is trimmed; an empty message is rejected
    /// before the router runs.
    pub async fn process_message(
        &self,
        key: &str,
        text: &str,
    ) -> Result<ReplyEnvelope, ConversationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ConversationError::EmptyMessage);
        }

        let lock = self.session_lock(key);
        let result = {
            let _guard = lock.lock().await;
            self.route_and_store(key, text).await
        };
        self.release_lock(key, lock);

        let reply = result?;
        info!(
            "Session {key}: step {} on node {}",
            reply.memory.steps, reply.node
        );
        Ok(reply)
    }

    /// The root node for a fresh session, rendered without a step.
    #[must_use]
    pub fn greeting(&self) -> ReplyEnvelope {
        self.router.current(None)
    }

    /// The node session `key` currently sits on, rendered without a step.
    pub async fn current(&self, key: &str) -> Result<ReplyEnvelope, ConversationError> {
        let memory = self.storage.load(key).await?;
        Ok(self.router.current(memory.as_ref()))
    }

    /// Forget everything about session `key`.
    pub async fn reset(&self, key: &str) -> Result<SessionMemory, ConversationError> {
        let lock = self.session_lock(key);
        let result = {
            let _guard = lock.lock().await;
            self.storage.clear(key).await
        };
        self.release_lock(key, lock);

        result?;
        info!("Reset session: {key}");
        Ok(SessionMemory::default())
    }

    pub async fn sessions(&self) -> Result<Vec<String>, ConversationError> {
        Ok(self.storage.list().await?)
    }

    /// Run an interactive loop on stdin/stdout for session `key`.
    ///
    /// Typing `1`-`3` picks the matching option, `/reset` starts over and
    /// `exit` ends the loop.
    pub async fn run_interactive(
        &self,
        key: &str,
        banner: &Banner,
    ) -> Result<(), ConversationError> {
        println!("=== {} ===", banner.bot_name);
        println!("\"{}\"", banner.quote);
        println!("Type a message, an option number, '/reset', or 'exit'.\n");

        let mut reply = self.current(key).await?;
        print_reply(&reply);

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut input = String::new();
            if std::io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if matches!(input, "exit" | "quit" | "q") {
                println!("\nSession ended after {} steps.", reply.memory.steps);
                break;
            }
            if input.is_empty() {
                continue;
            }
            if input == "/reset" {
                self.reset(key).await?;
                reply = self.current(key).await?;
                print_reply(&reply);
                continue;
            }

            let message = pick_option(&reply, input).unwrap_or(input).to_string();
            debug!("Sending: {message}");

            match self.process_message(key, &message).await {
                Ok(next) => {
                    reply = next;
                    print_reply(&reply);
                }
                Err(e) => eprintln!("Error: {e}"),
            }
        }

        Ok(())
    }
}

/// Label of option `input` when it is a number from 1 to 3.
fn pick_option<'r>(reply: &'r ReplyEnvelope, input: &str) -> Option<&'r str> {
    let index = input.parse::<usize>().ok()?.checked_sub(1)?;
    reply.options.get(index).map(|option| option.text.as_str())
}

fn print_reply(reply: &ReplyEnvelope) {
    println!("\n{}", reply.text);
    for (i, option) in reply.options.iter().enumerate() {
        println!("  {}. {}", i + 1, option.text);
    }
    println!();
}
