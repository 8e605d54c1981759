//! Per-session dialog state and the per-call reply envelope.

use serde::{Deserialize, Serialize};

use crate::START_NODE;
use crate::graph::DialogOption;

/// State remembered between messages of one session.
///
/// The value is owned by the calling layer; the router only ever returns a
/// new copy of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMemory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Node the session currently sits on.
    #[serde(default = "SessionMemory::default_node")]
    pub node: String,
    /// Messages processed so far.
    #[serde(default)]
    pub steps: u64,
}

impl SessionMemory {
    fn default_node() -> String {
        START_NODE.to_string()
    }

    /// Memory positioned on `node`, with nothing remembered yet.
    #[must_use]
    pub fn at_node(node: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            ..Self::default()
        }
    }

    /// Set the remembered name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the remembered goal.
    #[must_use]
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = Some(goal.into());
        self
    }
}

impl Default for SessionMemory {
    fn default() -> Self {
        Self {
            name: None,
            goal: None,
            node: Self::default_node(),
            steps: 0,
        }
    }
}

/// Everything produced by one router call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyEnvelope {
    /// Node text with placeholders substituted.
    pub text: String,
    pub options: [DialogOption; 3],
    /// Id of the node that was rendered.
    pub node: String,
    pub memory: SessionMemory,
}
