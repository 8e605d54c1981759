//! The static conversation graph.
//!
//! Nodes are authored as [`NodeDef`] rows and prepared once into
//! [`DialogNode`]s, each carrying exactly three options. A prepared graph is
//! never mutated and can be shared by reference across sessions.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{FALLBACK_NODE, START_NODE};

mod builtin;

/// Options appended, in this order and cycling, to nodes authored with fewer
/// than three options.
pub const DEFAULT_OPTIONS: [(&str, &str); 3] = [
    ("start", "Main menu"),
    ("motivation_boost", "Motivation boost"),
    ("habit_choose", "Choose a habit"),
];

/// Number of options every prepared node carries.
pub const OPTION_COUNT: usize = 3;

static BUILTIN: Lazy<ConversationGraph> = Lazy::new(|| {
    ConversationGraph::from_definitions(builtin::NODES)
        .unwrap_or_else(|err| panic!("built-in conversation table is invalid: {err}"))
});

/// Errors raised while preparing a graph from definitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("required node is missing: {0}")]
    MissingNode(&'static str),

    #[error("node id defined more than once: {0}")]
    DuplicateNode(String),
}

/// One authored row of the definition table.
#[derive(Debug, Clone, Copy)]
pub struct NodeDef {
    pub id: &'static str,
    /// Message template, may contain `{name}` and `{goal}`.
    pub text: &'static str,
    /// `(target node id, label)` pairs in display order.
    pub options: &'static [(&'static str, &'static str)],
    /// Keywords for loose free-text matching.
    pub tags: &'static [&'static str],
}

/// A selectable follow-up: the node it leads to and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogOption {
    pub id: String,
    pub text: String,
}

impl DialogOption {
    fn from_pair((id, text): (&str, &str)) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
        }
    }
}

/// A prepared node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogNode {
    pub id: String,
    pub text: String,
    pub options: [DialogOption; OPTION_COUNT],
    pub tags: Vec<String>,
}

impl DialogNode {
    fn prepare(def: &NodeDef) -> Self {
        Self {
            id: def.id.to_string(),
            text: def.text.to_string(),
            options: prepare_options(def.options),
            tags: def.tags.iter().map(|tag| (*tag).to_string()).collect(),
        }
    }
}

/// Keep the first three authored options, padding with [`DEFAULT_OPTIONS`].
fn prepare_options(authored: &[(&str, &str)]) -> [DialogOption; OPTION_COUNT] {
    std::array::from_fn(|slot| {
        let pair = authored.get(slot).copied().unwrap_or_else(|| {
            DEFAULT_OPTIONS[(slot - authored.len()) % DEFAULT_OPTIONS.len()]
        });
        DialogOption::from_pair(pair)
    })
}

/// Immutable, prepared set of dialog nodes.
#[derive(Debug, Clone)]
pub struct ConversationGraph {
    nodes: Vec<DialogNode>,
    index: HashMap<String, usize>,
    root: usize,
    fallback: usize,
}

impl ConversationGraph {
    /// Prepare a graph from an authored table.
    ///
    /// The table must define `start` and `fallback`, and ids must be unique.
    pub fn from_definitions(defs: &[NodeDef]) -> Result<Self, GraphError> {
        let mut nodes = Vec::with_capacity(defs.len());
        let mut index = HashMap::with_capacity(defs.len());

        for def in defs {
            if index.insert(def.id.to_string(), nodes.len()).is_some() {
                return Err(GraphError::DuplicateNode(def.id.to_string()));
            }
            nodes.push(DialogNode::prepare(def));
        }

        let root = *index
            .get(START_NODE)
            .ok_or(GraphError::MissingNode(START_NODE))?;
        let fallback = *index
            .get(FALLBACK_NODE)
            .ok_or(GraphError::MissingNode(FALLBACK_NODE))?;

        debug!("Prepared conversation graph with {} nodes", nodes.len());

        Ok(Self {
            nodes,
            index,
            root,
            fallback,
        })
    }

    /// The built-in coaching conversation, prepared on first use.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    #[must_use]
    pub fn get_node(&self, id: &str) -> Option<&DialogNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Look up `id`, falling back to the `fallback` node when it is unknown.
    #[must_use]
    pub fn resolve(&self, id: &str) -> &DialogNode {
        let i = self.index.get(id).copied().unwrap_or(self.fallback);
        &self.nodes[i]
    }

    #[must_use]
    pub fn root(&self) -> &DialogNode {
        &self.nodes[self.root]
    }

    #[must_use]
    pub fn fallback(&self) -> &DialogNode {
        &self.nodes[self.fallback]
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Nodes in definition order.
    pub fn nodes(&self) -> impl Iterator<Item = &DialogNode> {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.id.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `(node id, option id)` pairs whose option target is not a node.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        self.nodes
            .iter()
            .flat_map(|node| {
                node.options
                    .iter()
                    .filter(|option| !self.contains(&option.id))
                    .map(move |option| (node.id.as_str(), option.id.as_str()))
            })
            .collect()
    }
}
