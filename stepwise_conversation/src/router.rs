//! The message router: one call per user message.
//!
//! Per call, in order: copy memory, extract facts, check the global
//! override, run the intent matcher or the keyword fallback chain, resolve
//! the node, personalize its text and bump the step counter.

use stepwise_core::{
    ConversationGraph, DialogNode, FALLBACK_NODE, IntentMatcher, MatchStrategy, ReplyEnvelope,
    START_NODE, SessionMemory, normalize,
};
use stepwise_memory::{ExtractionError, MemoryExtractor};
use thiserror::Error;
use tracing::{debug, warn};

use crate::keywords::KeywordRules;

pub const NAME_PLACEHOLDER: &str = "{name}";
pub const GOAL_PLACEHOLDER: &str = "{goal}";

/// Errors raised while assembling a router.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("extraction patterns: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("keyword patterns: {0}")]
    Keywords(#[from] regex::Error),
}

/// Why the router moved to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionReason {
    /// The input asked for the main menu.
    GlobalOverride,
    /// The intent matcher picked an option of the current node.
    Matched(MatchStrategy),
    /// A fallback keyword category matched.
    Keyword,
    /// Nothing matched.
    Fallback,
}

/// Target chosen for one message, before node resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub target: String,
    pub reason: TransitionReason,
}

/// Maps free text plus session memory to the next reply.
///
/// Holds no mutable state; one router can serve every session concurrently.
pub struct DialogRouter<'g> {
    graph: &'g ConversationGraph,
    extractor: MemoryExtractor,
    rules: KeywordRules,
}

impl DialogRouter<'static> {
    /// Router over the built-in conversation with the default patterns.
    pub fn with_defaults() -> Result<Self, RouterError> {
        Self::new(ConversationGraph::builtin(), MemoryExtractor::with_defaults()?)
    }
}

impl<'g> DialogRouter<'g> {
    pub fn new(
        graph: &'g ConversationGraph,
        extractor: MemoryExtractor,
    ) -> Result<Self, RouterError> {
        Ok(Self {
            graph,
            extractor,
            rules: KeywordRules::new()?,
        })
    }

    #[must_use]
    pub const fn graph(&self) -> &'g ConversationGraph {
        self.graph
    }

    /// Route one message. `memory` is `None` for the first message of a
    /// session; the caller's copy is never modified.
    #[must_use]
    pub fn route(&self, raw: &str, memory: Option<&SessionMemory>) -> ReplyEnvelope {
        let mut memory = memory.cloned().unwrap_or_default();

        self.extractor.extract(raw).merge_into(&mut memory);

        let transition = self.next_node(raw, &memory.node);
        let node = self.graph.resolve(&transition.target);
        if node.id != transition.target {
            warn!(
                "Node {} does not exist, showing {FALLBACK_NODE}",
                transition.target
            );
        }
        debug!(
            "Routed from {} to {} ({:?})",
            memory.node, node.id, transition.reason
        );

        memory.steps += 1;
        memory.node.clone_from(&node.id);

        Self::envelope(node, memory)
    }

    /// Decide the next node for `raw` while sitting on `current`.
    #[must_use]
    pub fn next_node(&self, raw: &str, current: &str) -> Transition {
        let normalized = normalize(raw);

        if self.rules.is_global_override(&normalized) {
            return Transition {
                target: START_NODE.to_string(),
                reason: TransitionReason::GlobalOverride,
            };
        }

        if let Some(found) = IntentMatcher::new(self.graph).match_intent(raw, current) {
            return Transition {
                target: found.target,
                reason: TransitionReason::Matched(found.strategy),
            };
        }

        self.rules.fallback_target(&normalized).map_or_else(
            || Transition {
                target: FALLBACK_NODE.to_string(),
                reason: TransitionReason::Fallback,
            },
            |target| Transition {
                target: target.to_string(),
                reason: TransitionReason::Keyword,
            },
        )
    }

    /// Render the node the session currently sits on without consuming a
    /// step. Used to greet a new or reset session.
    #[must_use]
    pub fn current(&self, memory: Option<&SessionMemory>) -> ReplyEnvelope {
        let mut memory = memory.cloned().unwrap_or_default();
        let node = self.graph.resolve(&memory.node);
        memory.node.clone_from(&node.id);
        Self::envelope(node, memory)
    }

    fn envelope(node: &DialogNode, memory: SessionMemory) -> ReplyEnvelope {
        ReplyEnvelope {
            text: render(&node.text, &memory),
            options: node.options.clone(),
            node: node.id.clone(),
            memory,
        }
    }
}

/// Substitute `{name}` and `{goal}` from memory. A placeholder whose value is
/// missing stays in the text as written.
#[must_use]
pub fn render(template: &str, memory: &SessionMemory) -> String {
    let mut text = template.to_string();

    let name = memory.name.as_deref().filter(|name| !name.is_empty());
    if let Some(name) = name {
        text = text.replace(NAME_PLACEHOLDER, name);
    }

    let goal = memory.goal.as_deref().filter(|goal| !goal.is_empty());
    if let Some(goal) = goal {
        text = text.replace(GOAL_PLACEHOLDER, goal);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepwise_core::NodeDef;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn router() -> DialogRouter<'static> {
        DialogRouter::with_defaults().expect("default router should build")
    }

    const PERSONAL: &[NodeDef] = &[
        NodeDef {
            id: "start",
            text: "Hi {name}, still working on {goal}?",
            options: &[("ghost", "Take me to the ghost node")],
            tags: &[],
        },
        NodeDef {
            id: "fallback",
            text: "Sorry {name}.",
            options: &[],
            tags: &[],
        },
    ];

    #[test]
    fn test_first_message_defaults_memory() {
        let reply = router().route("I need motivation to start daily habits.", None);

        assert_eq!(reply.node, "habits_start");
        assert_eq!(reply.memory.node, "habits_start");
        assert_eq!(reply.memory.steps, 1);
    }

    #[test]
    fn test_caller_memory_is_not_modified() {
        let before = SessionMemory::at_node("career_start");
        let reply = router().route("Resume / CV tips", Some(&before));

        assert_eq!(before, SessionMemory::at_node("career_start"));
        assert_eq!(reply.node, "career_resume");
        assert_eq!(reply.memory.steps, 1);
    }

    #[test]
    fn test_override_bypasses_matcher() {
        let router = router();

        // "Main menu" is also an option label of habit_tips; the override
        // wins either way, and from nodes without it as well.
        for node in ["habit_tips", "career_interview", "fallback", "start"] {
            let transition = router.next_node("restart please", node);
            assert_eq!(transition.target, START_NODE);
            assert_eq!(transition.reason, TransitionReason::GlobalOverride);
        }
    }

    #[test]
    fn test_override_still_extracts_and_counts() {
        let memory = SessionMemory {
            steps: 4,
            ..SessionMemory::at_node("conf_micro")
        };
        let reply = router().route("call me Dana, back to the menu", Some(&memory));

        assert_eq!(reply.node, START_NODE);
        assert_eq!(reply.memory.name.as_deref(), Some("Dana"));
        assert_eq!(reply.memory.steps, 5);
    }

    #[test]
    fn test_matcher_runs_before_keyword_fallback() {
        // "career" is a fallback keyword, but the start node's option label
        // shares words with the input first.
        let transition = router().next_node("career planning", START_NODE);
        assert_eq!(transition.target, "career_start");
        assert_eq!(
            transition.reason,
            TransitionReason::Matched(MatchStrategy::WordOverlap)
        );
    }

    #[test]
    fn test_keyword_fallback_when_matcher_fails() {
        let transition = router().next_node("daily routine", "career_interview");
        assert_eq!(transition.target, "habits_start");
        assert_eq!(transition.reason, TransitionReason::Keyword);
    }

    #[test]
    fn test_unknown_current_node_is_total() {
        let memory = SessionMemory::at_node("deleted_node");
        let reply = router().route("xyz", Some(&memory));

        assert_eq!(reply.node, FALLBACK_NODE);
        assert_eq!(reply.options.len(), 3);
    }

    #[test]
    fn test_empty_input_degrades_to_fallback() {
        let reply = router().route("", None);
        assert_eq!(reply.node, FALLBACK_NODE);
        assert_eq!(reply.memory.steps, 1);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_unresolved_option_renders_fallback() {
        let graph = ConversationGraph::from_definitions(PERSONAL).expect("graph is valid");
        let extractor = MemoryExtractor::with_defaults().expect("patterns compile");
        let router = DialogRouter::new(&graph, extractor).expect("router builds");

        let memory = SessionMemory::default().with_name("Ada");
        let reply = router.route("take me to the ghost node", Some(&memory));

        assert_eq!(reply.node, FALLBACK_NODE);
        assert_eq!(reply.memory.node, FALLBACK_NODE);
        assert_eq!(reply.text, "Sorry Ada.");
        assert_eq!(reply.options[0].id, "start");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_current_renders_without_counting() {
        let graph = ConversationGraph::from_definitions(PERSONAL).expect("graph is valid");
        let extractor = MemoryExtractor::with_defaults().expect("patterns compile");
        let router = DialogRouter::new(&graph, extractor).expect("router builds");

        let reply = router.current(None);
        assert_eq!(reply.node, START_NODE);
        assert_eq!(reply.memory.steps, 0);
        assert_eq!(reply.text, "Hi {name}, still working on {goal}?");
    }

    #[test]
    fn test_render_substitutes_known_values_only() {
        let template = "Hi {name}, still working on {goal}?";

        let memory = SessionMemory::default().with_name("Ada");
        assert_eq!(render(template, &memory), "Hi Ada, still working on {goal}?");

        let memory = memory.with_goal("a daily walk");
        assert_eq!(render(template, &memory), "Hi Ada, still working on a daily walk?");

        let memory = SessionMemory::default().with_name("");
        assert_eq!(render(template, &memory), template);
    }
}
