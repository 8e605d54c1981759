//! Layered intent matching against the options of the current node.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{ConversationGraph, DialogNode};
use crate::normalize::{normalize, tokenize};

/// Which strategy produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Input equals an option label.
    Exact,
    /// Input shares at least one word with an option label.
    WordOverlap,
    /// A node tag occurs in the input and in an option label.
    Tag,
}

impl MatchStrategy {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Exact => "exact",
            Self::WordOverlap => "word_overlap",
            Self::Tag => "tag",
        }
    }
}

/// Option target chosen by the matcher. The id may not name a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentMatch {
    pub target: String,
    pub strategy: MatchStrategy,
}

/// Resolves free text to one of the current node's options.
pub struct IntentMatcher<'g> {
    graph: &'g ConversationGraph,
}

impl<'g> IntentMatcher<'g> {
    #[must_use]
    pub const fn new(graph: &'g ConversationGraph) -> Self {
        Self { graph }
    }

    /// Match `raw` against the options of `current`.
    ///
    /// Strategies run in order (exact, word overlap, tag) and the first hit
    /// wins. Tags of the root node are pooled after the current node's own.
    /// Returns `None` when `current` is unknown or nothing matches.
    #[must_use]
    pub fn match_intent(&self, raw: &str, current: &str) -> Option<IntentMatch> {
        let node = self.graph.get_node(current)?;
        let input = normalize(raw);

        let found = Self::exact(node, &input)
            .map(|target| (target, MatchStrategy::Exact))
            .or_else(|| {
                Self::word_overlap(node, &input).map(|target| (target, MatchStrategy::WordOverlap))
            })
            .or_else(|| self.tag(node, &input).map(|target| (target, MatchStrategy::Tag)));

        found.map(|(target, strategy)| {
            debug!(
                "Matched '{input}' on node {current} to {target} via {}",
                strategy.as_str()
            );
            IntentMatch {
                target: target.to_string(),
                strategy,
            }
        })
    }

    fn exact<'n>(node: &'n DialogNode, input: &str) -> Option<&'n str> {
        node.options
            .iter()
            .find(|option| normalize(&option.text) == input)
            .map(|option| option.id.as_str())
    }

    fn word_overlap<'n>(node: &'n DialogNode, input: &str) -> Option<&'n str> {
        let words = tokenize(input);
        if words.is_empty() {
            return None;
        }

        node.options
            .iter()
            .find(|option| {
                let label = normalize(&option.text);
                tokenize(&label).iter().any(|word| words.contains(word))
            })
            .map(|option| option.id.as_str())
    }

    fn tag<'n>(&self, node: &'n DialogNode, input: &str) -> Option<&'n str> {
        let pooled = node.tags.iter().chain(self.graph.root().tags.iter());

        for tag in pooled {
            if tag.is_empty() || !input.contains(tag.as_str()) {
                continue;
            }
            let hit = node
                .options
                .iter()
                .find(|option| normalize(&option.text).contains(tag.as_str()));
            if let Some(option) = hit {
                return Some(option.id.as_str());
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeDef;

    fn matcher() -> IntentMatcher<'static> {
        IntentMatcher::new(ConversationGraph::builtin())
    }

    fn target(raw: &str, current: &str) -> Option<(String, MatchStrategy)> {
        matcher()
            .match_intent(raw, current)
            .map(|m| (m.target, m.strategy))
    }

    #[test]
    fn test_exact_match_ignores_case_and_punctuation() {
        assert_eq!(
            target("i need MOTIVATION to start daily habits", "start"),
            Some(("habits_start".to_string(), MatchStrategy::Exact))
        );
    }

    #[test]
    fn test_word_overlap_picks_first_option_in_order() {
        // "tips" overlaps habit_tips; "restart" overlaps habit_restart later.
        assert_eq!(
            target("tips to restart", "habits_start"),
            Some(("habit_tips".to_string(), MatchStrategy::WordOverlap))
        );
    }

    #[test]
    fn test_tag_match_uses_substring_of_input() {
        // "careerwise" shares no whole word with any start option, but the
        // pooled tag "career" occurs in it and in the third option label.
        assert_eq!(
            target("careerwise", "start"),
            Some(("career_start".to_string(), MatchStrategy::Tag))
        );
    }

    #[test]
    fn test_tag_pool_includes_root_tags() {
        // career_interview has no tags of its own; "motivation" comes from
        // the root. No career_interview option contains it, so no match.
        assert_eq!(target("motivationally", "career_interview"), None);

        // motivation_boost options mention "career"; root tag "career" hits.
        assert_eq!(
            target("careerist", "motivation_boost"),
            Some(("career_start".to_string(), MatchStrategy::Tag))
        );
    }

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(target("xyz unrelated gibberish", "habits_start"), None);
        assert_eq!(target("", "start"), None);
    }

    #[test]
    fn test_unknown_current_node_returns_none() {
        assert_eq!(target("Main menu", "no_such_node"), None);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_unresolved_targets_are_still_returned() {
        const DEFS: &[NodeDef] = &[
            NodeDef {
                id: "start",
                text: "Hi",
                options: &[("nowhere", "Take me nowhere")],
                tags: &[],
            },
            NodeDef {
                id: "fallback",
                text: "Pardon?",
                options: &[],
                tags: &[],
            },
        ];
        let graph = ConversationGraph::from_definitions(DEFS).expect("graph is valid");
        let found = IntentMatcher::new(&graph)
            .match_intent("take me nowhere", "start")
            .expect("exact label should match");

        assert_eq!(found.target, "nowhere");
        assert_eq!(found.strategy, MatchStrategy::Exact);
    }
}
