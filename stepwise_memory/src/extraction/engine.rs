//! Extraction engine turning free text into session facts.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extraction::facts::{ExtractedFacts, FactSlot};
use crate::extraction::patterns::{ExtractionError, PatternDef, default_patterns};

/// Configuration for the extraction engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Extraction patterns to apply, in priority order.
    pub patterns: Vec<PatternDef>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
        }
    }
}

struct CompiledPattern {
    id: String,
    slot: FactSlot,
    regex: Regex,
}

/// Compiled set of extraction patterns.
///
/// Independent of dialog state: the same text always yields the same facts.
pub struct MemoryExtractor {
    patterns: Vec<CompiledPattern>,
}

impl MemoryExtractor {
    /// Create an extractor from configuration.
    ///
    /// # Errors
    /// Returns an error if any pattern fails to compile.
    pub fn new(config: ExtractionConfig) -> Result<Self, ExtractionError> {
        let patterns = config
            .patterns
            .into_iter()
            .map(|def| -> Result<CompiledPattern, ExtractionError> {
                let regex = def.build()?;
                Ok(CompiledPattern {
                    id: def.id,
                    slot: def.slot,
                    regex,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Create an extractor with the default name and goal patterns.
    ///
    /// # Errors
    /// Returns an error if default pattern compilation fails.
    pub fn with_defaults() -> Result<Self, ExtractionError> {
        Self::new(ExtractionConfig::default())
    }

    /// Scan `text` for facts. Only the first match per slot counts.
    #[must_use]
    pub fn extract(&self, text: &str) -> ExtractedFacts {
        let mut facts = ExtractedFacts::default();

        for pattern in &self.patterns {
            if facts.get(pattern.slot).is_some() {
                continue;
            }
            let Some(value) = pattern
                .regex
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim())
                .filter(|value| !value.is_empty())
            else {
                continue;
            };

            let value = match pattern.slot {
                FactSlot::Name => capitalize(value),
                FactSlot::Goal => value.to_string(),
            };
            debug!("Pattern {} extracted {}: {value}", pattern.id, pattern.slot);
            facts.set(pattern.slot, value);
        }

        facts
    }
}

/// Upper-case the first letter and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn extractor() -> MemoryExtractor {
        MemoryExtractor::with_defaults().expect("default patterns should compile")
    }

    #[test]
    fn test_extracts_and_capitalizes_name() {
        let facts = extractor().extract("Hello! my name is aLICE and I like tea");
        assert_eq!(facts.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_name_variants() {
        let extractor = extractor();
        for text in ["I am bob", "i'm Bob", "Call me BOB!"] {
            assert_eq!(
                extractor.extract(text).name.as_deref(),
                Some("Bob"),
                "text: {text}"
            );
        }
    }

    #[test]
    fn test_only_first_name_counts() {
        let facts = extractor().extract("call me Ana, my name is Joanna");
        assert_eq!(facts.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_single_letter_name_is_ignored() {
        assert!(extractor().extract("i am x").name.is_none());
    }

    #[test]
    fn test_extracts_goal_remainder_verbatim() {
        let facts = extractor().extract("My goal is   Run a 5K by June!  ");
        assert_eq!(facts.goal.as_deref(), Some("Run a 5K by June!"));
        assert!(facts.name.is_none());
    }

    #[test]
    fn test_goal_variants() {
        let extractor = extractor();
        assert_eq!(
            extractor.extract("i want to build confidence").goal.as_deref(),
            Some("build confidence")
        );
        assert_eq!(
            extractor.extract("I'm aiming to wake up at 6").goal.as_deref(),
            Some("wake up at 6")
        );
        assert_eq!(
            extractor.extract("I want a better job").goal.as_deref(),
            Some("a better job")
        );
    }

    #[test]
    fn test_name_and_goal_in_one_message() {
        let facts = extractor().extract("I'm Priya and my goal is to read daily");
        assert_eq!(facts.name.as_deref(), Some("Priya"));
        assert_eq!(facts.goal.as_deref(), Some("to read daily"));
    }

    #[test]
    fn test_no_statement_yields_nothing() {
        assert!(extractor().extract("tell me about habits").is_empty());
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn test_empty_goal_capture_is_ignored() {
        assert!(extractor().extract("i want \n").goal.is_none());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_custom_patterns_replace_defaults() {
        let config = ExtractionConfig {
            patterns: vec![PatternDef::new(
                "nickname",
                FactSlot::Name,
                r"(?i)\bnickname:\s*(\w+)",
            )],
        };
        let extractor = MemoryExtractor::new(config).expect("custom pattern should compile");

        assert_eq!(
            extractor.extract("nickname: zed").name.as_deref(),
            Some("Zed")
        );
        assert!(extractor.extract("my name is Alice").is_empty());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("mARY"), "Mary");
        assert_eq!(capitalize(""), "");
    }
}
