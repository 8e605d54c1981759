//! Whole-word keyword rules applied to normalized input.
//!
//! The global override sends the session home regardless of the current
//! node. The fallback chain runs only when the intent matcher found nothing
//! and is checked in declaration order: the first category that matches wins.

use regex::Regex;

/// Phrases that always return to the root node.
pub const OVERRIDE_PATTERN: &str = r"\b(?:main menu|start over|restart|home|menu)\b";

pub const CAREER_PATTERN: &str = r"\b(?:career|job|resume|interview|skills)\b";
pub const HABITS_PATTERN: &str = r"\b(?:habit|daily|routine|start|consistency|walk|read)\b";
pub const CONFIDENCE_PATTERN: &str = r"\b(?:confidence|overthink|anxiety|social|shy)\b";
pub const MOTIVATION_PATTERN: &str = r"\b(?:motivate|motivation|inspire|boost)\b";

/// Fallback categories in priority order: `(pattern, target node)`.
pub const FALLBACK_RULES: [(&str, &str); 4] = [
    (CAREER_PATTERN, "career_start"),
    (HABITS_PATTERN, "habits_start"),
    (CONFIDENCE_PATTERN, "confidence_start"),
    (MOTIVATION_PATTERN, "motivation_boost"),
];

/// Compiled override and fallback rules.
#[derive(Debug, Clone)]
pub struct KeywordRules {
    global_override: Regex,
    fallbacks: Vec<(Regex, &'static str)>,
}

impl KeywordRules {
    /// Compile the built-in rules.
    ///
    /// # Errors
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        let global_override = Regex::new(OVERRIDE_PATTERN)?;
        let fallbacks = FALLBACK_RULES
            .iter()
            .map(|&(pattern, target)| Regex::new(pattern).map(|re| (re, target)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            global_override,
            fallbacks,
        })
    }

    /// Whether `normalized` asks to go back to the main menu.
    #[must_use]
    pub fn is_global_override(&self, normalized: &str) -> bool {
        self.global_override.is_match(normalized)
    }

    /// First fallback category present in `normalized`, if any.
    #[must_use]
    pub fn fallback_target(&self, normalized: &str) -> Option<&'static str> {
        self.fallbacks
            .iter()
            .find(|(re, _)| re.is_match(normalized))
            .map(|&(_, target)| target)
    }
}
