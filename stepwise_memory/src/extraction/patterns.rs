//! Extraction pattern definitions.
//!
//! Each pattern captures the value of one [`FactSlot`] in its first group.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extraction::facts::FactSlot;

/// "my name is X", "i am X", "i'm X", "call me X" with X 2-40 letters.
pub const NAME_PATTERN: &str = r"(?i)\b(?:my name is|i am|i'm|call me)\s+([A-Za-z]{2,40})\b";

/// "my goal is X", "i want to X", "i'm aiming to X", "i want X" with X the
/// rest of the line.
pub const GOAL_PATTERN: &str = r"(?i)\b(?:my goal is|i want to|i'm aiming to|i want)\s+(.*)";

/// Error type for pattern building.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("invalid regex in pattern {id}: {source}")]
    Regex {
        id: String,
        #[source]
        source: regex::Error,
    },

    #[error("pattern {0} has no capture group")]
    MissingCapture(String),
}

/// Definition of a single extraction pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDef {
    /// Unique identifier for this pattern.
    pub id: String,

    /// The memory field the first capture group fills.
    pub slot: FactSlot,

    /// Regex pattern to match text.
    pub pattern: String,
}

impl PatternDef {
    #[must_use]
    pub fn new(id: impl Into<String>, slot: FactSlot, pattern: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slot,
            pattern: pattern.into(),
        }
    }

    /// Compile the pattern.
    ///
    /// # Errors
    /// Returns an error if the regex is invalid or has no capture group.
    pub fn build(&self) -> Result<Regex, ExtractionError> {
        let regex = Regex::new(&self.pattern).map_err(|source| ExtractionError::Regex {
            id: self.id.clone(),
            source,
        })?;

        if regex.captures_len() < 2 {
            return Err(ExtractionError::MissingCapture(self.id.clone()));
        }

        Ok(regex)
    }
}

/// Default pattern set: one name rule and one goal rule.
#[must_use]
pub fn default_patterns() -> Vec<PatternDef> {
    vec![
        PatternDef::new("name_statement", FactSlot::Name, NAME_PATTERN),
        PatternDef::new("goal_statement", FactSlot::Goal, GOAL_PATTERN),
    ]
}
