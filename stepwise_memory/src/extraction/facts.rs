//! Facts extracted from a single message.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use stepwise_core::SessionMemory;

/// Memory field a pattern fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactSlot {
    /// What the user wants to be called.
    Name,
    /// What the user says they want to achieve.
    Goal,
}

impl FactSlot {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::Goal => "goal",
        }
    }
}

impl FromStr for FactSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "goal" => Ok(Self::Goal),
            other => Err(format!("unknown fact slot: {other}")),
        }
    }
}

impl std::fmt::Display for FactSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running the extractor over one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFacts {
    pub name: Option<String>,
    pub goal: Option<String>,
}

impl ExtractedFacts {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.goal.is_none()
    }

    #[must_use]
    pub const fn get(&self, slot: FactSlot) -> Option<&String> {
        match slot {
            FactSlot::Name => self.name.as_ref(),
            FactSlot::Goal => self.goal.as_ref(),
        }
    }

    pub(crate) fn set(&mut self, slot: FactSlot, value: String) {
        match slot {
            FactSlot::Name => self.name = Some(value),
            FactSlot::Goal => self.goal = Some(value),
        }
    }

    /// Copy found facts into `memory`. Fields that were not found are left
    /// untouched, so a stored value is never cleared.
    pub fn merge_into(self, memory: &mut SessionMemory) {
        if let Some(name) = self.name {
            memory.name = Some(name);
        }
        if let Some(goal) = self.goal {
            memory.goal = Some(goal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_round_trips_through_str() {
        assert_eq!("Name".parse::<FactSlot>(), Ok(FactSlot::Name));
        assert_eq!(FactSlot::Goal.to_string(), "goal");
        assert!("habit".parse::<FactSlot>().is_err());
    }

    #[test]
    fn test_merge_keeps_existing_values() {
        let mut memory = SessionMemory::default()
            .with_name("Alice")
            .with_goal("read more");

        ExtractedFacts {
            name: None,
            goal: Some("run a 5k".to_string()),
        }
        .merge_into(&mut memory);

        assert_eq!(memory.name.as_deref(), Some("Alice"));
        assert_eq!(memory.goal.as_deref(), Some("run a 5k"));
    }

    #[test]
    fn test_empty_facts_change_nothing() {
        let before = SessionMemory::default().with_name("Bob");
        let mut after = before.clone();

        ExtractedFacts::default().merge_into(&mut after);

        assert_eq!(before, after);
    }
}
