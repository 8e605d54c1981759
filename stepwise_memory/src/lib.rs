#![warn(
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

//! Extraction of session facts (name, stated goal) from free text.

pub mod extraction;

pub use extraction::engine::{ExtractionConfig, MemoryExtractor};
pub use extraction::facts::{ExtractedFacts, FactSlot};
pub use extraction::patterns::{ExtractionError, GOAL_PATTERN, NAME_PATTERN, PatternDef, default_patterns};
