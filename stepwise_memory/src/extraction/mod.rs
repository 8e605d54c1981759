//! Pattern-based fact extraction.
//!
//! Patterns are plain data ([`patterns::PatternDef`]) so the rules can be
//! audited, tested in isolation, or replaced through configuration.

pub mod engine;
pub mod facts;
pub mod patterns;
