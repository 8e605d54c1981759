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

//! Message routing for the rule-based coach.
//!
//! [`DialogRouter`] is the pure core: one call per user message, no I/O.
//! [`ConversationManager`] wraps it with session storage and per-session
//! serialization for front-ends.

mod keywords;
mod manager;
mod router;

pub use keywords::{
    CAREER_PATTERN, CONFIDENCE_PATTERN, FALLBACK_RULES, HABITS_PATTERN, KeywordRules,
    MOTIVATION_PATTERN, OVERRIDE_PATTERN,
};
pub use manager::{Banner, ConversationError, ConversationManager};
pub use router::{
    DialogRouter, GOAL_PLACEHOLDER, NAME_PLACEHOLDER, RouterError, Transition, TransitionReason,
    render,
};
