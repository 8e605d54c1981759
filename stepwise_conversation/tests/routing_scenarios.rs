//! End-to-end routing scenarios over the built-in conversation.

use stepwise_conversation::{DialogRouter, TransitionReason};
use stepwise_core::{ConversationGraph, SessionMemory, normalize};

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn router() -> DialogRouter<'static> {
    DialogRouter::with_defaults().expect("default router should build")
}

const SAMPLE_INPUTS: &[&str] = &[
    "I need motivation to start daily habits.",
    "xyz unrelated gibberish",
    "restart please",
    "my name is Alice",
    "I want to get a new job",
    "Main menu",
    "1",
    "?!?",
    "ünïcödé",
    "tips",
];

#[test]
fn start_option_text_leads_to_habits() {
    let memory = SessionMemory::default();
    let reply = router().route("I need motivation to start daily habits.", Some(&memory));

    assert_eq!(reply.node, "habits_start");
    assert_eq!(reply.memory.node, "habits_start");
    assert_eq!(reply.memory.steps, 1);
}

#[test]
fn gibberish_on_habits_start_falls_back() {
    let router = router();
    let memory = SessionMemory::at_node("habits_start");

    let transition = router.next_node("xyz unrelated gibberish", &memory.node);
    assert_eq!(transition.reason, TransitionReason::Fallback);

    let reply = router.route("xyz unrelated gibberish", Some(&memory));
    assert_eq!(reply.node, "fallback");
}

#[test]
fn restart_wins_from_every_node() {
    let router = router();

    for node in ConversationGraph::builtin().nodes() {
        let memory = SessionMemory::at_node(node.id.clone());
        let reply = router.route("restart please", Some(&memory));
        assert_eq!(reply.node, "start", "from node {}", node.id);
    }
}

#[test]
fn career_keyword_outranks_confidence_keyword() {
    // No option of career_interview shares a word with the input.
    let memory = SessionMemory::at_node("career_interview");
    let reply = router().route(
        "I need help with my resume and also feel anxious",
        Some(&memory),
    );

    assert_eq!(reply.node, "career_start");
}

#[test]
fn name_survives_unrelated_messages() {
    let router = router();

    let first = router.route("my name is Alice", None);
    assert_eq!(first.memory.name.as_deref(), Some("Alice"));

    let second = router.route("tell me about habits", Some(&first.memory));
    assert_eq!(second.memory.name.as_deref(), Some("Alice"));
    assert_eq!(second.memory.steps, 2);

    let third = router.route("restart", Some(&second.memory));
    assert_eq!(third.memory.name.as_deref(), Some("Alice"));
}

#[test]
fn goal_is_remembered_and_replaced_only_by_a_new_goal() {
    let router = router();

    let first = router.route("My goal is to read every night", None);
    assert_eq!(first.memory.goal.as_deref(), Some("to read every night"));

    let second = router.route("tips", Some(&first.memory));
    assert_eq!(second.memory.goal.as_deref(), Some("to read every night"));

    let third = router.route("i want a calmer morning", Some(&second.memory));
    assert_eq!(third.memory.goal.as_deref(), Some("a calmer morning"));
}

#[test]
fn every_reply_is_total() {
    let router = router();
    let graph = ConversationGraph::builtin();

    for node in graph.nodes() {
        for input in SAMPLE_INPUTS {
            let memory = SessionMemory::at_node(node.id.clone());
            let reply = router.route(input, Some(&memory));

            assert_eq!(reply.options.len(), 3);
            assert!(
                graph.contains(&reply.node),
                "{input:?} from {} produced unknown node {}",
                node.id,
                reply.node
            );
            assert_eq!(reply.memory.node, reply.node);
            assert_eq!(reply.memory.steps, 1);
        }
    }
}

#[test]
fn normalization_is_idempotent_on_graph_text() {
    for node in ConversationGraph::builtin().nodes() {
        let once = normalize(&node.text);
        assert_eq!(normalize(&once), once);
        for option in &node.options {
            let once = normalize(&option.text);
            assert_eq!(normalize(&once), once);
        }
    }
}

#[test]
fn walking_option_labels_follows_the_graph() {
    let router = router();

    let mut memory = SessionMemory::default();
    for (label, expected) in [
        ("I need career / future planning help.", "career_start"),
        ("Interview preparation", "career_interview"),
        ("Give mock interview questions", "mock_qs"),
    ] {
        let reply = router.route(label, Some(&memory));
        assert_eq!(reply.node, expected, "after {label:?}");
        memory = reply.memory;
    }

    assert_eq!(memory.steps, 3);
}

#[test]
fn extracted_name_shows_in_motivation_boost() {
    let memory = SessionMemory::at_node("fallback");
    let reply = router().route("My name is Sam. Give me a motivation boost", Some(&memory));

    assert_eq!(reply.node, "motivation_boost");
    assert_eq!(reply.memory.name.as_deref(), Some("Sam"));
    assert!(reply.text.starts_with("Remember, Sam:"), "{}", reply.text);
}

#[test]
fn stored_goal_shows_on_end_node() {
    let memory = SessionMemory::at_node("end_node").with_goal("run a 5k");
    let reply = router().current(Some(&memory));

    assert!(reply.text.contains("toward run a 5k."), "{}", reply.text);

    let anonymous = router().current(Some(&SessionMemory::at_node("end_node")));
    assert!(anonymous.text.contains("{goal}"));
}
