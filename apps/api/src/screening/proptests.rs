//! Property-based tests for the conversation engine
//!
//! These check the engine invariants across arbitrary candidate input.

use super::engine::*;
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

/// Non-blank text that cannot trip a termination keyword.
fn arb_answer() -> impl Strategy<Value = String> {
    "[-a-zA-Z0-9@.,+ ]{1,40}".prop_filter("must be a plain answer", |s| {
        !s.trim().is_empty() && !contains_termination_keyword(s)
    })
}

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,10}"
}

fn arb_keyword_input() -> impl Strategy<Value = String> {
    (
        "[a-z ]{0,10}",
        prop::sample::select(TERMINATION_KEYWORDS.to_vec()),
        "[a-z ]{0,10}",
        any::<bool>(),
    )
        .prop_map(|(prefix, kw, suffix, shout)| {
            let kw = if shout { kw.to_uppercase() } else { kw.to_string() };
            format!("{prefix}{kw}{suffix}")
        })
}

/// An engine fed `answers` in order, starting from the greeting.
fn engine_after(seed: u64, answers: &[String]) -> ConversationEngine {
    let mut engine = ConversationEngine::seeded(seed);
    engine.start();
    for answer in answers {
        engine.submit(answer);
    }
    engine
}

fn owned_field_count(engine: &ConversationEngine) -> usize {
    let c = engine.candidate();
    [
        c.full_name.is_some(),
        c.email.is_some(),
        c.phone.is_some(),
        c.experience_years.is_some(),
        c.desired_position.is_some(),
        c.location.is_some(),
        c.tech_stack.is_some(),
    ]
    .iter()
    .filter(|set| **set)
    .count()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_blank_input_never_changes_anything(
        seed in any::<u64>(),
        answers in prop::collection::vec(arb_answer(), 0..12),
        blank in arb_blank(),
    ) {
        let mut engine = engine_after(seed, &answers);
        let state = engine.state();
        let profile = engine.candidate().clone();
        let progress = engine.progress();

        prop_assert!(engine.submit(&blank).is_empty());
        prop_assert_eq!(engine.state(), state);
        prop_assert_eq!(engine.candidate(), &profile);
        prop_assert_eq!(engine.progress(), progress);
    }

    #[test]
    fn prop_keyword_input_short_circuits(
        seed in any::<u64>(),
        answers in prop::collection::vec(arb_answer(), 0..12),
        input in arb_keyword_input(),
    ) {
        let mut engine = engine_after(seed, &answers);
        prop_assume!(engine.state() != ConversationState::Completed);
        let state = engine.state();
        let profile = engine.candidate().clone();
        let progress = engine.progress();

        let replies = engine.submit(&input);
        prop_assert_eq!(replies.len(), 1);
        prop_assert_eq!(engine.state(), state);
        prop_assert_eq!(engine.candidate(), &profile);
        prop_assert_eq!(engine.progress(), progress);
    }

    #[test]
    fn prop_intake_answer_advances_exactly_one_step(
        seed in any::<u64>(),
        answers in prop::collection::vec(arb_answer(), 0..7),
        next in arb_answer(),
    ) {
        let mut engine = engine_after(seed, &answers);
        let before = engine.state();
        let fields_before = owned_field_count(&engine);

        let replies = engine.submit(&next);
        prop_assert!(!replies.is_empty() && replies.len() <= 2);
        prop_assert_eq!(engine.state(), before.next());
        prop_assert_eq!(owned_field_count(&engine), fields_before + 1);
    }

    #[test]
    fn prop_selected_questions_bounded_and_cursor_in_range(
        seed in any::<u64>(),
        intake in prop::collection::vec(arb_answer(), 6..=6),
        stack in arb_answer(),
        quiz_answers in prop::collection::vec(arb_answer(), 0..8),
    ) {
        let mut engine = engine_after(seed, &intake);
        engine.submit(&stack);
        let total = engine.questions().len();
        prop_assert!((1..=5).contains(&total));

        for answer in &quiz_answers {
            engine.submit(answer);
            let progress = engine.progress();
            prop_assert!(progress.answered <= total);
            if engine.state() == ConversationState::AskingQuestions {
                prop_assert!(progress.answered < total);
                prop_assert!(engine.current_question().is_some());
            }
        }
    }
}
