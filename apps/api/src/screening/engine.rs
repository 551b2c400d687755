//! Conversation Engine — the intake state machine.
//!
//! Takes raw candidate input one turn at a time and returns the assistant replies.
//! Holds no transcript; only the derived profile, state and quiz cursor.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::screening::candidate::{parse_tech_stack, CandidateProfile, CandidateRecord};
use crate::screening::prompts;
use crate::screening::question_bank::QuestionBank;

/// Any of these anywhere in the input (case-insensitive, mid-word included) ends the turn early.
pub const TERMINATION_KEYWORDS: &[&str] =
    &["bye", "goodbye", "quit", "exit", "end", "finish", "stop"];

/// Intake steps in their only permitted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    Greeting,
    CollectEmail,
    CollectPhone,
    CollectExperience,
    CollectPosition,
    CollectLocation,
    CollectTechStack,
    AskingQuestions,
    Completed,
}

impl ConversationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationState::Greeting => "greeting",
            ConversationState::CollectEmail => "collect_email",
            ConversationState::CollectPhone => "collect_phone",
            ConversationState::CollectExperience => "collect_experience",
            ConversationState::CollectPosition => "collect_position",
            ConversationState::CollectLocation => "collect_location",
            ConversationState::CollectTechStack => "collect_tech_stack",
            ConversationState::AskingQuestions => "asking_questions",
            ConversationState::Completed => "completed",
        }
    }

    /// The following step. `Completed` maps to itself.
    pub fn next(self) -> Self {
        match self {
            ConversationState::Greeting => ConversationState::CollectEmail,
            ConversationState::CollectEmail => ConversationState::CollectPhone,
            ConversationState::CollectPhone => ConversationState::CollectExperience,
            ConversationState::CollectExperience => ConversationState::CollectPosition,
            ConversationState::CollectPosition => ConversationState::CollectLocation,
            ConversationState::CollectLocation => ConversationState::CollectTechStack,
            ConversationState::CollectTechStack => ConversationState::AskingQuestions,
            ConversationState::AskingQuestions | ConversationState::Completed => {
                ConversationState::Completed
            }
        }
    }
}

/// How far the candidate is through the quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizProgress {
    pub answered: usize,
    pub total: usize,
}

pub fn contains_termination_keyword(input: &str) -> bool {
    let lowered = input.to_lowercase();
    TERMINATION_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

pub struct ConversationEngine {
    state: ConversationState,
    candidate: CandidateProfile,
    bank: QuestionBank,
    rng: StdRng,
    /// Fixed once the tech stack is collected; length in 1..=5.
    questions: Vec<String>,
    cursor: usize,
}

impl Default for ConversationEngine {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl ConversationEngine {
    /// Engine whose question sampling is reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            state: ConversationState::Greeting,
            candidate: CandidateProfile::default(),
            bank: QuestionBank::default(),
            rng,
            questions: Vec::new(),
            cursor: 0,
        }
    }

    /// Opens the conversation and returns the first prompt.
    pub fn start(&mut self) -> String {
        self.state = ConversationState::Greeting;
        prompts::OPENING.to_string()
    }

    /// Processes one candidate turn and returns the replies in emission order.
    ///
    /// Whitespace-only input is ignored. Once `Completed`, every input gets the same
    /// closing reply. Otherwise a termination keyword short-circuits the turn with a
    /// farewell and leaves state and profile untouched.
    pub fn submit(&mut self, input: &str) -> Vec<String> {
        let input = input.trim();
        if input.is_empty() {
            return Vec::new();
        }

        if self.state == ConversationState::Completed {
            return vec![prompts::ALREADY_COMPLETED.to_string()];
        }

        if contains_termination_keyword(input) {
            info!(state = self.state.as_str(), "Candidate ended the conversation early");
            return vec![prompts::FAREWELL.to_string()];
        }

        let from = self.state;
        let replies = self.dispatch(input);
        if from != self.state {
            debug!(from = from.as_str(), to = self.state.as_str(), "Conversation advanced");
        }
        replies
    }

    fn dispatch(&mut self, input: &str) -> Vec<String> {
        let answer = input.to_string();
        match self.state {
            ConversationState::Greeting => {
                let reply = prompts::ASK_EMAIL_TEMPLATE.replace("{name}", input);
                self.candidate.full_name = Some(answer);
                self.advance();
                vec![reply]
            }
            ConversationState::CollectEmail => {
                self.candidate.email = Some(answer);
                self.advance();
                vec![prompts::ASK_PHONE.to_string()]
            }
            ConversationState::CollectPhone => {
                self.candidate.phone = Some(answer);
                self.advance();
                vec![prompts::ASK_EXPERIENCE.to_string()]
            }
            ConversationState::CollectExperience => {
                self.candidate.experience_years = Some(answer);
                self.advance();
                vec![prompts::ASK_POSITION.to_string()]
            }
            ConversationState::CollectPosition => {
                self.candidate.desired_position = Some(answer);
                self.advance();
                vec![prompts::ASK_LOCATION.to_string()]
            }
            ConversationState::CollectLocation => {
                self.candidate.location = Some(answer);
                self.advance();
                vec![prompts::ASK_TECH_STACK.to_string()]
            }
            ConversationState::CollectTechStack => self.begin_quiz(input),
            ConversationState::AskingQuestions => self.record_answer(),
            ConversationState::Completed => vec![prompts::ALREADY_COMPLETED.to_string()],
        }
    }

    fn advance(&mut self) {
        self.state = self.state.next();
    }

    fn begin_quiz(&mut self, input: &str) -> Vec<String> {
        let stack = parse_tech_stack(input);
        self.questions = self.bank.select(&stack, &mut self.rng);
        self.cursor = 0;
        debug!(
            skills = stack.len(),
            questions = self.questions.len(),
            "Selected technical questions"
        );

        let ack = prompts::TECH_STACK_ACK_TEMPLATE.replace("{stack}", &stack.join(", "));
        self.candidate.tech_stack = Some(stack);
        self.advance();

        let mut replies = vec![ack];
        replies.extend(self.current_question().map(str::to_string));
        replies
    }

    fn record_answer(&mut self) -> Vec<String> {
        let next = self.cursor + 1;
        if next < self.questions.len() {
            self.cursor = next;
            let mut replies = vec![prompts::NEXT_QUESTION_ACK.to_string()];
            replies.extend(self.current_question().map(str::to_string));
            replies
        } else {
            self.advance();
            info!(questions = self.questions.len(), "Screening completed");
            vec![prompts::SCREENING_COMPLETE.to_string()]
        }
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn candidate(&self) -> &CandidateProfile {
        &self.candidate
    }

    /// The finished record, once every intake field has been collected.
    pub fn record(&self) -> Option<CandidateRecord> {
        self.candidate.build()
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// The question awaiting an answer, if the quiz is in progress.
    pub fn current_question(&self) -> Option<&str> {
        match self.state {
            ConversationState::AskingQuestions => self.questions.get(self.cursor).map(String::as_str),
            _ => None,
        }
    }

    pub fn progress(&self) -> QuizProgress {
        let total = self.questions.len();
        let answered = match self.state {
            ConversationState::Completed => total,
            ConversationState::AskingQuestions => self.cursor,
            _ => 0,
        };
        QuizProgress { answered, total }
    }
}
