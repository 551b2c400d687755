//! Chat Session — the transcript-owning collaborator around a `ConversationEngine`.
//!
//! The engine only turns input into replies. The session records both sides of
//! each exchange as numbered `Message`s so a client can render the conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::message::{Message, MessageRole};
use crate::screening::candidate::CandidateProfile;
use crate::screening::engine::{ConversationEngine, ConversationState, QuizProgress};

/// Full view of the session for rendering the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub state: ConversationState,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<Message>,
}

/// Live candidate profile, as shown next to the chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileView {
    pub session_id: Uuid,
    pub state: ConversationState,
    pub candidate: CandidateProfile,
    pub progress: QuizProgress,
    /// True once every intake field has been collected.
    pub complete: bool,
}

pub struct ChatSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    engine: ConversationEngine,
    transcript: Vec<Message>,
}

impl ChatSession {
    /// Starts the engine and records its opening prompt as the first message.
    pub fn open(mut engine: ConversationEngine) -> Self {
        let opening = engine.start();
        let mut session = Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            engine,
            transcript: Vec::new(),
        };
        session.push(MessageRole::Assistant, opening);
        session
    }

    /// Runs one candidate turn and returns the messages it appended.
    ///
    /// Blank input leaves the transcript untouched and returns nothing.
    pub fn exchange(&mut self, input: &str) -> Vec<Message> {
        if input.trim().is_empty() {
            return Vec::new();
        }

        let first_new = self.transcript.len();
        self.push(MessageRole::Candidate, input.to_string());
        for reply in self.engine.submit(input) {
            self.push(MessageRole::Assistant, reply);
        }
        self.transcript[first_new..].to_vec()
    }

    fn push(&mut self, role: MessageRole, text: String) {
        let seq = self.transcript.last().map_or(1, |m| m.seq + 1);
        self.transcript.push(Message {
            seq,
            role,
            text,
            created_at: Utc::now(),
        });
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> ConversationState {
        self.engine.state()
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            state: self.engine.state(),
            created_at: self.created_at,
            messages: self.transcript.clone(),
        }
    }

    pub fn profile(&self) -> ProfileView {
        ProfileView {
            session_id: self.id,
            state: self.engine.state(),
            candidate: self.engine.candidate().clone(),
            progress: self.engine.progress(),
            complete: self.engine.record().is_some(),
        }
    }
}
