// Candidate screening: scripted intake state machine and technical question selection.
// Pure, synchronous logic. The HTTP session layer owns the transcript and any reply delay.

pub mod candidate;
pub mod engine;
pub mod handlers;
pub mod prompts;
pub mod question_bank;
pub mod session;

#[cfg(test)]
mod proptests;

pub use engine::ConversationEngine;
pub use session::ChatSession;
