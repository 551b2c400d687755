use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::screening::{ChatSession, ConversationEngine};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The single live screening session. Locked only for the exchange itself and
    /// for reads, never across the reply delay.
    pub session: Arc<Mutex<ChatSession>>,
    /// Set while a candidate message is being answered. At most one at a time.
    pub reply_pending: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let session = ChatSession::open(new_engine(&config));
        Self {
            config,
            session: Arc::new(Mutex::new(session)),
            reply_pending: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A fresh engine honoring `QUESTION_SEED`.
    pub fn new_engine(&self) -> ConversationEngine {
        new_engine(&self.config)
    }

    /// Claims the in-flight slot. Returns `None` if another reply is still pending.
    pub fn begin_reply(&self) -> Option<PendingReply> {
        let already = self.reply_pending.swap(true, Ordering::AcqRel);
        (!already).then(|| PendingReply {
            flag: Arc::clone(&self.reply_pending),
        })
    }
}

/// Releases the in-flight slot when dropped, including on early return or cancellation.
pub struct PendingReply {
    flag: Arc<AtomicBool>,
}

impl Drop for PendingReply {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

fn new_engine(config: &Config) -> ConversationEngine {
    match config.question_seed {
        Some(seed) => ConversationEngine::seeded(seed),
        None => ConversationEngine::default(),
    }
}
