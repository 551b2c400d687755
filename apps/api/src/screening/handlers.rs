use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::message::Message;
use crate::screening::engine::ConversationState;
use crate::screening::session::{ChatSession, ProfileView, SessionSnapshot};
use crate::state::AppState;

/// Longest accepted candidate message, in characters.
pub const MAX_INPUT_CHARS: usize = 4000;

#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

#[derive(Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub messages: Vec<Message>,
    pub state: ConversationState,
}

/// GET /api/v1/session
pub async fn handle_get_session(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = state.session.lock().await;
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/session/messages
pub async fn handle_send_message(
    State(state): State<AppState>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<SendMessageResponse>, AppError> {
    let Json(req) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    if req.text.chars().count() > MAX_INPUT_CHARS {
        return Err(AppError::Validation(format!(
            "Message exceeds {MAX_INPUT_CHARS} characters"
        )));
    }

    // Input stays disabled while a reply is pending: reject rather than queue.
    let _pending = state
        .begin_reply()
        .ok_or_else(|| AppError::Conflict("A reply is still pending".to_string()))?;

    let delay = state.config.reply_delay();
    if !req.text.trim().is_empty() && !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let mut session = state.session.lock().await;
    let messages = session.exchange(&req.text);
    Ok(Json(SendMessageResponse {
        messages,
        state: session.state(),
    }))
}

/// GET /api/v1/session/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<ProfileView>, AppError> {
    let session = state.session.lock().await;
    Ok(Json(session.profile()))
}

/// POST /api/v1/session/reset
pub async fn handle_reset_session(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = state.session.lock().await;
    *session = ChatSession::open(state.new_engine());
    info!("Started new screening session {}", session.id());
    Ok(Json(session.snapshot()))
}
