//! Chat endpoint.
//!
//! POST /api/v1/chat - send one message through the shared session and
//! return the reply. The session mutex is held across the full remote
//! call, so concurrent requests are serialized rather than interleaved.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::warn;

use confab_core::archive::ConversationArchive;

use crate::http::error::AppError;
use crate::state::{AppState, ChatState};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/v1/chat - one message in, one reply out.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if body.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }

    let mut chat = state.chat.lock().await;
    let reply = chat.session.send(body.message.clone()).await?;

    persist_exchange(&mut chat, &body.message, &reply).await;

    Ok(Json(ChatResponse { response: reply }))
}

/// Record the exchange in the archive, if one is configured.
///
/// Best-effort: a storage failure is logged and the reply still goes
/// out, since the session itself already holds the authoritative state.
async fn persist_exchange(chat: &mut ChatState, message: &str, reply: &str) {
    let Some(archive) = &chat.archive else {
        return;
    };

    let conversation_id = match chat.conversation_id {
        Some(id) => id,
        None => match archive.save_conversation("web", message).await {
            Ok(id) => {
                chat.conversation_id = Some(id);
                id
            }
            Err(e) => {
                warn!(error = %e, "failed to create archived conversation");
                return;
            }
        },
    };

    if let Err(e) = archive.save_turn(conversation_id, message, "user").await {
        warn!(error = %e, "failed to archive user turn");
    }
    if let Err(e) = archive.save_turn(conversation_id, reply, "assistant").await {
        warn!(error = %e, "failed to archive assistant turn");
    }
}
