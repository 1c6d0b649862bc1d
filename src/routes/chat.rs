//! Chat endpoint
//!
//! Forwards a user message through the dispatcher. The response is always
//! 200 with a reply string: provider failures are rendered into the reply
//! text, never surfaced as HTTP errors.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{chat::ChatOptions, AppState};

/// Chat request body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The user's message text
    pub message: String,
    /// Model id; the catalog default when absent
    #[serde(default)]
    pub model: Option<String>,
    /// Image reference to attach
    #[serde(default)]
    pub image_url: Option<String>,
    /// Conversation thread id; with `sender_id`, enables history
    #[serde(default)]
    pub chat_id: Option<String>,
    /// Sender id within the thread
    #[serde(default)]
    pub sender_id: Option<String>,
}

/// Chat response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The model's reply, or a rendered error string
    pub reply: String,
}

/// Handle a chat request
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    info!(
        model = ?request.model,
        chat_id = ?request.chat_id,
        has_image = request.image_url.is_some(),
        "Processing chat request"
    );

    let options = ChatOptions {
        model: request.model,
        image_url: request.image_url,
        chat_id: request.chat_id,
        sender_id: request.sender_id,
    };

    let reply = state.dispatcher.send(&request.message, &options).await;
    Json(ChatResponse { reply })
}
