//! Chat dispatcher
//!
//! Assembles a provider request from the caller's message, the selected
//! model, and any prior turns, performs one upstream call, and records both
//! sides of the exchange. `dispatch` keeps errors typed; `send` is the
//! string channel existing callers consume.

use std::sync::Arc;

use tracing::{error, info};

use crate::{
    catalog::ModelCatalog,
    chat::types::{
        extract_reply, ChatCompletionRequest, ChatMessage, Content, Role, MAX_TOKENS, TEMPERATURE,
    },
    error::{ChatError, ChatResult},
    history::{HistoryStore, StoredTurn},
    upstream::CompletionsClient,
};

/// Per-call options for a dispatch
///
/// All fields are optional. History is read and written only when both
/// `chat_id` and `sender_id` are present; otherwise the call is stateless.
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    /// Model id to use; the catalog default when absent
    pub model: Option<String>,
    /// Image reference to attach to the new turn
    pub image_url: Option<String>,
    /// Conversation thread id
    pub chat_id: Option<String>,
    /// Sender id within the thread
    pub sender_id: Option<String>,
}

/// User-facing reply rendering
///
/// The default strings are a compatibility surface; callers that need a
/// different presentation override them at construction.
#[derive(Debug, Clone)]
pub struct ReplyFormat {
    /// Prefix for rendered errors
    pub error_prefix: String,
    /// Substitute reply when the provider returns no content
    pub no_reply: String,
}

impl Default for ReplyFormat {
    fn default() -> Self {
        Self {
            error_prefix: "❌ Error: ".to_string(),
            no_reply: "⚠️ No response from AI.".to_string(),
        }
    }
}

/// Chat dispatcher over a catalog, a history store, and an upstream client
pub struct ChatDispatcher {
    catalog: Arc<ModelCatalog>,
    history: Arc<dyn HistoryStore>,
    upstream: CompletionsClient,
    format: ReplyFormat,
}

impl ChatDispatcher {
    /// Create a new dispatcher
    pub fn new(
        catalog: Arc<ModelCatalog>,
        history: Arc<dyn HistoryStore>,
        upstream: CompletionsClient,
        format: ReplyFormat,
    ) -> Self {
        Self {
            catalog,
            history,
            upstream,
            format,
        }
    }

    /// Dispatch a message and return the reply text or a typed error
    ///
    /// The sequence is linear: resolve model, check credential, replay
    /// history, build the new turn, one upstream call, extract the reply,
    /// then persist both sides on success when a conversation key is
    /// present.
    pub async fn dispatch(&self, message: &str, options: &ChatOptions) -> ChatResult<String> {
        let model = self.catalog.resolve(options.model.as_deref());

        if !model.has_api_key() {
            return Err(ChatError::ApiKeyMissing(model.display_name.clone()));
        }

        // Conversation key: history is touched only when both halves exist
        let conversation = options
            .chat_id
            .as_deref()
            .zip(options.sender_id.as_deref());

        let mut messages: Vec<ChatMessage> = match conversation {
            Some((chat_id, sender_id)) => self
                .history
                .read(chat_id, sender_id)
                .await?
                .into_iter()
                .map(|turn| ChatMessage {
                    role: turn.role,
                    content: Content::Text(turn.content),
                })
                .collect(),
            None => Vec::new(),
        };

        messages.push(ChatMessage {
            role: Role::User,
            content: Content::for_new_turn(
                message,
                options.image_url.as_deref(),
                model.supports_structured_content,
            ),
        });

        let request = ChatCompletionRequest {
            model: model.model_id.clone(),
            messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let body = self.upstream.chat_completions(model, &request).await?;
        let reply = extract_reply(&body)
            .map(str::to_string)
            .unwrap_or_else(|| self.format.no_reply.clone());

        if let Some((chat_id, sender_id)) = conversation {
            self.history
                .write(
                    chat_id,
                    sender_id,
                    StoredTurn::new(Role::User, message, options.image_url.clone()),
                )
                .await?;
            self.history
                .write(
                    chat_id,
                    sender_id,
                    StoredTurn::new(Role::Assistant, reply.clone(), None),
                )
                .await?;
        }

        info!(
            model = %model.model_id,
            stateful = conversation.is_some(),
            reply_len = reply.len(),
            "Chat dispatch completed"
        );

        Ok(reply)
    }

    /// Dispatch a message, rendering any failure as a user-facing string
    ///
    /// Always yields text: either the model's reply or a rendered error.
    /// Nothing propagates past this boundary.
    pub async fn send(&self, message: &str, options: &ChatOptions) -> String {
        match self.dispatch(message, options).await {
            Ok(reply) => reply,
            Err(err) => {
                error!(error = %err, "Chat dispatch failed");
                format!("{}{}", self.format.error_prefix, err)
            }
        }
    }
}
