//! Upstream chat completions client
//!
//! Performs the single HTTP call to a provider's OpenAI-compatible endpoint.
//! No retries; the transport's defaults govern timeouts.

use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::{
    catalog::ModelConfig,
    chat::types::ChatCompletionRequest,
    error::{ChatError, ChatResult},
};

/// Client for `POST {api_base}/chat/completions`
#[derive(Clone)]
pub struct CompletionsClient {
    client: reqwest::Client,
}

impl CompletionsClient {
    /// Create a new client over a shared reqwest instance
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Send one chat completion request to the model's backend
    ///
    /// Returns the decoded JSON body on 2xx. A non-success status becomes
    /// `ChatError::UpstreamStatus`; a body that is not valid JSON surfaces
    /// the transport error.
    pub async fn chat_completions(
        &self,
        model: &ModelConfig,
        request: &ChatCompletionRequest,
    ) -> ChatResult<serde_json::Value> {
        let url = format!("{}/chat/completions", model.api_base);
        debug!(url = %url, model = %model.model_id, messages = request.messages.len(), "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(model.api_key.as_deref().unwrap_or_default())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::UpstreamStatus(status.as_u16()));
        }

        let body = response.json().await?;
        Ok(body)
    }
}
