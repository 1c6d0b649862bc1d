//! Core message types for chat dispatch
//!
//! Defines roles, content shapes, and the chat completions payload. Content
//! is either a plain string or an ordered sequence of typed parts; which
//! shape goes on the wire depends on the selected model's capability flag.

use serde::{Deserialize, Serialize};

/// Token ceiling for every completion request
pub const MAX_TOKENS: u32 = 1000;

/// Sampling temperature for every completion request
pub const TEMPERATURE: f64 = 0.7;

/// Role of a message participant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User message from the human
    User,
    /// Assistant message from the AI
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Image URL reference for multimodal content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageUrl {
    /// URL of the image (data URL or HTTP URL)
    pub url: String,
}

/// A part of multimodal content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text content
    Text {
        /// The text content
        text: String,
    },
    /// Image URL reference
    ImageUrl {
        /// The image URL details
        image_url: ImageUrl,
    },
}

/// Message content - either plain text or multimodal parts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Content {
    /// Simple text content
    Text(String),
    /// Multimodal content with text and/or images
    Parts(Vec<ContentPart>),
}

impl Content {
    /// Build the outbound content for a new user turn
    ///
    /// Structured models get an ordered part sequence: a text part always,
    /// and an image part appended only when a reference is supplied. Models
    /// without structured support collapse to the plain message string, and
    /// any image reference is dropped from the payload.
    pub fn for_new_turn(message: &str, image_url: Option<&str>, structured: bool) -> Self {
        if !structured {
            return Content::Text(message.to_string());
        }

        let mut parts = vec![ContentPart::Text {
            text: message.to_string(),
        }];
        if let Some(url) = image_url {
            parts.push(ContentPart::ImageUrl {
                image_url: ImageUrl { url: url.to_string() },
            });
        }
        Content::Parts(parts)
    }
}

/// A chat message with role and content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// The role of the message author
    pub role: Role,
    /// The content of the message
    pub content: Content,
}

/// Outbound chat completions payload
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Provider model identifier
    pub model: String,
    /// Conversation turns in order, ending with the new user turn
    pub messages: Vec<ChatMessage>,
    /// Completion token ceiling
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f64,
}

/// Extract the reply text from a chat completions response body
///
/// Mirrors the provider contract `choices[0].message.content`; any other
/// shape, including an empty reply string, yields `None` and the caller
/// substitutes its placeholder reply.
pub fn extract_reply(body: &serde_json::Value) -> Option<&str> {
    body.pointer("/choices/0/message/content")
        .and_then(|content| content.as_str())
        .filter(|content| !content.is_empty())
}
