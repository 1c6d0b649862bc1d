//! Conversation history store
//!
//! History is an external collaborator behind a trait: the dispatcher only
//! needs ordered reads and appends per conversation key. The in-memory
//! implementation is the default backend and the substitute used in tests.

mod in_memory;

pub use in_memory::InMemoryHistory;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chat::types::Role;

/// One persisted conversation turn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredTurn {
    /// Author of the turn
    pub role: Role,
    /// Plain text content of the turn
    pub content: String,
    /// Image reference attached to the turn, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// When the turn was recorded
    pub created_at: DateTime<Utc>,
}

impl StoredTurn {
    /// Create a turn stamped with the current time
    pub fn new(role: Role, content: impl Into<String>, image_url: Option<String>) -> Self {
        Self {
            role,
            content: content.into(),
            image_url,
            created_at: Utc::now(),
        }
    }
}

/// External history store contract
///
/// Two different (chat_id, sender_id) keys never share turns. Ordering of
/// turns within a key reflects append order. Concurrent dispatches on the
/// same key may interleave reads and writes; the store guarantees only that
/// each append is atomic.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Read all turns for a conversation key, oldest first
    async fn read(&self, chat_id: &str, sender_id: &str) -> Result<Vec<StoredTurn>>;

    /// Append one turn to a conversation key
    async fn write(&self, chat_id: &str, sender_id: &str, turn: StoredTurn) -> Result<()>;
}
