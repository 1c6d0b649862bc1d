//! In-memory history store
//!
//! Keeps conversation turns in a HashMap keyed by (chat_id, sender_id).
//! Append order is preserved per key.
//!
//! # Thread Safety
//!
//! Uses RwLock for interior mutability, allowing concurrent reads.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use super::{HistoryStore, StoredTurn};

/// In-memory conversation history
#[derive(Default)]
pub struct InMemoryHistory {
    data: RwLock<HashMap<(String, String), Vec<StoredTurn>>>,
}

impl InMemoryHistory {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of turns stored for a conversation key
    pub fn turn_count(&self, chat_id: &str, sender_id: &str) -> usize {
        let data = self.data.read().unwrap();
        data.get(&(chat_id.to_string(), sender_id.to_string()))
            .map(|turns| turns.len())
            .unwrap_or(0)
    }

    /// Clear all conversations (useful for test isolation)
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        data.clear();
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistory {
    async fn read(&self, chat_id: &str, sender_id: &str) -> Result<Vec<StoredTurn>> {
        let data = self.data.read().unwrap();
        Ok(data
            .get(&(chat_id.to_string(), sender_id.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn write(&self, chat_id: &str, sender_id: &str, turn: StoredTurn) -> Result<()> {
        let mut data = self.data.write().unwrap();
        data.entry((chat_id.to_string(), sender_id.to_string()))
            .or_default()
            .push(turn);
        Ok(())
    }
}
