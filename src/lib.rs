//! Jinshi - conversational AI dispatch service
//!
//! This library provides the core functionality for the Jinshi chat service:
//! a model catalog, a chat dispatcher that forwards user messages to a
//! hosted chat-completions provider with conversation history replay, and
//! the HTTP surface exposing them.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod history;
pub mod routes;
pub mod splash;
pub mod upstream;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::catalog::{ModelCatalog, ModelConfig, DEFAULT_MODEL_ID};
pub use crate::chat::{ChatDispatcher, ChatOptions, ReplyFormat};
pub use crate::config::Config;
pub use crate::error::{ChatError, ChatResult};
pub use crate::history::{HistoryStore, InMemoryHistory, StoredTurn};
pub use crate::upstream::CompletionsClient;

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Read-only model catalog, built once at startup
    pub catalog: Arc<ModelCatalog>,
    /// Conversation history collaborator
    pub history: Arc<dyn HistoryStore>,
    /// Dispatcher wiring catalog, history, and the upstream client
    pub dispatcher: Arc<ChatDispatcher>,
}

impl AppState {
    /// Create a new application state with the default in-memory history
    pub fn new(config: Config) -> Result<Self> {
        let history: Arc<dyn HistoryStore> = Arc::new(InMemoryHistory::new());
        Self::with_history(config, history)
    }

    /// Create a new application state over an explicit history store
    pub fn with_history(config: Config, history: Arc<dyn HistoryStore>) -> Result<Self> {
        // Connection pooling only; no per-call timeout beyond transport defaults
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        let catalog = Arc::new(ModelCatalog::builtin(
            &config.groq_api_url,
            config.groq_api_key.clone(),
        ));

        let dispatcher = Arc::new(ChatDispatcher::new(
            catalog.clone(),
            history.clone(),
            CompletionsClient::new(http_client),
            ReplyFormat::default(),
        ));

        Ok(Self {
            config,
            start_time: Instant::now(),
            catalog,
            history,
            dispatcher,
        })
    }
}
