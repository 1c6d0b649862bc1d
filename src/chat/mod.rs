//! Chat dispatch
//!
//! Message types and the dispatcher that turns a user message into one
//! provider call plus history bookkeeping.

pub mod dispatcher;
pub mod types;

pub use dispatcher::{ChatDispatcher, ChatOptions, ReplyFormat};
