//! Configuration management for Jinshi
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Default Groq-hosted OpenAI-compatible API base
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Base URL of the chat completions provider
    pub groq_api_url: String,
    /// Provider credential; absence triggers a configuration error per call
    pub groq_api_key: Option<String>,

    /// Show the startup progress presenter
    pub splash_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("JINSHI_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("JINSHI_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid JINSHI_PORT")?,

            groq_api_url: env::var("GROQ_API_URL")
                .unwrap_or_else(|_| DEFAULT_GROQ_API_URL.to_string()),
            groq_api_key: env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty()),

            splash_enabled: env::var("JINSHI_SPLASH")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        })
    }
}
