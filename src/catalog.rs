//! Model catalog
//!
//! Static registry of selectable LLM backends. The catalog is built once at
//! startup from configuration and is read-only afterwards. Lookup falls back
//! to the default entry on a miss instead of raising an error, matching the
//! behavior existing callers depend on.

/// Distinguished model id used when a request names no model
pub const DEFAULT_MODEL_ID: &str = "deepseek-r1-distill-llama-70b";

/// Provider marker in a model id that signals structured multimodal payloads
const STRUCTURED_CONTENT_MARKER: &str = "openrouter";

/// Static descriptor of one selectable LLM backend
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Human-readable name shown to users
    pub display_name: String,
    /// Provider model identifier sent in the request payload
    pub model_id: String,
    /// Base URL of the provider's OpenAI-compatible API
    pub api_base: String,
    /// Credential for this backend; `None` means not configured
    pub api_key: Option<String>,
    /// Whether the provider expects structured content parts (text + image)
    /// rather than a plain string
    pub supports_structured_content: bool,
}

impl ModelConfig {
    /// Create a model entry, deriving the structured-content capability from
    /// the provider marker in the model id
    pub fn new(
        display_name: impl Into<String>,
        model_id: impl Into<String>,
        api_base: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        let model_id = model_id.into();
        let supports_structured_content = model_id.contains(STRUCTURED_CONTENT_MARKER);
        Self {
            display_name: display_name.into(),
            model_id,
            api_base: api_base.into(),
            api_key,
            supports_structured_content,
        }
    }

    /// Check whether a credential is configured for this backend
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// Read-only, ordered collection of model configurations
///
/// Invariant: contains at least one entry and model ids are unique.
pub struct ModelCatalog {
    entries: Vec<ModelConfig>,
}

impl ModelCatalog {
    /// Create a catalog from explicit entries
    ///
    /// # Panics
    ///
    /// Panics if `entries` is empty; the catalog needs a fallback entry.
    pub fn new(entries: Vec<ModelConfig>) -> Self {
        assert!(!entries.is_empty(), "model catalog requires at least one entry");
        Self { entries }
    }

    /// Build the built-in catalog of Groq-hosted models, all sharing one
    /// credential
    pub fn builtin(api_base: &str, api_key: Option<String>) -> Self {
        let entry = |name: &str, id: &str| {
            ModelConfig::new(name, id, api_base, api_key.clone())
        };

        Self::new(vec![
            entry(
                "DeepSeek R1 Distill Llama 70B (Top Performance)",
                "deepseek-r1-distill-llama-70b",
            ),
            entry(
                "Llama 3.3 70B Versatile (Best Overall)",
                "llama-3.3-70b-versatile",
            ),
            entry("Gemma2 9B IT (Fast & Efficient)", "gemma2-9b-it"),
            entry(
                "Llama 4 Maverick 17B (Latest)",
                "meta-llama/llama-4-maverick-17b-128e-instruct",
            ),
            entry("Llama 3.1 8B Instant (Ultra Fast)", "llama-3.1-8b-instant"),
        ])
    }

    /// List entries in insertion order
    pub fn list(&self) -> &[ModelConfig] {
        &self.entries
    }

    /// Resolve a model id to its configuration
    ///
    /// Absent ids resolve to the distinguished default. Unknown ids (including
    /// an unknown default) fall back to the first entry; resolution never
    /// fails.
    pub fn resolve(&self, model_id: Option<&str>) -> &ModelConfig {
        let wanted = model_id.unwrap_or(DEFAULT_MODEL_ID);
        self.entries
            .iter()
            .find(|m| m.model_id == wanted)
            .unwrap_or(&self.entries[0])
    }
}
