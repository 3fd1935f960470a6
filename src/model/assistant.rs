use serde::{Serialize, Deserialize};

/// Prompt submitted to the AI assistant.
///
/// One request shape serves all three assistant operations. The tuning
/// fields are optional: leave them `None` and the backend applies its own
/// defaults; they are then omitted from the wire request entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiRequest {
    pub prompt: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl AiRequest {
    /// Creates a request carrying only the prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Sets the sampling temperature forwarded to the backend.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Caps the length of the generated reply.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Text produced by the AI assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiReply {
    pub reply: String,
}
