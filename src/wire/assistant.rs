use async_trait::async_trait;
use serde::{Serialize, Deserialize};

use crate::transport::Status;

/// Parameters of the `ImproveText` call.
///
/// `user_prompt` is always sent; the tuning fields go on the wire only when
/// the caller supplied them, otherwise the backend's defaults apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImproveTextRequest {
    pub user_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Parameters of the `Chat` call. Same field policy as [`ImproveTextRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Parameters of the `CustomTemplate` call. Same field policy as
/// [`ImproveTextRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTemplateRequest {
    pub user_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Response shared by every assistant call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub assistant_reply: String,
}

/// Typed calls offered by the AI assistant backend.
///
/// This is the seam between the client layer and the transport: production
/// bindings and test doubles both implement it. Implementations must accept
/// concurrent calls on a shared instance: every method takes `&self` and the
/// channel hands the same `Arc` to all in-flight operations.
#[async_trait]
pub trait AssistantRpc: Send + Sync + 'static {
    async fn improve_text(&self, request: ImproveTextRequest) -> Result<AssistantReply, Status>;

    async fn chat(&self, request: ChatRequest) -> Result<AssistantReply, Status>;

    async fn custom_template(
        &self,
        request: CustomTemplateRequest,
    ) -> Result<AssistantReply, Status>;
}
