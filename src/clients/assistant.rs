use async_trait::async_trait;
use tracing::instrument;

use super::dispatch::dispatch;
use super::service_client::ServiceClient;
use crate::model::{AiReply, AiRequest};
use crate::transport::{Channel, Connector, Endpoint};
use crate::wire::assistant::{
    AssistantReply, AssistantRpc, ChatRequest, CustomTemplateRequest, ImproveTextRequest,
};

/// Client for the AI assistant backend.
///
/// Construction never connects; the first operation (or an explicit
/// [`connect`](ServiceClient::connect)) dials the endpoint. Every operation
/// returns `Option<AiReply>`: `Some` on success, `None` on any failure,
/// with the root cause in the logs rather than in the return type.
pub struct AssistantClient {
    channel: Channel<dyn AssistantRpc>,
}

impl AssistantClient {
    /// Default port of the assistant backend.
    pub const DEFAULT_PORT: u16 = 50052;

    /// Creates a client for the assistant backend on `localhost`.
    pub fn new(connector: impl Connector<dyn AssistantRpc> + 'static) -> Self {
        Self::with_endpoint(Endpoint::localhost(Self::DEFAULT_PORT), connector)
    }

    /// Creates a client for an explicit endpoint.
    pub fn with_endpoint(
        endpoint: Endpoint,
        connector: impl Connector<dyn AssistantRpc> + 'static,
    ) -> Self {
        Self {
            channel: Channel::new(endpoint, connector),
        }
    }

    /// Asks the backend to improve the given text.
    #[instrument(skip(self, request))]
    pub async fn improve_text(&self, request: AiRequest) -> Option<AiReply> {
        dispatch(
            &self.channel,
            "improve_text",
            move || {
                Ok(ImproveTextRequest {
                    user_prompt: request.prompt,
                    temperature: request.temperature,
                    max_tokens: request.max_tokens,
                })
            },
            |stub, wire| async move { stub.improve_text(wire).await },
            unmarshal_reply,
        )
        .await
        .ok()
    }

    /// Holds a free-form conversation turn with the backend.
    #[instrument(skip(self, request))]
    pub async fn chat(&self, request: AiRequest) -> Option<AiReply> {
        dispatch(
            &self.channel,
            "chat",
            move || {
                Ok(ChatRequest {
                    user_prompt: request.prompt,
                    temperature: request.temperature,
                    max_tokens: request.max_tokens,
                })
            },
            |stub, wire| async move { stub.chat(wire).await },
            unmarshal_reply,
        )
        .await
        .ok()
    }

    /// Generates a custom document template from the given instructions.
    #[instrument(skip(self, request))]
    pub async fn custom_template(&self, request: AiRequest) -> Option<AiReply> {
        dispatch(
            &self.channel,
            "custom_template",
            move || {
                Ok(CustomTemplateRequest {
                    user_prompt: request.prompt,
                    temperature: request.temperature,
                    max_tokens: request.max_tokens,
                })
            },
            |stub, wire| async move { stub.custom_template(wire).await },
            unmarshal_reply,
        )
        .await
        .ok()
    }
}

#[async_trait]
impl ServiceClient for AssistantClient {
    type Stub = dyn AssistantRpc;

    fn channel(&self) -> &Channel<dyn AssistantRpc> {
        &self.channel
    }
}

fn unmarshal_reply(reply: AssistantReply) -> AiReply {
    AiReply {
        reply: reply.assistant_reply,
    }
}
