use async_trait::async_trait;
use tracing::instrument;

use super::dispatch::dispatch;
use super::service_client::ServiceClient;
use crate::model::PushRequest;
use crate::transport::{Channel, Connector, Endpoint};
use crate::wire::notification::{NotificationRpc, SendPushFromUsersRequest};
use crate::wire::StructValue;

/// Client for the notification backend.
///
/// The single operation is an acknowledgment-style call: it returns `true`
/// when the backend accepted the push and `false` on any failure, including
/// a message payload the wire format cannot carry. The root cause lands in
/// the logs.
pub struct NotificationClient {
    channel: Channel<dyn NotificationRpc>,
}

impl NotificationClient {
    /// Default port of the notification backend.
    pub const DEFAULT_PORT: u16 = 50054;

    /// Creates a client for the notification backend on `localhost`.
    pub fn new(connector: impl Connector<dyn NotificationRpc> + 'static) -> Self {
        Self::with_endpoint(Endpoint::localhost(Self::DEFAULT_PORT), connector)
    }

    /// Creates a client for an explicit endpoint.
    pub fn with_endpoint(
        endpoint: Endpoint,
        connector: impl Connector<dyn NotificationRpc> + 'static,
    ) -> Self {
        Self {
            channel: Channel::new(endpoint, connector),
        }
    }

    /// Sends a push notification to the given users.
    #[instrument(skip(self, request))]
    pub async fn send_push_from_users(&self, request: PushRequest) -> bool {
        dispatch(
            &self.channel,
            "send_push_from_users",
            move || {
                let message = StructValue::try_from(request.message)?;
                Ok(SendPushFromUsersRequest {
                    message,
                    // No recipients means an empty list on the wire, never an
                    // absent field.
                    user_ids: request
                        .user_ids
                        .unwrap_or_default()
                        .into_iter()
                        .map(|id| id.0)
                        .collect(),
                    is_base: request.is_base,
                })
            },
            |stub, wire| async move { stub.send_push_from_users(wire).await },
            |_ack| (),
        )
        .await
        .is_ok()
    }
}

#[async_trait]
impl ServiceClient for NotificationClient {
    type Stub = dyn NotificationRpc;

    fn channel(&self) -> &Channel<dyn NotificationRpc> {
        &self.channel
    }
}
