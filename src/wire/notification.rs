use async_trait::async_trait;
use serde::{Serialize, Deserialize};

use super::value::StructValue;
use crate::transport::Status;

/// Parameters of the `SendPushFromUsers` call.
///
/// `user_ids` is always present: an empty list means "no explicit
/// recipients", never an absent field. `is_base` goes on the wire only when
/// the caller set it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendPushFromUsersRequest {
    pub message: StructValue,
    pub user_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_base: Option<bool>,
}

/// Empty acknowledgment returned for a delivered push request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushAck {}

/// Typed calls offered by the notification backend.
///
/// Shares the concurrency contract of [`AssistantRpc`](super::assistant::AssistantRpc):
/// implementations take `&self` and must tolerate concurrent in-flight calls.
#[async_trait]
pub trait NotificationRpc: Send + Sync + 'static {
    async fn send_push_from_users(
        &self,
        request: SendPushFromUsersRequest,
    ) -> Result<PushAck, Status>;
}
