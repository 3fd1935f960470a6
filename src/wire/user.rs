use async_trait::async_trait;
use serde::{Serialize, Deserialize};

use crate::transport::Status;

/// Parameters of the `GetUserInfo` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserInfoRequest {
    pub user_id: i64,
}

/// Subscription plan record nested in [`UserInfoResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub features: Vec<String>,
}

/// Full profile returned by the user backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfoResponse {
    pub user_id: i64,
    pub tariff: TariffRecord,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub count_lawyers: u32,
    pub consultations_total: u32,
    pub consultations_used: u32,
    pub can_use_ai: bool,
    pub can_create_custom_templates: bool,
    pub unlimited_documents: bool,
}

/// Parameters of the `WriteOffConsultation` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOffConsultationRequest {
    pub user_id: i64,
}

/// Empty acknowledgment returned for a booked write-off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOffAck {}

/// Typed calls offered by the user/account backend.
///
/// Shares the concurrency contract of [`AssistantRpc`](super::assistant::AssistantRpc):
/// implementations take `&self` and must tolerate concurrent in-flight calls.
#[async_trait]
pub trait UserRpc: Send + Sync + 'static {
    async fn get_user_info(&self, request: GetUserInfoRequest)
        -> Result<UserInfoResponse, Status>;

    async fn write_off_consultation(
        &self,
        request: WriteOffConsultationRequest,
    ) -> Result<WriteOffAck, Status>;
}
