use async_trait::async_trait;
use tracing::instrument;

use super::dispatch::dispatch;
use super::service_client::ServiceClient;
use crate::model::{Tariff, UserId, UserInfo};
use crate::transport::{Channel, Connector, Endpoint};
use crate::wire::user::{
    GetUserInfoRequest, UserInfoResponse, UserRpc, WriteOffConsultationRequest,
};

/// Client for the user/account backend.
pub struct UserClient {
    channel: Channel<dyn UserRpc>,
}

impl UserClient {
    /// Default port of the user backend.
    pub const DEFAULT_PORT: u16 = 50051;

    /// Creates a client for the user backend on `localhost`.
    pub fn new(connector: impl Connector<dyn UserRpc> + 'static) -> Self {
        Self::with_endpoint(Endpoint::localhost(Self::DEFAULT_PORT), connector)
    }

    /// Creates a client for an explicit endpoint.
    pub fn with_endpoint(
        endpoint: Endpoint,
        connector: impl Connector<dyn UserRpc> + 'static,
    ) -> Self {
        Self {
            channel: Channel::new(endpoint, connector),
        }
    }

    /// Fetches the full profile of a user: subscription plan, dates, usage
    /// counters, capability flags. `None` on any failure.
    #[instrument(skip(self))]
    pub async fn get_user_info(&self, user_id: UserId) -> Option<UserInfo> {
        dispatch(
            &self.channel,
            "get_user_info",
            move || Ok(GetUserInfoRequest { user_id: user_id.0 }),
            |stub, wire| async move { stub.get_user_info(wire).await },
            unmarshal_profile,
        )
        .await
        .ok()
    }

    /// Books one consultation against the user's quota. `true` when the
    /// backend acknowledged the write-off.
    #[instrument(skip(self))]
    pub async fn write_off_consultation(&self, user_id: UserId) -> bool {
        dispatch(
            &self.channel,
            "write_off_consultation",
            move || Ok(WriteOffConsultationRequest { user_id: user_id.0 }),
            |stub, wire| async move { stub.write_off_consultation(wire).await },
            |_ack| (),
        )
        .await
        .is_ok()
    }
}

#[async_trait]
impl ServiceClient for UserClient {
    type Stub = dyn UserRpc;

    fn channel(&self) -> &Channel<dyn UserRpc> {
        &self.channel
    }
}

fn unmarshal_profile(response: UserInfoResponse) -> UserInfo {
    UserInfo {
        user_id: UserId(response.user_id),
        tariff: Tariff {
            id: response.tariff.id,
            name: response.tariff.name,
            description: response.tariff.description,
            price: response.tariff.price,
            features: response.tariff.features,
        },
        start_date: response.start_date,
        end_date: response.end_date,
        count_lawyers: response.count_lawyers,
        consultations_total: response.consultations_total,
        consultations_used: response.consultations_used,
        can_use_ai: response.can_use_ai,
        can_create_custom_templates: response.can_create_custom_templates,
        unlimited_documents: response.unlimited_documents,
    }
}
