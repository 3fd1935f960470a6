//! # Mock Backends
//!
//! Utilities for testing clients without live services.
//!
//! Each backend has a scripted stand-in implementing its wire trait: queue
//! outcomes with the `enqueue_*` methods, run the client, then inspect the
//! recorded wire requests with `calls()` and check the script was fully
//! consumed with `verify()`. The `mock_*` constructors return the mock
//! together with a dial-counting [`StubConnector`] ready to hand to a
//! client.
//!
//! # Example
//! ```ignore
//! let (backend, connector) = mock_assistant();
//! backend.enqueue_reply("Fixed.");
//!
//! let client = AssistantClient::new(connector.clone());
//! let reply = client.improve_text(AiRequest::new("Fix grammar")).await;
//!
//! assert_eq!(reply.unwrap().reply, "Fixed.");
//! assert_eq!(connector.dials(), 1);
//! backend.verify();
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::transport::{Connector, Endpoint, Status};
use crate::wire::assistant::{
    AssistantReply, AssistantRpc, ChatRequest, CustomTemplateRequest, ImproveTextRequest,
};
use crate::wire::notification::{NotificationRpc, PushAck, SendPushFromUsersRequest};
use crate::wire::user::{
    GetUserInfoRequest, UserInfoResponse, UserRpc, WriteOffAck, WriteOffConsultationRequest,
};

// =============================================================================
// CONNECTORS
// =============================================================================

/// Connector that "dials" by handing out a prepared stub.
///
/// Counts dials so tests can assert that a channel connected exactly once.
/// Clones share the stub and the counter, so keep a clone outside the client
/// to read [`dials`](StubConnector::dials) afterwards.
pub struct StubConnector<S: ?Sized> {
    stub: Arc<S>,
    dials: Arc<AtomicUsize>,
}

impl<S: ?Sized> StubConnector<S> {
    pub fn new(stub: Arc<S>) -> Self {
        Self {
            stub,
            dials: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of dials the owning channel performed through this connector.
    pub fn dials(&self) -> usize {
        self.dials.load(Ordering::SeqCst)
    }
}

impl<S: ?Sized> Clone for StubConnector<S> {
    fn clone(&self) -> Self {
        Self {
            stub: Arc::clone(&self.stub),
            dials: Arc::clone(&self.dials),
        }
    }
}

#[async_trait]
impl<S: ?Sized + Send + Sync + 'static> Connector<S> for StubConnector<S> {
    async fn connect(&self, _endpoint: &Endpoint) -> Result<Arc<S>, Status> {
        self.dials.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::clone(&self.stub))
    }
}

/// Connector whose dial always fails.
pub struct RefusingConnector {
    status: Status,
}

impl RefusingConnector {
    pub fn new(status: Status) -> Self {
        Self { status }
    }

    /// The classic case: nothing is listening on the target port.
    pub fn refused() -> Self {
        Self::new(Status::unavailable("connection refused"))
    }
}

#[async_trait]
impl<S: ?Sized + Send + Sync> Connector<S> for RefusingConnector {
    async fn connect(&self, _endpoint: &Endpoint) -> Result<Arc<S>, Status> {
        Err(self.status.clone())
    }
}

// =============================================================================
// SCRIPTED BACKENDS
// =============================================================================

/// Creates a scripted assistant backend plus a connector that dials it.
pub fn mock_assistant() -> (Arc<MockAssistantRpc>, StubConnector<dyn AssistantRpc>) {
    let mock = Arc::new(MockAssistantRpc::new());
    let connector = StubConnector::new(Arc::clone(&mock) as Arc<dyn AssistantRpc>);
    (mock, connector)
}

/// Creates a scripted notification backend plus a connector that dials it.
pub fn mock_notification() -> (Arc<MockNotificationRpc>, StubConnector<dyn NotificationRpc>) {
    let mock = Arc::new(MockNotificationRpc::new());
    let connector = StubConnector::new(Arc::clone(&mock) as Arc<dyn NotificationRpc>);
    (mock, connector)
}

/// Creates a scripted user backend plus a connector that dials it.
pub fn mock_user() -> (Arc<MockUserRpc>, StubConnector<dyn UserRpc>) {
    let mock = Arc::new(MockUserRpc::new());
    let connector = StubConnector::new(Arc::clone(&mock) as Arc<dyn UserRpc>);
    (mock, connector)
}

/// Wire request captured by [`MockAssistantRpc`].
#[derive(Debug, Clone, PartialEq)]
pub enum AssistantCall {
    ImproveText(ImproveTextRequest),
    Chat(ChatRequest),
    CustomTemplate(CustomTemplateRequest),
}

/// Scripted assistant backend.
///
/// Outcomes are consumed in FIFO order no matter which assistant operation
/// pops them; every wire request is recorded. Calls beyond the script fail
/// with an unimplemented [`Status`].
#[derive(Default)]
pub struct MockAssistantRpc {
    script: Mutex<VecDeque<Result<AssistantReply, Status>>>,
    calls: Mutex<Vec<AssistantCall>>,
}

impl MockAssistantRpc {
    /// Creates a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful reply.
    pub fn enqueue_reply(&self, text: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(AssistantReply {
            assistant_reply: text.into(),
        }));
    }

    /// Scripts a transport failure.
    pub fn enqueue_error(&self, status: Status) {
        self.script.lock().unwrap().push_back(Err(status));
    }

    /// All wire requests received so far, in call order.
    pub fn calls(&self) -> Vec<AssistantCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Panics if scripted outcomes were never consumed.
    pub fn verify(&self) {
        let left = self.script.lock().unwrap().len();
        assert_eq!(left, 0, "{left} scripted outcome(s) were never consumed");
    }

    fn next(&self) -> Result<AssistantReply, Status> {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Status::unimplemented("no scripted outcome left")))
    }
}

#[async_trait]
impl AssistantRpc for MockAssistantRpc {
    async fn improve_text(&self, request: ImproveTextRequest) -> Result<AssistantReply, Status> {
        self.calls
            .lock()
            .unwrap()
            .push(AssistantCall::ImproveText(request));
        self.next()
    }

    async fn chat(&self, request: ChatRequest) -> Result<AssistantReply, Status> {
        self.calls.lock().unwrap().push(AssistantCall::Chat(request));
        self.next()
    }

    async fn custom_template(
        &self,
        request: CustomTemplateRequest,
    ) -> Result<AssistantReply, Status> {
        self.calls
            .lock()
            .unwrap()
            .push(AssistantCall::CustomTemplate(request));
        self.next()
    }
}

/// Scripted notification backend.
#[derive(Default)]
pub struct MockNotificationRpc {
    script: Mutex<VecDeque<Result<PushAck, Status>>>,
    calls: Mutex<Vec<SendPushFromUsersRequest>>,
}

impl MockNotificationRpc {
    /// Creates a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful acknowledgment.
    pub fn enqueue_ack(&self) {
        self.script.lock().unwrap().push_back(Ok(PushAck {}));
    }

    /// Scripts a transport failure.
    pub fn enqueue_error(&self, status: Status) {
        self.script.lock().unwrap().push_back(Err(status));
    }

    /// All wire requests received so far, in call order.
    pub fn calls(&self) -> Vec<SendPushFromUsersRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Panics if scripted outcomes were never consumed.
    pub fn verify(&self) {
        let left = self.script.lock().unwrap().len();
        assert_eq!(left, 0, "{left} scripted outcome(s) were never consumed");
    }
}

#[async_trait]
impl NotificationRpc for MockNotificationRpc {
    async fn send_push_from_users(
        &self,
        request: SendPushFromUsersRequest,
    ) -> Result<PushAck, Status> {
        self.calls.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Status::unimplemented("no scripted outcome left")))
    }
}

/// Wire request captured by [`MockUserRpc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCall {
    GetUserInfo(GetUserInfoRequest),
    WriteOffConsultation(WriteOffConsultationRequest),
}

/// Scripted user backend.
///
/// The two operations return different types, so each keeps its own script
/// queue; requests are still recorded in one shared call order.
#[derive(Default)]
pub struct MockUserRpc {
    profiles: Mutex<VecDeque<Result<UserInfoResponse, Status>>>,
    write_offs: Mutex<VecDeque<Result<WriteOffAck, Status>>>,
    calls: Mutex<Vec<UserCall>>,
}

impl MockUserRpc {
    /// Creates a mock with empty scripts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful profile response.
    pub fn enqueue_profile(&self, profile: UserInfoResponse) {
        self.profiles.lock().unwrap().push_back(Ok(profile));
    }

    /// Scripts a profile fetch failure.
    pub fn enqueue_profile_error(&self, status: Status) {
        self.profiles.lock().unwrap().push_back(Err(status));
    }

    /// Scripts a successful write-off acknowledgment.
    pub fn enqueue_write_off_ack(&self) {
        self.write_offs.lock().unwrap().push_back(Ok(WriteOffAck {}));
    }

    /// Scripts a write-off failure.
    pub fn enqueue_write_off_error(&self, status: Status) {
        self.write_offs.lock().unwrap().push_back(Err(status));
    }

    /// All wire requests received so far, in call order.
    pub fn calls(&self) -> Vec<UserCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Panics if scripted outcomes were never consumed.
    pub fn verify(&self) {
        let profiles = self.profiles.lock().unwrap().len();
        let write_offs = self.write_offs.lock().unwrap().len();
        assert_eq!(
            profiles + write_offs,
            0,
            "{profiles} profile and {write_offs} write-off outcome(s) were never consumed"
        );
    }
}

#[async_trait]
impl UserRpc for MockUserRpc {
    async fn get_user_info(
        &self,
        request: GetUserInfoRequest,
    ) -> Result<UserInfoResponse, Status> {
        self.calls
            .lock()
            .unwrap()
            .push(UserCall::GetUserInfo(request));
        self.profiles
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Status::unimplemented("no scripted outcome left")))
    }

    async fn write_off_consultation(
        &self,
        request: WriteOffConsultationRequest,
    ) -> Result<WriteOffAck, Status> {
        self.calls
            .lock()
            .unwrap()
            .push(UserCall::WriteOffConsultation(request));
        self.write_offs
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Status::unimplemented("no scripted outcome left")))
    }
}
