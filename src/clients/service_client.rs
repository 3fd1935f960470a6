use async_trait::async_trait;

use crate::transport::{Channel, Endpoint, Status};

/// Shared connection lifecycle for every backend client.
///
/// Concrete clients expose their domain operations themselves; this trait
/// contributes the lifecycle surface (`connect`, `close`, `endpoint`) as
/// default methods over one required accessor, so it behaves identically
/// across all backends.
///
/// Connecting explicitly is never required: the first operation dials on its
/// own. `connect` exists for callers that want the dial to happen at a
/// predictable point, such as startup.
#[async_trait]
pub trait ServiceClient: Send + Sync {
    /// Stub type the client's channel yields once connected.
    type Stub: ?Sized + Send + Sync;

    /// The channel owning this client's connection.
    fn channel(&self) -> &Channel<Self::Stub>;

    /// Address of the backend this client talks to.
    fn endpoint(&self) -> &Endpoint {
        self.channel().endpoint()
    }

    /// Establishes the connection now instead of on first use.
    ///
    /// Idempotent while the client is open; returns an unavailable
    /// [`Status`] once the client has been closed.
    async fn connect(&self) -> Result<(), Status> {
        self.channel().ensure_connected().await.map(|_| ())
    }

    /// Releases the connection.
    ///
    /// Idempotent. A closed client never reconnects; construct a new one
    /// instead; operations called after close return their failure shape.
    async fn close(&self) {
        self.channel().close().await;
    }
}
