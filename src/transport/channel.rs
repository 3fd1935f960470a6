use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use super::{Endpoint, Status};

/// Strategy that establishes the connection to one backend service.
///
/// A connector dials an [`Endpoint`] and yields the service's stub, the
/// typed handle every remote call goes through. Production connectors wrap a
/// real transport binding; test connectors hand out prepared stubs (see
/// [`mock`](crate::mock)).
#[async_trait]
pub trait Connector<S: ?Sized + Send + Sync>: Send + Sync {
    /// Dials the endpoint and returns the connected stub.
    async fn connect(&self, endpoint: &Endpoint) -> Result<Arc<S>, Status>;
}

/// Connection state of a [`Channel`].
enum ChannelState<S: ?Sized> {
    Unconnected,
    Connected(Arc<S>),
    Closed,
}

/// Lazily-connected handle to one backend endpoint.
///
/// A channel owns at most one live connection. Nothing is dialed at
/// construction time; the first call to [`ensure_connected`](Channel::ensure_connected)
/// establishes the connection and every later call reuses it. [`close`](Channel::close)
/// releases the connection permanently: a closed channel never reconnects,
/// a new one must be constructed instead.
///
/// # Architecture Note
/// The state lock is held across the dial. Concurrent first calls therefore
/// serialize on the lock and only the first of them dials; the rest find the
/// connected state when they acquire it. Once connected, callers leave the
/// lock scope with their own `Arc` clone of the stub, so in-flight calls
/// share the connection without any locking of their own.
pub struct Channel<S: ?Sized + Send + Sync> {
    endpoint: Endpoint,
    connector: Box<dyn Connector<S>>,
    state: Mutex<ChannelState<S>>,
}

impl<S: ?Sized + Send + Sync> Channel<S> {
    /// Creates an unconnected channel for the given endpoint.
    pub fn new(endpoint: Endpoint, connector: impl Connector<S> + 'static) -> Self {
        Self {
            endpoint,
            connector: Box::new(connector),
            state: Mutex::new(ChannelState::Unconnected),
        }
    }

    /// The endpoint this channel dials.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the connected stub, dialing on first use.
    ///
    /// Idempotent while the channel is open: the second and every later call
    /// return a clone of the same stub. A failed dial leaves the channel
    /// unconnected, so the next call dials again: one attempt per call,
    /// never more. After [`close`](Channel::close) this returns an
    /// unavailable [`Status`] instead.
    pub async fn ensure_connected(&self) -> Result<Arc<S>, Status> {
        let mut state = self.state.lock().await;
        match &*state {
            ChannelState::Connected(stub) => Ok(Arc::clone(stub)),
            ChannelState::Closed => Err(Status::unavailable(format!(
                "channel to {} is closed",
                self.endpoint
            ))),
            ChannelState::Unconnected => {
                debug!(endpoint = %self.endpoint, "establishing connection");
                let stub = self.connector.connect(&self.endpoint).await?;
                *state = ChannelState::Connected(Arc::clone(&stub));
                Ok(stub)
            }
        }
    }

    /// Releases the connection and marks the channel closed.
    ///
    /// Idempotent: closing an already-closed channel is a no-op. Calls that
    /// are in flight when the channel closes finish on their own stub clones;
    /// only new calls observe the closed state.
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        if !matches!(*state, ChannelState::Closed) {
            debug!(endpoint = %self.endpoint, "closing channel");
        }
        *state = ChannelState::Closed;
    }

    /// True while a live connection is held.
    pub async fn is_connected(&self) -> bool {
        matches!(*self.state.lock().await, ChannelState::Connected(_))
    }

    /// True once [`close`](Channel::close) has been called.
    pub async fn is_closed(&self) -> bool {
        matches!(*self.state.lock().await, ChannelState::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    trait Probe: Send + Sync + std::fmt::Debug {
        fn marker(&self) -> &'static str;
    }

    #[derive(Debug)]
    struct StaticProbe(&'static str);

    impl Probe for StaticProbe {
        fn marker(&self) -> &'static str {
            self.0
        }
    }

    /// Dial-counting connector; optionally fails the first N attempts.
    struct CountingConnector {
        dials: Arc<AtomicUsize>,
        fail_first: usize,
    }

    #[async_trait]
    impl Connector<dyn Probe> for CountingConnector {
        async fn connect(&self, endpoint: &Endpoint) -> Result<Arc<dyn Probe>, Status> {
            // Widen the race window so concurrent first calls overlap the dial.
            tokio::time::sleep(Duration::from_millis(5)).await;
            let attempt = self.dials.fetch_add(1, Ordering::SeqCst);
            if attempt < self.fail_first {
                return Err(Status::unavailable(format!(
                    "connection to {} refused",
                    endpoint
                )));
            }
            Ok(Arc::new(StaticProbe("connected")))
        }
    }

    fn channel(fail_first: usize) -> (Channel<dyn Probe>, Arc<AtomicUsize>) {
        let dials = Arc::new(AtomicUsize::new(0));
        let connector = CountingConnector {
            dials: Arc::clone(&dials),
            fail_first,
        };
        (Channel::new(Endpoint::localhost(50051), connector), dials)
    }

    #[tokio::test]
    async fn test_dials_once_and_reuses_the_connection() {
        let (channel, dials) = channel(0);

        let first = channel
            .ensure_connected()
            .await
            .expect("First call should connect");
        let second = channel
            .ensure_connected()
            .await
            .expect("Second call should reuse the connection");

        assert_eq!(first.marker(), "connected");
        assert_eq!(second.marker(), "connected");
        assert_eq!(dials.load(Ordering::SeqCst), 1, "Only one dial should happen");
        assert!(channel.is_connected().await);
    }

    #[tokio::test]
    async fn test_concurrent_first_calls_share_one_dial() {
        let (channel, dials) = channel(0);
        let channel = Arc::new(channel);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let channel = Arc::clone(&channel);
            handles.push(tokio::spawn(
                async move { channel.ensure_connected().await },
            ));
        }
        for handle in handles {
            handle
                .await
                .expect("Task should not panic")
                .expect("Every concurrent call should connect");
        }

        assert_eq!(
            dials.load(Ordering::SeqCst),
            1,
            "Concurrent first calls must not dial twice"
        );
    }

    #[tokio::test]
    async fn test_failed_dial_leaves_the_channel_unconnected() {
        let (channel, dials) = channel(1);

        let err = channel
            .ensure_connected()
            .await
            .expect_err("First dial is scripted to fail");
        assert_eq!(err.code(), crate::transport::Code::Unavailable);
        assert!(!channel.is_connected().await);

        channel
            .ensure_connected()
            .await
            .expect("Next call should dial again and succeed");
        assert_eq!(dials.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_close_is_idempotent_and_terminal() {
        let (channel, dials) = channel(0);
        channel
            .ensure_connected()
            .await
            .expect("Initial connect should succeed");

        channel.close().await;
        channel.close().await;
        assert!(channel.is_closed().await);

        let err = channel
            .ensure_connected()
            .await
            .expect_err("A closed channel must not reconnect");
        assert_eq!(err.code(), crate::transport::Code::Unavailable);
        assert_eq!(dials.load(Ordering::SeqCst), 1, "Close must not trigger a dial");
    }
}
