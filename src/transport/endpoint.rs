use serde::{Serialize, Deserialize};
use std::fmt;

/// Network address of one backend service.
///
/// Endpoints are configuration, not protocol: every client ships a default
/// (`localhost` plus a per-service port) and accepts an override at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    /// Creates an endpoint from a host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Shorthand for a `localhost` endpoint on the given port.
    pub fn localhost(port: u16) -> Self {
        Self::new("localhost", port)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The `host:port` pair in the form a dialer expects.
    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
