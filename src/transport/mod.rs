//! # Transport Layer
//!
//! This module owns everything between a service client and the wire:
//!
//! - [`Endpoint`]: The network address of one backend service.
//! - [`Status`]: The error signal a transport reports for a failed call.
//! - [`Connector`]: The strategy that dials an endpoint and yields a stub.
//! - [`Channel`]: The lazily-connected handle owning at most one connection.
//!
//! # Testing
//!
//! See the [`mock`](crate::mock) module for connectors that dial prepared
//! stubs instead of real backends.

pub mod channel;
pub mod endpoint;
pub mod status;

pub use channel::*;
pub use endpoint::*;
pub use status::*;
