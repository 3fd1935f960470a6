#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Service Clients
//!
//! > **Typed async clients for the platform's backend services.**
//!
//! This crate is the access layer an application uses to talk to three
//! independent backends (the AI assistant, the notification dispatcher, and
//! the user/account service) through one uniform contract: lazy connection
//! establishment, DTO-to-wire marshaling, and a single failure-translation
//! policy applied identically to every remote operation.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One call contract, three backends
//!
//! Callers never see transport errors. Every operation returns either
//! `Option<T>` (payload calls) or `bool` (acknowledgment calls); any failure
//! (connection refused, server error, unmarshalable payload) collapses
//! into `None` / `false` after being logged with its root cause. Callers get
//! a uniform, crash-free contract; diagnostics live in the logs.
//!
//! ### Connect lazily, exactly once
//!
//! Constructing a client is free: nothing dials until the first operation
//! (or an explicit [`connect`](clients::ServiceClient::connect)) runs.
//! The [`Channel`](transport::Channel) holds its state lock across the dial,
//! so concurrent first calls share one connection instead of racing to
//! create duplicates. `close` is terminal: a closed client is done, build a
//! new one instead of reconnecting.
//!
//! ### Generics: the wrapper written once
//!
//! Each remote call follows the same skeleton: ensure connected, marshal,
//! invoke, unmarshal, translate failures. That skeleton exists once, as a
//! generic helper parameterized by the three per-operation closures, instead
//! of being repeated per method.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Plumbing ([`transport`])
//! - **Role**: endpoint addressing, dial strategy, and the lazily-connected
//!   channel with its `Unconnected → Connected → Closed` lifecycle.
//! - **Key items**: [`Channel`](transport::Channel),
//!   [`Connector`](transport::Connector), [`Status`](transport::Status).
//!
//! ### 2. The Contract ([`wire`])
//! - **Role**: request/response messages mirroring the remote schema, the
//!   per-service `*Rpc` traits real bindings and test doubles implement, and
//!   the generic structured value for free-form payloads.
//! - **Key items**: [`AssistantRpc`](wire::assistant::AssistantRpc),
//!   [`StructValue`](wire::StructValue).
//!
//! ### 3. The Boundary ([`model`])
//! - **Role**: the immutable DTOs callers construct and receive, independent
//!   of wire representation.
//! - **Key items**: [`AiRequest`](model::AiRequest),
//!   [`PushRequest`](model::PushRequest), [`UserInfo`](model::UserInfo).
//!
//! ### 4. The Interface ([`clients`])
//! - **Role**: one client per backend, one method per remote operation, plus
//!   the shared [`ServiceClient`](clients::ServiceClient) lifecycle trait.
//! - **Key items**: [`AssistantClient`](clients::AssistantClient),
//!   [`NotificationClient`](clients::NotificationClient),
//!   [`UserClient`](clients::UserClient).
//!
//! ### Testing ([`mock`])
//! Scripted backends and canned connectors, so clients are testable without
//! a single live service. Used by this crate's own tests and available to
//! downstream ones.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use service_clients::clients::{AssistantClient, ServiceClient};
//! use service_clients::mock::mock_assistant;
//! use service_clients::model::AiRequest;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (backend, connector) = mock_assistant();
//! backend.enqueue_reply("Looks better now.");
//!
//! let client = AssistantClient::new(connector);
//! let reply = client.improve_text(AiRequest::new("Fix grammar")).await;
//! assert_eq!(reply.unwrap().reply, "Looks better now.");
//!
//! client.close().await;
//! backend.verify();
//! # }
//! ```
//!
//! ### Logging
//!
//! ```bash
//! # See why operations returned None/false
//! RUST_LOG=error cargo test
//! ```
//!
//! Call [`tracing::setup_tracing`] once at startup; see that module for the
//! full logging story.

pub mod clients;
pub mod mock;
pub mod model;
pub mod tracing;
pub mod transport;
pub mod wire;

pub use clients::{AssistantClient, NotificationClient, ServiceClient, UserClient};
pub use model::{AiReply, AiRequest, PushRequest, Tariff, UserId, UserInfo};
pub use transport::{Channel, Code, Connector, Endpoint, Status};
