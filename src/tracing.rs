//! # Observability & Tracing
//!
//! Structured logging for the client layer, built on the `tracing` crate.
//!
//! Failure translation makes logs the only place a caller can find out *why*
//! an operation returned its failure shape: every failed call is logged at
//! `error` level with the operation name and the underlying failure text
//! before it is collapsed to `None` / `false`.
//!
//! ## What Gets Traced
//!
//! - **Channel lifecycle**: dials and closes, with the endpoint (`debug`)
//! - **Operations**: one span per public client method, plus a
//!   `Remote call succeeded` / `Remote call failed` event per call
//! - **Failures**: operation name and failure detail at `error` level
//!
//! ## Usage Examples
//!
//! ```bash
//! # Operation failures only
//! RUST_LOG=error cargo test
//!
//! # Include dials, closes and per-call success events
//! RUST_LOG=debug cargo test
//!
//! # Filter to this crate
//! RUST_LOG=service_clients=debug cargo test
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the span names carry the context
        .compact() // Compact format shows spans inline (e.g., "improve_text")
        .init();
}
