//! # Wire Layer
//!
//! The messages and typed call interfaces of the three backends. Everything
//! here mirrors the remote contract one-to-one: request/response structs are
//! plain field copies, and the per-service `*Rpc` traits stand in for the
//! transport's generated stubs so that real bindings and test doubles are
//! interchangeable.
//!
//! The odd one out is [`value`], the generic structured value the
//! notification backend accepts for free-form payloads, with its fallible
//! conversion from `serde_json` data.

pub mod assistant;
pub mod notification;
pub mod user;
pub mod value;

pub use assistant::*;
pub use notification::*;
pub use user::*;
pub use value::*;
