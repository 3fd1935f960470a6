//! Type-safe clients for the three backend services.
//!
//! Each client owns one lazily-connected [`Channel`](crate::transport::Channel)
//! and exposes one method per remote operation. The shared pieces live here
//! too: the [`ServiceClient`] lifecycle trait and the private dispatch helper
//! every operation runs through.

mod dispatch;

pub mod assistant;
pub mod notification;
pub mod service_client;
pub mod user;

pub use assistant::*;
pub use notification::*;
pub use service_client::*;
pub use user::*;
