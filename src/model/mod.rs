//! Pure data structures (DTOs) crossing the application boundary.
//!
//! These are the request and response types callers work with. They carry no
//! wire concerns: the client layer copies them field-by-field into wire
//! messages and back.

pub mod assistant;
pub mod notification;
pub mod user;

pub use assistant::*;
pub use notification::*;
pub use user::*;
