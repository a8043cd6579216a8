//! Common type definitions.

pub mod id;

pub use id::{RequestId, UserId};
