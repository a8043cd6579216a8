//! Request lifecycle state machine.
//!
//! One generic action surface (approve / reject / pay) over five
//! kind-specific transition tables.
//!
//! # Modules
//!
//! - `types` - `ApprovalAction` and the dispatched `ActionInput`
//! - `error` - `ActionError` taxonomy
//! - `service` - Per-kind transition rules

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::ActionError;
pub use service::WorkflowService;
pub use types::{ActionInput, ApprovalAction};
