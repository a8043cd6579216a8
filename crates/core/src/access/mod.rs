//! Role-based visibility and approver checks.
//!
//! # Modules
//!
//! - `types` - `Module`, `PermissionLevel`, `Role`
//! - `service` - Stateless visibility/approver checks

pub mod service;
pub mod types;

pub use service::AccessService;
pub use types::{Module, PermissionLevel, Role};
