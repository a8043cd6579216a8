//! The approval review surface.
//!
//! `ReviewEngine` is the facade the host drives: it owns the collections,
//! projects the feed, authorizes and dispatches actions, coordinates bulk
//! selections, and renders details and exports.

pub mod bulk;
pub mod service;

pub use bulk::BulkOutcome;
pub use service::ReviewEngine;
