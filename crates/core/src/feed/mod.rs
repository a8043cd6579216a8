//! The unified review feed.
//!
//! Projects the five collections into one ordered sequence of
//! `ApprovalItem`s, partitions it into pending/history, and narrows it by
//! kind and free-text query. Everything here is a pure function of the
//! collections; mutation lives in `workflow` and `store`.
//!
//! # Modules
//!
//! - `types` - `ApprovalItem` and the non-owning `RequestRef`
//! - `aggregate` - Projection and ordering
//! - `filter` - Tab partition, kind filter, text search
//! - `detail` - Detail-drawer field resolution

pub mod aggregate;
pub mod detail;
pub mod filter;
pub mod types;

#[cfg(test)]
mod filter_props;

pub use aggregate::build_feed;
pub use detail::{DetailField, detail_fields};
pub use filter::{FeedFilter, FeedTab, filter_feed};
pub use types::{ApprovalItem, RequestRef};
