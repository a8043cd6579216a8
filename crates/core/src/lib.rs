//! Approval & claims workflow engine for Opsdesk.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. The host console owns the entity collections and the
//! rendering; this engine owns the unified review queue built over them.
//!
//! # Modules
//!
//! - `entity` - Request record shapes and status vocabularies
//! - `access` - Role/module visibility and approver checks
//! - `policy` - Monetary-risk warnings over configurable thresholds
//! - `workflow` - Per-kind status transition rules
//! - `store` - In-memory collections with replace-swap mutation
//! - `feed` - Aggregation, filtering, and detail projection
//! - `export` - CSV export of the filtered feed
//! - `review` - The engine facade tying the above together
//! - `format` - Locale formatting seam supplied by the host

pub mod access;
pub mod entity;
pub mod export;
pub mod feed;
pub mod format;
pub mod policy;
pub mod review;
pub mod store;
pub mod workflow;
