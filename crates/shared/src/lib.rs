//! Shared types and configuration for Opsdesk.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Policy threshold configuration

pub mod config;
pub mod types;

pub use config::{AppConfig, PolicyConfig};
