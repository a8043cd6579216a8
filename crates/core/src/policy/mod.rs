//! Monetary-risk policy checks.
//!
//! Two independent thresholds (claim creation, review escalation) loaded
//! from one configuration table; see `opsdesk_shared::PolicyConfig`.

pub mod evaluator;

pub use evaluator::{CLAIM_WARNING, ESCALATION_WARNING, PolicyEvaluator};
