//! Monetary-risk warning evaluation.

use rust_decimal::Decimal;

use opsdesk_shared::PolicyConfig;

/// Fixed message stored on claims flagged at creation time.
pub const CLAIM_WARNING: &str = "Amount exceeds the claim review threshold";

/// Fixed message shown on high-value items in the review queue.
pub const ESCALATION_WARNING: &str = "High value - requires escalation";

/// Read-only evaluator over the configured threshold table.
///
/// Warnings are informational: the host must render them before the
/// approver acts, but they never block an action.
#[derive(Debug, Clone)]
pub struct PolicyEvaluator {
    config: PolicyConfig,
}

impl PolicyEvaluator {
    /// Creates an evaluator over the given threshold table.
    #[must_use]
    pub const fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// The threshold table in effect.
    #[must_use]
    pub const fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Creation-time flag for a claim amount.
    ///
    /// Returns the fixed claim warning when the amount strictly exceeds
    /// the claim threshold. A missing amount evaluates as zero.
    #[must_use]
    pub fn claim_warning(&self, amount: Option<Decimal>) -> Option<String> {
        (amount.unwrap_or(Decimal::ZERO) > self.config.claim_threshold)
            .then(|| CLAIM_WARNING.to_string())
    }

    /// Review-surface escalation flag for an item of any kind.
    ///
    /// Returns the escalation warning when the amount strictly exceeds the
    /// escalation threshold. A missing amount evaluates as zero.
    #[must_use]
    pub fn escalation_warning(&self, amount: Option<Decimal>) -> Option<String> {
        (amount.unwrap_or(Decimal::ZERO) > self.config.escalation_threshold)
            .then(|| ESCALATION_WARNING.to_string())
    }
}

impl Default for PolicyEvaluator {
    fn default() -> Self {
        Self::new(PolicyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::below(dec!(999), false)]
    // Strictly-greater comparison: the threshold itself is not flagged.
    #[case::at_threshold(dec!(1000), false)]
    #[case::above(dec!(1001), true)]
    fn test_claim_warning_threshold(#[case] amount: Decimal, #[case] flagged: bool) {
        let evaluator = PolicyEvaluator::default();
        let expected = flagged.then(|| CLAIM_WARNING.to_string());
        assert_eq!(evaluator.claim_warning(Some(amount)), expected);
    }

    #[rstest]
    #[case::at_threshold(dec!(5000), false)]
    #[case::above(dec!(5001), true)]
    fn test_escalation_warning_threshold(#[case] amount: Decimal, #[case] flagged: bool) {
        let evaluator = PolicyEvaluator::default();
        let expected = flagged.then(|| ESCALATION_WARNING.to_string());
        assert_eq!(evaluator.escalation_warning(Some(amount)), expected);
    }

    #[test]
    fn test_missing_amount_evaluates_as_zero() {
        let evaluator = PolicyEvaluator::default();
        assert_eq!(evaluator.claim_warning(None), None);
        assert_eq!(evaluator.escalation_warning(None), None);
    }

    #[test]
    fn test_thresholds_are_independent() {
        let evaluator = PolicyEvaluator::new(PolicyConfig {
            claim_threshold: dec!(100),
            escalation_threshold: dec!(200),
        });
        // Between the two tiers: claim warning only.
        assert!(evaluator.claim_warning(Some(dec!(150))).is_some());
        assert!(evaluator.escalation_warning(Some(dec!(150))).is_none());
        // Above both.
        assert!(evaluator.claim_warning(Some(dec!(250))).is_some());
        assert!(evaluator.escalation_warning(Some(dec!(250))).is_some());
    }
}
