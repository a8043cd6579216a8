//! Generic review actions dispatched against any request kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three generic actions the review surface offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalAction {
    /// Move the request forward (kind-specific resulting status).
    Approve,
    /// Refuse the request; requires a reason.
    Reject,
    /// Pay out an approved claim.
    Pay,
}

impl ApprovalAction {
    /// Returns the string representation of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Pay => "pay",
        }
    }
}

impl fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An action together with its payload, as dispatched by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ActionInput {
    /// Approve, optionally recording an approver comment.
    Approve {
        /// Optional notes from the approver.
        notes: Option<String>,
    },
    /// Reject with a mandatory reason.
    Reject {
        /// Why the request is refused.
        reason: String,
    },
    /// Pay out an approved claim.
    Pay,
}

impl ActionInput {
    /// The bare action discriminant, for errors and logging.
    #[must_use]
    pub const fn action(&self) -> ApprovalAction {
        match self {
            Self::Approve { .. } => ApprovalAction::Approve,
            Self::Reject { .. } => ApprovalAction::Reject,
            Self::Pay => ApprovalAction::Pay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_wire_shape_is_tagged() {
        let input = ActionInput::Reject {
            reason: "duplicate".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "action": "reject", "reason": "duplicate" })
        );
        let back: ActionInput = serde_json::from_value(json).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn test_action_display() {
        assert_eq!(ApprovalAction::Approve.to_string(), "approve");
        assert_eq!(ApprovalAction::Reject.to_string(), "reject");
        assert_eq!(ApprovalAction::Pay.to_string(), "pay");
    }

    #[test]
    fn test_input_action_discriminant() {
        assert_eq!(
            ActionInput::Approve { notes: None }.action(),
            ApprovalAction::Approve
        );
        assert_eq!(
            ActionInput::Reject {
                reason: "dup".to_string()
            }
            .action(),
            ApprovalAction::Reject
        );
        assert_eq!(ActionInput::Pay.action(), ApprovalAction::Pay);
    }
}
