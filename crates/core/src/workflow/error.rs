//! Error types for review actions.

use thiserror::Error;

use opsdesk_shared::types::UserId;

use crate::access::Module;
use crate::entity::{ItemId, RequestKind};
use crate::workflow::types::ApprovalAction;

/// Errors that can occur while dispatching a review action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not legal from the record's current status.
    #[error("Invalid {kind} transition from {from} via {action}")]
    InvalidTransition {
        /// The request kind.
        kind: RequestKind,
        /// The status the record was in.
        from: &'static str,
        /// The action that was attempted.
        action: ApprovalAction,
    },

    /// Reject was dispatched without a reason.
    #[error("Rejection reason is required")]
    RejectionReasonRequired,

    /// No record matches the item ID.
    #[error("Request {0} not found")]
    NotFound(ItemId),

    /// The acting user may not act on this request.
    #[error("User {user_id} is not authorized to act on this request")]
    NotAuthorized {
        /// The user who attempted the action.
        user_id: UserId,
    },

    /// The module owning the request is hidden from the acting role.
    #[error("Module {0} is not visible to the acting role")]
    ModuleHidden(Module),

    /// A bulk action was dispatched without explicit confirmation.
    #[error("Bulk actions must be confirmed before dispatch")]
    ConfirmationRequired,
}

impl ActionError {
    /// Returns the error code for host display.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::RejectionReasonRequired => "REJECTION_REASON_REQUIRED",
            Self::NotFound(_) => "REQUEST_NOT_FOUND",
            Self::NotAuthorized { .. } => "NOT_AUTHORIZED",
            Self::ModuleHidden(_) => "MODULE_HIDDEN",
            Self::ConfirmationRequired => "CONFIRMATION_REQUIRED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_message() {
        let err = ActionError::InvalidTransition {
            kind: RequestKind::PurchaseOrder,
            from: "cancelled",
            action: ApprovalAction::Approve,
        };
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
        assert!(err.to_string().contains("cancelled"));
        assert!(err.to_string().contains("approve"));
    }

    #[test]
    fn test_not_found_message() {
        let err = ActionError::NotFound(ItemId::new(RequestKind::Claim, "CLM-404"));
        assert_eq!(err.error_code(), "REQUEST_NOT_FOUND");
        assert!(err.to_string().contains("claim:CLM-404"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ActionError::RejectionReasonRequired.error_code(),
            "REJECTION_REASON_REQUIRED"
        );
        assert_eq!(
            ActionError::NotAuthorized {
                user_id: UserId::new()
            }
            .error_code(),
            "NOT_AUTHORIZED"
        );
        assert_eq!(
            ActionError::ModuleHidden(Module::Finance).error_code(),
            "MODULE_HIDDEN"
        );
        assert_eq!(
            ActionError::ConfirmationRequired.error_code(),
            "CONFIRMATION_REQUIRED"
        );
    }
}
