//! Status vocabularies for the five request kinds.
//!
//! Each kind keeps its own vocabulary; the only shared notion is the
//! two-way classification into `Pending` (actionable) and `Resolved`
//! (history). Every status value maps to exactly one class.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a status into the review queue partitions.
///
/// The pending tab shows `Pending` items, the history tab shows `Resolved`
/// items; no status belongs to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    /// Awaiting an approver's action.
    Pending,
    /// No further action-driven transition is offered from this engine.
    Resolved,
}

/// Reimbursement claim status.
///
/// Valid transitions: Submitted → Approved (approve), Submitted → Rejected
/// (reject), Approved → Paid (pay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Claim has been submitted and awaits review.
    Submitted,
    /// Claim has been approved and awaits payment.
    Approved,
    /// Claim has been rejected (terminal).
    Rejected,
    /// Claim has been paid out (terminal).
    Paid,
}

impl ClaimStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Paid => "paid",
        }
    }

    /// Parses a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "submitted" => Some(Self::Submitted),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }

    /// Classifies the status into a review queue partition.
    ///
    /// Approval resolves the review decision, so an approved claim leaves
    /// the pending tab; the pay transition is still offered from history.
    #[must_use]
    pub const fn class(self) -> StatusClass {
        match self {
            Self::Submitted => StatusClass::Pending,
            Self::Approved | Self::Rejected | Self::Paid => StatusClass::Resolved,
        }
    }
}

/// Expense report status.
///
/// Valid transitions: Pending → Scheduled (approve), Pending → Failed
/// (reject).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    /// Expense awaits review.
    Pending,
    /// Expense is approved and scheduled for payment (terminal).
    Scheduled,
    /// Expense was refused (terminal).
    Failed,
}

impl ExpenseStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Scheduled => "scheduled",
            Self::Failed => "failed",
        }
    }

    /// Parses a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "scheduled" => Some(Self::Scheduled),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Classifies the status into a review queue partition.
    #[must_use]
    pub const fn class(self) -> StatusClass {
        match self {
            Self::Pending => StatusClass::Pending,
            Self::Scheduled | Self::Failed => StatusClass::Resolved,
        }
    }
}

/// Leave request status.
///
/// Valid transitions: Pending → Approved (approve), Pending → Rejected
/// (reject).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    /// Leave request awaits review.
    Pending,
    /// Leave request was granted (terminal).
    Approved,
    /// Leave request was refused (terminal).
    Rejected,
}

impl LeaveStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Classifies the status into a review queue partition.
    #[must_use]
    pub const fn class(self) -> StatusClass {
        match self {
            Self::Pending => StatusClass::Pending,
            Self::Approved | Self::Rejected => StatusClass::Resolved,
        }
    }
}

/// Purchase order status.
///
/// Valid transitions here: Draft → Ordered (approve), Draft → Cancelled
/// (reject). `Received` exists in the vocabulary because the procurement
/// views reach it, but no transition in this engine produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseOrderStatus {
    /// Order is drafted and awaits sign-off.
    Draft,
    /// Order has been placed with the vendor (terminal here).
    Ordered,
    /// Goods have been received (terminal, reached outside this engine).
    Received,
    /// Order was cancelled (terminal).
    Cancelled,
}

impl PurchaseOrderStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Ordered => "ordered",
            Self::Received => "received",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "ordered" => Some(Self::Ordered),
            "received" => Some(Self::Received),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Classifies the status into a review queue partition.
    #[must_use]
    pub const fn class(self) -> StatusClass {
        match self {
            Self::Draft => StatusClass::Pending,
            Self::Ordered | Self::Received | Self::Cancelled => StatusClass::Resolved,
        }
    }
}

/// HR letter request status.
///
/// Valid transitions: Pending → Approved (approve), Pending → Rejected
/// (reject).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    /// Letter request awaits review.
    Pending,
    /// Letter was issued (terminal).
    Approved,
    /// Letter request was refused (terminal).
    Rejected,
}

impl LetterStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Classifies the status into a review queue partition.
    #[must_use]
    pub const fn class(self) -> StatusClass {
        match self {
            Self::Pending => StatusClass::Pending,
            Self::Approved | Self::Rejected => StatusClass::Resolved,
        }
    }
}

macro_rules! display_via_as_str {
    ($($name:ident),+) => {
        $(
            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )+
    };
}

display_via_as_str!(
    ClaimStatus,
    ExpenseStatus,
    LeaveStatus,
    PurchaseOrderStatus,
    LetterStatus
);
