//! Request record shapes for the five kinds.
//!
//! Each kind keeps its own concrete field shape; nothing here is shared
//! through a base type. The only common surface is the `RequestRecord`
//! trait the stores need, plus the `RequestKind`/`ItemId` discriminants the
//! review queue dispatches on.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use opsdesk_shared::types::{RequestId, UserId};

use super::status::{
    ClaimStatus, ExpenseStatus, LeaveStatus, LetterStatus, PurchaseOrderStatus,
};

/// Discriminant for the five request kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Reimbursement claim.
    Claim,
    /// Expense report.
    Expense,
    /// Leave request.
    Leave,
    /// Purchase order.
    PurchaseOrder,
    /// HR letter request.
    Letter,
}

impl RequestKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Claim => "claim",
            Self::Expense => "expense",
            Self::Leave => "leave",
            Self::PurchaseOrder => "purchase_order",
            Self::Letter => "letter",
        }
    }

    /// Parses a kind from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "claim" => Some(Self::Claim),
            "expense" => Some(Self::Expense),
            "leave" => Some(Self::Leave),
            "purchase_order" => Some(Self::PurchaseOrder),
            "letter" => Some(Self::Letter),
            _ => None,
        }
    }

    /// Human-readable label for list rendering.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Claim => "Claim",
            Self::Expense => "Expense",
            Self::Leave => "Leave Request",
            Self::PurchaseOrder => "Purchase Order",
            Self::Letter => "HR Letter",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Composite identifier of an item in the unified review queue.
///
/// Request IDs are only unique within their host collection, so the queue
/// keys items by kind plus original ID (rendered as `"claim:CLM-1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId {
    /// The request kind the item was projected from.
    pub kind: RequestKind,
    /// The host-assigned ID of the source record.
    pub original: RequestId,
}

impl ItemId {
    /// Creates an item ID from a kind and the source record's ID.
    #[must_use]
    pub fn new(kind: RequestKind, original: impl Into<RequestId>) -> Self {
        Self {
            kind,
            original: original.into(),
        }
    }

    /// Parses an item ID from its `kind:original` rendering.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (kind, original) = s.split_once(':')?;
        if original.is_empty() {
            return None;
        }
        Some(Self::new(RequestKind::parse(kind)?, original))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.original)
    }
}

/// The identity that raised a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    /// The requesting user.
    pub user_id: UserId,
    /// Display name shown in the queue.
    pub name: String,
    /// Optional avatar reference for the host to render.
    pub avatar: Option<String>,
}

impl Requester {
    /// Creates a requester without an avatar reference.
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            avatar: None,
        }
    }
}

/// A reimbursement claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Host-assigned identifier (e.g. `"CLM-1042"`).
    pub id: RequestId,
    /// Who raised the claim.
    pub requester: Requester,
    /// Expense category (travel, meals, ...).
    pub category: String,
    /// What the claim is for.
    pub description: String,
    /// Claimed amount; user-entered records may lack it.
    pub amount: Option<Decimal>,
    /// Date the claim was raised.
    pub date: NaiveDate,
    /// Current lifecycle status.
    pub status: ClaimStatus,
    /// Stamped when the claim is approved.
    pub approval_date: Option<NaiveDate>,
    /// Optional approver comment recorded on approval.
    pub approval_notes: Option<String>,
    /// Recorded when the claim is rejected.
    pub rejection_reason: Option<String>,
    /// Creation-time policy flag for amounts over the claim threshold.
    pub policy_warning: Option<String>,
}

/// An expense report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Host-assigned identifier (e.g. `"EXP-88"`).
    pub id: RequestId,
    /// Who filed the expense.
    pub requester: Requester,
    /// Expense category.
    pub category: String,
    /// What the expense covers.
    pub description: String,
    /// Expensed amount; user-entered records may lack it.
    pub amount: Option<Decimal>,
    /// Date the expense was filed.
    pub date: NaiveDate,
    /// Current lifecycle status.
    pub status: ExpenseStatus,
    /// Recorded when the expense is refused.
    pub failure_reason: Option<String>,
}

/// A leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Host-assigned identifier (e.g. `"LVE-17"`).
    pub id: RequestId,
    /// Who requested the leave.
    pub requester: Requester,
    /// Leave type (Annual, Sick, ...).
    pub leave_type: String,
    /// Number of working days requested.
    pub days: u32,
    /// First day of the leave.
    pub start_date: NaiveDate,
    /// Date the request was raised.
    pub date: NaiveDate,
    /// Current lifecycle status.
    pub status: LeaveStatus,
    /// Stamped when the leave is approved.
    pub approval_date: Option<NaiveDate>,
    /// Recorded when the leave is rejected.
    pub rejection_reason: Option<String>,
}

/// One line of a purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// What is being ordered.
    pub description: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: Decimal,
}

/// A purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// Host-assigned identifier (e.g. `"PO-9"`).
    pub id: RequestId,
    /// Who drafted the order.
    pub requester: Requester,
    /// Vendor the order goes to.
    pub vendor: String,
    /// Ordered lines.
    pub items: Vec<OrderLine>,
    /// Order total; drafts may not have one yet.
    pub total_amount: Option<Decimal>,
    /// Date the order was drafted.
    pub date: NaiveDate,
    /// Current lifecycle status.
    pub status: PurchaseOrderStatus,
    /// Recorded when the order is cancelled.
    pub cancellation_reason: Option<String>,
}

/// An HR letter request (employment confirmation, salary letter, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrLetter {
    /// Host-assigned identifier (e.g. `"LTR-5"`).
    pub id: RequestId,
    /// Who requested the letter.
    pub requester: Requester,
    /// Letter type (Employment, Salary, Visa, ...).
    pub letter_type: String,
    /// Why the letter is needed.
    pub purpose: String,
    /// Date the request was raised.
    pub date: NaiveDate,
    /// Current lifecycle status.
    pub status: LetterStatus,
    /// Stamped when the letter is approved.
    pub approval_date: Option<NaiveDate>,
    /// Recorded when the request is rejected.
    pub rejection_reason: Option<String>,
}

/// Common surface the stores and the review queue need from a record.
pub trait RequestRecord {
    /// The kind discriminant for this record type.
    const KIND: RequestKind;

    /// The host-assigned identifier.
    fn id(&self) -> &RequestId;

    /// The identity that raised the request.
    fn requester(&self) -> &Requester;
}

impl RequestRecord for Claim {
    const KIND: RequestKind = RequestKind::Claim;

    fn id(&self) -> &RequestId {
        &self.id
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}

impl RequestRecord for Expense {
    const KIND: RequestKind = RequestKind::Expense;

    fn id(&self) -> &RequestId {
        &self.id
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}

impl RequestRecord for LeaveRequest {
    const KIND: RequestKind = RequestKind::Leave;

    fn id(&self) -> &RequestId {
        &self.id
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}

impl RequestRecord for PurchaseOrder {
    const KIND: RequestKind = RequestKind::PurchaseOrder;

    fn id(&self) -> &RequestId {
        &self.id
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}

impl RequestRecord for HrLetter {
    const KIND: RequestKind = RequestKind::Letter;

    fn id(&self) -> &RequestId {
        &self.id
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}
