//! The unified queue projection.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entity::{
    Claim, Expense, HrLetter, ItemId, LeaveRequest, PurchaseOrder, RequestKind, StatusClass,
};

/// Non-owning reference back to the source record.
///
/// Used by the detail resolver and the export; never a mutation path. All
/// writes go through the store by the item's `original` ID.
#[derive(Debug, Clone, Copy)]
pub enum RequestRef<'a> {
    /// A reimbursement claim.
    Claim(&'a Claim),
    /// An expense report.
    Expense(&'a Expense),
    /// A leave request.
    Leave(&'a LeaveRequest),
    /// A purchase order.
    PurchaseOrder(&'a PurchaseOrder),
    /// An HR letter request.
    Letter(&'a HrLetter),
}

impl RequestRef<'_> {
    /// The kind-specific category column shown in lists and exports.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::Claim(c) => &c.category,
            Self::Expense(e) => &e.category,
            Self::Leave(l) => &l.leave_type,
            Self::PurchaseOrder(o) => &o.vendor,
            Self::Letter(l) => &l.letter_type,
        }
    }
}

/// One row of the unified review queue.
///
/// A read-mostly display projection: the engine rebuilds the feed from the
/// collections on demand and never persists it.
#[derive(Debug, Clone)]
pub struct ApprovalItem<'a> {
    /// Composite key (kind + original ID) the actions dispatch on.
    pub id: ItemId,
    /// The request kind.
    pub kind: RequestKind,
    /// Requester display name.
    pub requester_name: String,
    /// Optional avatar reference for the host to render.
    pub avatar: Option<String>,
    /// Primary line of the row.
    pub title: String,
    /// Secondary line of the row.
    pub subtitle: String,
    /// Date the request was raised; the feed sorts on this.
    pub date: NaiveDate,
    /// Kind-specific status label.
    pub status: &'static str,
    /// Pending/history partition the row belongs to.
    pub class: StatusClass,
    /// Monetary amount, if the kind carries one.
    pub amount: Option<Decimal>,
    /// Escalation warning, rendered before the approver may act.
    pub warning: Option<String>,
    /// Borrow of the source record for detail rendering.
    pub source: RequestRef<'a>,
}
