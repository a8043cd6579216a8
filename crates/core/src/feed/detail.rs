//! Detail-drawer content resolution.

use rust_decimal::Decimal;

use crate::feed::types::{ApprovalItem, RequestRef};
use crate::format::LocaleFormat;

/// One labelled line of the detail drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    /// Field label shown by the host.
    pub label: &'static str,
    /// Rendered value.
    pub value: String,
}

impl DetailField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Resolves the kind-specific fields for the detail drawer.
///
/// Read-only: renders from the item's source borrow and never mutates.
/// Optional fields (reasons, stamps) appear only when set.
#[must_use]
pub fn detail_fields(item: &ApprovalItem<'_>, fmt: &dyn LocaleFormat) -> Vec<DetailField> {
    let mut fields = vec![
        DetailField::new("Requester", &item.requester_name),
        DetailField::new("Date", fmt.date(item.date)),
        DetailField::new("Status", item.status),
    ];

    match item.source {
        RequestRef::Claim(claim) => {
            fields.push(DetailField::new("Category", &claim.category));
            fields.push(DetailField::new("Description", &claim.description));
            fields.push(DetailField::new(
                "Amount",
                fmt.amount(claim.amount.unwrap_or(Decimal::ZERO)),
            ));
            if let Some(warning) = &claim.policy_warning {
                fields.push(DetailField::new("Policy Warning", warning));
            }
            if let Some(date) = claim.approval_date {
                fields.push(DetailField::new("Approved On", fmt.date(date)));
            }
            if let Some(notes) = &claim.approval_notes {
                fields.push(DetailField::new("Approval Notes", notes));
            }
            if let Some(reason) = &claim.rejection_reason {
                fields.push(DetailField::new("Rejection Reason", reason));
            }
        }
        RequestRef::Expense(expense) => {
            fields.push(DetailField::new("Category", &expense.category));
            fields.push(DetailField::new("Description", &expense.description));
            fields.push(DetailField::new(
                "Amount",
                fmt.amount(expense.amount.unwrap_or(Decimal::ZERO)),
            ));
            if let Some(reason) = &expense.failure_reason {
                fields.push(DetailField::new("Failure Reason", reason));
            }
        }
        RequestRef::Leave(leave) => {
            fields.push(DetailField::new("Leave Type", &leave.leave_type));
            fields.push(DetailField::new("Days", leave.days.to_string()));
            fields.push(DetailField::new("Starts", fmt.date(leave.start_date)));
            if let Some(date) = leave.approval_date {
                fields.push(DetailField::new("Approved On", fmt.date(date)));
            }
            if let Some(reason) = &leave.rejection_reason {
                fields.push(DetailField::new("Rejection Reason", reason));
            }
        }
        RequestRef::PurchaseOrder(order) => {
            fields.push(DetailField::new("Vendor", &order.vendor));
            fields.push(DetailField::new("Items", order.items.len().to_string()));
            fields.push(DetailField::new(
                "Total",
                fmt.amount(order.total_amount.unwrap_or(Decimal::ZERO)),
            ));
            if let Some(reason) = &order.cancellation_reason {
                fields.push(DetailField::new("Cancellation Reason", reason));
            }
        }
        RequestRef::Letter(letter) => {
            fields.push(DetailField::new("Letter Type", &letter.letter_type));
            fields.push(DetailField::new("Purpose", &letter.purpose));
            if let Some(date) = letter.approval_date {
                fields.push(DetailField::new("Approved On", fmt.date(date)));
            }
            if let Some(reason) = &letter.rejection_reason {
                fields.push(DetailField::new("Rejection Reason", reason));
            }
        }
    }

    if let Some(warning) = &item.warning {
        fields.push(DetailField::new("Escalation", warning));
    }

    fields
}
