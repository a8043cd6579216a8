//! Projection of the five collections into one ordered feed.

use rust_decimal::Decimal;

use crate::entity::{
    Claim, Expense, HrLetter, ItemId, LeaveRequest, PurchaseOrder, RequestKind, RequestRecord,
};
use crate::feed::types::{ApprovalItem, RequestRef};
use crate::format::LocaleFormat;
use crate::policy::PolicyEvaluator;
use crate::store::Collections;

/// Builds the unified feed: every request of every kind, newest first.
///
/// Pure projection: collections are only read. Ties on the request date
/// keep the original insertion order (claims first, then expenses, leave,
/// purchase orders, letters, each in collection order).
#[must_use]
pub fn build_feed<'a>(
    collections: &'a Collections,
    policy: &PolicyEvaluator,
    fmt: &dyn LocaleFormat,
) -> Vec<ApprovalItem<'a>> {
    let mut feed: Vec<ApprovalItem<'a>> = Vec::with_capacity(
        collections.claims.len()
            + collections.expenses.len()
            + collections.leave_requests.len()
            + collections.purchase_orders.len()
            + collections.letters.len(),
    );

    feed.extend(
        collections
            .claims
            .records()
            .iter()
            .map(|c| project_claim(c, policy, fmt)),
    );
    feed.extend(
        collections
            .expenses
            .records()
            .iter()
            .map(|e| project_expense(e, policy, fmt)),
    );
    feed.extend(
        collections
            .leave_requests
            .records()
            .iter()
            .map(|l| project_leave(l, policy, fmt)),
    );
    feed.extend(
        collections
            .purchase_orders
            .records()
            .iter()
            .map(|o| project_purchase_order(o, policy, fmt)),
    );
    feed.extend(
        collections
            .letters
            .records()
            .iter()
            .map(|l| project_letter(l, policy)),
    );

    // Stable sort: equal dates keep projection order.
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed
}

/// Missing amounts format as a deterministic zero, never a panic.
fn display_amount(amount: Option<Decimal>, fmt: &dyn LocaleFormat) -> String {
    fmt.amount(amount.unwrap_or(Decimal::ZERO))
}

fn project_claim<'a>(
    claim: &'a Claim,
    policy: &PolicyEvaluator,
    fmt: &dyn LocaleFormat,
) -> ApprovalItem<'a> {
    ApprovalItem {
        id: ItemId::new(Claim::KIND, claim.id.clone()),
        kind: Claim::KIND,
        requester_name: claim.requester.name.clone(),
        avatar: claim.requester.avatar.clone(),
        title: claim.description.clone(),
        subtitle: display_amount(claim.amount, fmt),
        date: claim.date,
        status: claim.status.as_str(),
        class: claim.status.class(),
        amount: claim.amount,
        warning: policy.escalation_warning(claim.amount),
        source: RequestRef::Claim(claim),
    }
}

fn project_expense<'a>(
    expense: &'a Expense,
    policy: &PolicyEvaluator,
    fmt: &dyn LocaleFormat,
) -> ApprovalItem<'a> {
    ApprovalItem {
        id: ItemId::new(Expense::KIND, expense.id.clone()),
        kind: Expense::KIND,
        requester_name: expense.requester.name.clone(),
        avatar: expense.requester.avatar.clone(),
        title: expense.description.clone(),
        subtitle: display_amount(expense.amount, fmt),
        date: expense.date,
        status: expense.status.as_str(),
        class: expense.status.class(),
        amount: expense.amount,
        warning: policy.escalation_warning(expense.amount),
        source: RequestRef::Expense(expense),
    }
}

fn project_leave<'a>(
    leave: &'a LeaveRequest,
    policy: &PolicyEvaluator,
    fmt: &dyn LocaleFormat,
) -> ApprovalItem<'a> {
    ApprovalItem {
        id: ItemId::new(LeaveRequest::KIND, leave.id.clone()),
        kind: LeaveRequest::KIND,
        requester_name: leave.requester.name.clone(),
        avatar: leave.requester.avatar.clone(),
        title: format!("{} Leave", leave.leave_type),
        subtitle: format!("{} Days ({})", leave.days, fmt.date(leave.start_date)),
        date: leave.date,
        status: leave.status.as_str(),
        class: leave.status.class(),
        amount: None,
        warning: policy.escalation_warning(None),
        source: RequestRef::Leave(leave),
    }
}

fn project_purchase_order<'a>(
    order: &'a PurchaseOrder,
    policy: &PolicyEvaluator,
    fmt: &dyn LocaleFormat,
) -> ApprovalItem<'a> {
    ApprovalItem {
        id: ItemId::new(PurchaseOrder::KIND, order.id.clone()),
        kind: PurchaseOrder::KIND,
        requester_name: order.requester.name.clone(),
        avatar: order.requester.avatar.clone(),
        title: order.vendor.clone(),
        subtitle: display_amount(order.total_amount, fmt),
        date: order.date,
        status: order.status.as_str(),
        class: order.status.class(),
        amount: order.total_amount,
        warning: policy.escalation_warning(order.total_amount),
        source: RequestRef::PurchaseOrder(order),
    }
}

fn project_letter<'a>(letter: &'a HrLetter, policy: &PolicyEvaluator) -> ApprovalItem<'a> {
    ApprovalItem {
        id: ItemId::new(HrLetter::KIND, letter.id.clone()),
        kind: HrLetter::KIND,
        requester_name: letter.requester.name.clone(),
        avatar: letter.requester.avatar.clone(),
        title: format!("{} Letter", letter.letter_type),
        subtitle: letter.purpose.clone(),
        date: letter.date,
        status: letter.status.as_str(),
        class: letter.status.class(),
        amount: None,
        warning: policy.escalation_warning(None),
        source: RequestRef::Letter(letter),
    }
}
