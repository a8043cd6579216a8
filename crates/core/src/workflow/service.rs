//! Per-kind status transition rules.
//!
//! Each function takes the current record and a generic `ActionInput` and
//! returns a complete replacement record, or refuses. Records are never
//! mutated in place: the caller swaps the replacement into the store so a
//! concurrently rendering view sees either the old or the new value.

use chrono::NaiveDate;

use crate::entity::{
    Claim, ClaimStatus, Expense, ExpenseStatus, HrLetter, LeaveRequest, LeaveStatus, LetterStatus,
    PurchaseOrder, PurchaseOrderStatus, RequestKind,
};
use crate::workflow::error::ActionError;
use crate::workflow::types::ActionInput;

/// Stateless service applying the per-kind transition tables.
pub struct WorkflowService;

/// Validates the mandatory rejection reason before any state is built.
fn required_reason(input: &ActionInput) -> Result<(), ActionError> {
    if let ActionInput::Reject { reason } = input
        && reason.trim().is_empty()
    {
        return Err(ActionError::RejectionReasonRequired);
    }
    Ok(())
}

impl WorkflowService {
    /// Applies an action to a claim.
    ///
    /// Transitions: Submitted → Approved (approve, stamps `approval_date`
    /// and records notes), Submitted → Rejected (reject), Approved → Paid
    /// (pay).
    pub fn transition_claim(
        claim: &Claim,
        input: &ActionInput,
        today: NaiveDate,
    ) -> Result<Claim, ActionError> {
        required_reason(input)?;
        match (claim.status, input) {
            (ClaimStatus::Submitted, ActionInput::Approve { notes }) => Ok(Claim {
                status: ClaimStatus::Approved,
                approval_date: Some(today),
                approval_notes: notes.clone(),
                ..claim.clone()
            }),
            (ClaimStatus::Submitted, ActionInput::Reject { reason }) => Ok(Claim {
                status: ClaimStatus::Rejected,
                rejection_reason: Some(reason.clone()),
                ..claim.clone()
            }),
            (ClaimStatus::Approved, ActionInput::Pay) => Ok(Claim {
                status: ClaimStatus::Paid,
                ..claim.clone()
            }),
            _ => Err(ActionError::InvalidTransition {
                kind: RequestKind::Claim,
                from: claim.status.as_str(),
                action: input.action(),
            }),
        }
    }

    /// Applies an action to an expense report.
    ///
    /// Transitions: Pending → Scheduled (approve), Pending → Failed
    /// (reject, records the failure reason). Pay does not apply.
    pub fn transition_expense(
        expense: &Expense,
        input: &ActionInput,
    ) -> Result<Expense, ActionError> {
        required_reason(input)?;
        match (expense.status, input) {
            (ExpenseStatus::Pending, ActionInput::Approve { .. }) => Ok(Expense {
                status: ExpenseStatus::Scheduled,
                ..expense.clone()
            }),
            (ExpenseStatus::Pending, ActionInput::Reject { reason }) => Ok(Expense {
                status: ExpenseStatus::Failed,
                failure_reason: Some(reason.clone()),
                ..expense.clone()
            }),
            _ => Err(ActionError::InvalidTransition {
                kind: RequestKind::Expense,
                from: expense.status.as_str(),
                action: input.action(),
            }),
        }
    }

    /// Applies an action to a leave request.
    ///
    /// Transitions: Pending → Approved (approve, stamps `approval_date`),
    /// Pending → Rejected (reject). Pay does not apply.
    pub fn transition_leave(
        leave: &LeaveRequest,
        input: &ActionInput,
        today: NaiveDate,
    ) -> Result<LeaveRequest, ActionError> {
        required_reason(input)?;
        match (leave.status, input) {
            (LeaveStatus::Pending, ActionInput::Approve { .. }) => Ok(LeaveRequest {
                status: LeaveStatus::Approved,
                approval_date: Some(today),
                ..leave.clone()
            }),
            (LeaveStatus::Pending, ActionInput::Reject { reason }) => Ok(LeaveRequest {
                status: LeaveStatus::Rejected,
                rejection_reason: Some(reason.clone()),
                ..leave.clone()
            }),
            _ => Err(ActionError::InvalidTransition {
                kind: RequestKind::Leave,
                from: leave.status.as_str(),
                action: input.action(),
            }),
        }
    }

    /// Applies an action to a purchase order.
    ///
    /// Transitions offered from the review surface: Draft → Ordered
    /// (approve), Draft → Cancelled (reject). The "received" transition
    /// belongs to the procurement views, not this engine.
    pub fn transition_purchase_order(
        order: &PurchaseOrder,
        input: &ActionInput,
    ) -> Result<PurchaseOrder, ActionError> {
        required_reason(input)?;
        match (order.status, input) {
            (PurchaseOrderStatus::Draft, ActionInput::Approve { .. }) => Ok(PurchaseOrder {
                status: PurchaseOrderStatus::Ordered,
                ..order.clone()
            }),
            (PurchaseOrderStatus::Draft, ActionInput::Reject { reason }) => Ok(PurchaseOrder {
                status: PurchaseOrderStatus::Cancelled,
                cancellation_reason: Some(reason.clone()),
                ..order.clone()
            }),
            _ => Err(ActionError::InvalidTransition {
                kind: RequestKind::PurchaseOrder,
                from: order.status.as_str(),
                action: input.action(),
            }),
        }
    }

    /// Applies an action to an HR letter request.
    ///
    /// Transitions: Pending → Approved (approve, stamps `approval_date`),
    /// Pending → Rejected (reject). Pay does not apply.
    pub fn transition_letter(
        letter: &HrLetter,
        input: &ActionInput,
        today: NaiveDate,
    ) -> Result<HrLetter, ActionError> {
        required_reason(input)?;
        match (letter.status, input) {
            (LetterStatus::Pending, ActionInput::Approve { .. }) => Ok(HrLetter {
                status: LetterStatus::Approved,
                approval_date: Some(today),
                ..letter.clone()
            }),
            (LetterStatus::Pending, ActionInput::Reject { reason }) => Ok(HrLetter {
                status: LetterStatus::Rejected,
                rejection_reason: Some(reason.clone()),
                ..letter.clone()
            }),
            _ => Err(ActionError::InvalidTransition {
                kind: RequestKind::Letter,
                from: letter.status.as_str(),
                action: input.action(),
            }),
        }
    }
}
