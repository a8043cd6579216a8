//! Property-based tests for the per-kind transition rules.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use opsdesk_shared::types::UserId;

use crate::entity::{
    Claim, ClaimStatus, LeaveRequest, LeaveStatus, PurchaseOrder, PurchaseOrderStatus, Requester,
    StatusClass,
};
use crate::workflow::error::ActionError;
use crate::workflow::service::WorkflowService;
use crate::workflow::types::ActionInput;

fn arb_claim_status() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Submitted),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
        Just(ClaimStatus::Paid),
    ]
}

fn arb_leave_status() -> impl Strategy<Value = LeaveStatus> {
    prop_oneof![
        Just(LeaveStatus::Pending),
        Just(LeaveStatus::Approved),
        Just(LeaveStatus::Rejected),
    ]
}

fn arb_po_status() -> impl Strategy<Value = PurchaseOrderStatus> {
    prop_oneof![
        Just(PurchaseOrderStatus::Draft),
        Just(PurchaseOrderStatus::Ordered),
        Just(PurchaseOrderStatus::Received),
        Just(PurchaseOrderStatus::Cancelled),
    ]
}

fn arb_action() -> impl Strategy<Value = ActionInput> {
    prop_oneof![
        Just(ActionInput::Approve { notes: None }),
        Just(ActionInput::Reject {
            reason: "over budget".to_string()
        }),
        Just(ActionInput::Pay),
    ]
}

/// Whitespace-only strings that must fail rejection validation.
fn arb_blank_reason() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n')], 0..6)
        .prop_map(|chars| chars.into_iter().collect())
}

fn claim_with(status: ClaimStatus) -> Claim {
    Claim {
        id: "CLM-1".into(),
        requester: Requester::new(UserId::new(), "Bob Smith"),
        category: "Travel".to_string(),
        description: "Client visit".to_string(),
        amount: Some(Decimal::new(150, 0)),
        date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        status,
        approval_date: None,
        approval_notes: None,
        rejection_reason: None,
        policy_warning: None,
    }
}

fn leave_with(status: LeaveStatus) -> LeaveRequest {
    LeaveRequest {
        id: "LVE-1".into(),
        requester: Requester::new(UserId::new(), "Dana Reyes"),
        leave_type: "Annual".to_string(),
        days: 3,
        start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
        status,
        approval_date: None,
        rejection_reason: None,
    }
}

fn po_with(status: PurchaseOrderStatus) -> PurchaseOrder {
    PurchaseOrder {
        id: "PO-9".into(),
        requester: Requester::new(UserId::new(), "Ana Diaz"),
        vendor: "Acme Supplies".to_string(),
        items: vec![],
        total_amount: Some(Decimal::new(300, 0)),
        date: NaiveDate::from_ymd_opt(2025, 3, 11).unwrap(),
        status,
        cancellation_reason: None,
    }
}

const TODAY: fn() -> NaiveDate = || NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A blank rejection reason never produces a replacement record,
    /// whatever the current status.
    #[test]
    fn prop_blank_reason_never_transitions(
        status in arb_claim_status(),
        reason in arb_blank_reason()
    ) {
        let claim = claim_with(status);
        let result = WorkflowService::transition_claim(
            &claim,
            &ActionInput::Reject { reason },
            TODAY(),
        );
        prop_assert_eq!(result, Err(ActionError::RejectionReasonRequired));
    }

    /// Terminal claims accept no further action. (Approved is resolved for
    /// the tab partition but still accepts Pay, so it is excluded here.)
    #[test]
    fn prop_terminal_claims_refuse_actions(
        status in arb_claim_status().prop_filter(
            "terminal statuses only",
            |s| matches!(s, ClaimStatus::Rejected | ClaimStatus::Paid),
        ),
        input in arb_action()
    ) {
        let claim = claim_with(status);
        let result = WorkflowService::transition_claim(&claim, &input, TODAY());
        match result {
            Err(ActionError::InvalidTransition { .. } | ActionError::RejectionReasonRequired) => {}
            other => prop_assert!(false, "expected refusal from {:?}, got {:?}", status, other),
        }
    }

    /// Resolved leave requests accept no further action.
    #[test]
    fn prop_resolved_leave_is_terminal(
        status in arb_leave_status().prop_filter(
            "resolved statuses only",
            |s| s.class() == StatusClass::Resolved,
        ),
        input in arb_action()
    ) {
        let result = WorkflowService::transition_leave(&leave_with(status), &input, TODAY());
        prop_assert!(result.is_err());
    }

    /// Resolved purchase orders accept no further action.
    #[test]
    fn prop_resolved_orders_are_terminal(
        status in arb_po_status().prop_filter(
            "resolved statuses only",
            |s| s.class() == StatusClass::Resolved,
        ),
        input in arb_action()
    ) {
        let result = WorkflowService::transition_purchase_order(&po_with(status), &input);
        prop_assert!(result.is_err());
    }

    /// A successful transition never touches fields the action does not own:
    /// approve leaves `rejection_reason` unset, reject leaves `approval_date`
    /// unset.
    #[test]
    fn prop_side_effect_fields_are_disjoint(approve in proptest::bool::ANY) {
        let claim = claim_with(ClaimStatus::Submitted);
        let input = if approve {
            ActionInput::Approve { notes: None }
        } else {
            ActionInput::Reject { reason: "no receipt".to_string() }
        };
        let next = WorkflowService::transition_claim(&claim, &input, TODAY()).unwrap();
        if approve {
            prop_assert!(next.approval_date.is_some());
            prop_assert!(next.rejection_reason.is_none());
        } else {
            prop_assert!(next.approval_date.is_none());
            prop_assert!(next.rejection_reason.is_some());
        }
    }

    /// Transitions only ever change status and their own side-effect
    /// fields; identity, amounts, and dates pass through untouched.
    #[test]
    fn prop_transition_preserves_identity(
        status in arb_claim_status(),
        input in arb_action()
    ) {
        let claim = claim_with(status);
        if let Ok(next) = WorkflowService::transition_claim(&claim, &input, TODAY()) {
            prop_assert_eq!(&next.id, &claim.id);
            prop_assert_eq!(&next.requester, &claim.requester);
            prop_assert_eq!(next.amount, claim.amount);
            prop_assert_eq!(next.date, claim.date);
        }
    }
}
