//! Property-based tests for feed partitioning and search.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use opsdesk_shared::types::UserId;

use crate::entity::{Claim, ClaimStatus, Expense, ExpenseStatus, Requester, StatusClass};
use crate::feed::filter::{FeedFilter, FeedTab, filter_feed};
use crate::feed::build_feed;
use crate::format::EnUs;
use crate::policy::PolicyEvaluator;
use crate::store::{Collections, EntityStore};

fn arb_claim_status() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Submitted),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
        Just(ClaimStatus::Paid),
    ]
}

fn arb_expense_status() -> impl Strategy<Value = ExpenseStatus> {
    prop_oneof![
        Just(ExpenseStatus::Pending),
        Just(ExpenseStatus::Scheduled),
        Just(ExpenseStatus::Failed),
    ]
}

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z]{2,10} [A-Za-z]{2,10}"
}

fn collections_from(
    claims: Vec<(String, ClaimStatus)>,
    expenses: Vec<(String, ExpenseStatus)>,
) -> Collections {
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    Collections {
        claims: EntityStore::new(
            claims
                .into_iter()
                .enumerate()
                .map(|(i, (name, status))| Claim {
                    id: format!("CLM-{i}").into(),
                    requester: Requester::new(UserId::new(), name),
                    category: "Travel".to_string(),
                    description: "Trip".to_string(),
                    amount: Some(Decimal::new(100, 0)),
                    date,
                    status,
                    approval_date: None,
                    approval_notes: None,
                    rejection_reason: None,
                    policy_warning: None,
                })
                .collect(),
        ),
        expenses: EntityStore::new(
            expenses
                .into_iter()
                .enumerate()
                .map(|(i, (name, status))| Expense {
                    id: format!("EXP-{i}").into(),
                    requester: Requester::new(UserId::new(), name),
                    category: "Meals".to_string(),
                    description: "Lunch".to_string(),
                    amount: Some(Decimal::new(40, 0)),
                    date,
                    status,
                    failure_reason: None,
                })
                .collect(),
        ),
        ..Collections::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every item lands on exactly one tab, whatever mix of statuses the
    /// collections hold.
    #[test]
    fn prop_partition_is_total_and_disjoint(
        claims in proptest::collection::vec((arb_name(), arb_claim_status()), 0..8),
        expenses in proptest::collection::vec((arb_name(), arb_expense_status()), 0..8),
    ) {
        let collections = collections_from(claims, expenses);
        let feed = build_feed(&collections, &PolicyEvaluator::default(), &EnUs);

        let pending = filter_feed(&feed, &FeedFilter::new(FeedTab::Pending));
        let history = filter_feed(&feed, &FeedFilter::new(FeedTab::History));

        prop_assert_eq!(pending.len() + history.len(), feed.len());
        for item in &pending {
            prop_assert_eq!(item.class, StatusClass::Pending);
        }
        for item in &history {
            prop_assert_eq!(item.class, StatusClass::Resolved);
        }
    }

    /// Changing the case of the query never changes the result set.
    #[test]
    fn prop_search_case_insensitive(
        claims in proptest::collection::vec((arb_name(), arb_claim_status()), 1..8),
        query in "[A-Za-z]{1,6}",
    ) {
        let collections = collections_from(claims, vec![]);
        let feed = build_feed(&collections, &PolicyEvaluator::default(), &EnUs);

        for tab in [FeedTab::Pending, FeedTab::History] {
            let lower = filter_feed(&feed, &FeedFilter::new(tab).with_query(query.to_lowercase()));
            let upper = filter_feed(&feed, &FeedFilter::new(tab).with_query(query.to_uppercase()));
            let lower_ids: Vec<_> = lower.iter().map(|i| i.id.clone()).collect();
            let upper_ids: Vec<_> = upper.iter().map(|i| i.id.clone()).collect();
            prop_assert_eq!(lower_ids, upper_ids);
        }
    }

    /// Filtering preserves the feed's ordering.
    #[test]
    fn prop_filter_preserves_order(
        claims in proptest::collection::vec((arb_name(), arb_claim_status()), 0..10),
    ) {
        let collections = collections_from(claims, vec![]);
        let feed = build_feed(&collections, &PolicyEvaluator::default(), &EnUs);
        let pending = filter_feed(&feed, &FeedFilter::new(FeedTab::Pending));

        let feed_positions: Vec<usize> = pending
            .iter()
            .map(|p| feed.iter().position(|f| f.id == p.id).unwrap())
            .collect();
        let mut sorted = feed_positions.clone();
        sorted.sort_unstable();
        prop_assert_eq!(feed_positions, sorted);
    }
}
