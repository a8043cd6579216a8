//! Review-engine walkthrough on mock data.
//!
//! Seeds the five collections with fake requesters, then drives the engine
//! the way a host would: pending feed, single actions, a mixed bulk batch,
//! the history tab, and the CSV export.
//!
//! Usage: cargo run --bin demo

use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::EnvFilter;

use opsdesk_core::access::{Module, PermissionLevel, Role};
use opsdesk_core::entity::{
    Claim, ClaimStatus, Expense, ExpenseStatus, HrLetter, ItemId, LeaveRequest, LeaveStatus,
    LetterStatus, OrderLine, PurchaseOrder, PurchaseOrderStatus, RequestKind, Requester,
};
use opsdesk_core::feed::{FeedFilter, FeedTab};
use opsdesk_core::format::EnUs;
use opsdesk_core::policy::PolicyEvaluator;
use opsdesk_core::review::ReviewEngine;
use opsdesk_core::store::{Collections, EntityStore};
use opsdesk_shared::AppConfig;
use opsdesk_shared::types::UserId;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    let policy = PolicyEvaluator::new(config.policy);
    info!(config = ?policy.config(), "policy loaded");

    let today = Utc::now().date_naive();
    let collections = seed_collections(&policy, today);

    let role = Role::new(
        "Manager",
        [
            (Module::Finance, PermissionLevel::Edit),
            (Module::Hr, PermissionLevel::Edit),
        ]
        .into(),
    );
    let mut engine = ReviewEngine::new(collections, policy, role, UserId::new(), EnUs);

    println!("=== Pending feed ===");
    print_feed(&engine.filtered_feed(&FeedFilter::new(FeedTab::Pending)));

    println!("\n=== Single actions ===");
    engine.approve(
        &ItemId::new(RequestKind::Claim, "CLM-1"),
        Some("receipts verified".to_string()),
    )?;
    println!("approved claim:CLM-1");
    engine.pay(&ItemId::new(RequestKind::Claim, "CLM-1"))?;
    println!("paid claim:CLM-1");
    engine.reject(&ItemId::new(RequestKind::PurchaseOrder, "PO-9"), "budget")?;
    println!("rejected purchase_order:PO-9 (budget)");

    println!("\n=== Bulk approve (one valid, one already resolved) ===");
    engine.select(ItemId::new(RequestKind::Leave, "LVE-1"));
    engine.select(ItemId::new(RequestKind::PurchaseOrder, "PO-9"));
    let outcome = engine.bulk_apply(
        &opsdesk_core::workflow::ActionInput::Approve { notes: None },
        true,
    )?;
    println!("applied: {}", outcome.applied.len());
    for (id, err) in &outcome.failures {
        println!("failed {id}: {err}");
    }

    println!("\n=== History tab ===");
    print_feed(&engine.filtered_feed(&FeedFilter::new(FeedTab::History)));

    println!("\n=== CSV export (history) ===");
    print!("{}", engine.export_csv(&FeedFilter::new(FeedTab::History))?);

    Ok(())
}

fn print_feed(items: &[opsdesk_core::feed::ApprovalItem<'_>]) {
    for item in items {
        let flag = item.warning.as_deref().unwrap_or("");
        println!(
            "{:<24} {:<16} {:<12} {:<32} {:<24} {} {}",
            item.id.to_string(),
            item.kind.label(),
            item.status,
            item.title,
            item.subtitle,
            item.requester_name,
            flag
        );
    }
}

fn requester() -> Requester {
    Requester::new(UserId::new(), Name().fake::<String>())
}

fn seed_collections(policy: &PolicyEvaluator, today: NaiveDate) -> Collections {
    // CLM-1 sits over the claim threshold so the creation-time warning shows
    // up; PO-9 sits over the escalation threshold so the feed flags it.
    let over_threshold = dec!(1500);
    let claims = vec![
        Claim {
            id: "CLM-1".into(),
            requester: requester(),
            category: "Travel".to_string(),
            description: "Client visit".to_string(),
            amount: Some(over_threshold),
            date: today - Duration::days(2),
            status: ClaimStatus::Submitted,
            approval_date: None,
            approval_notes: None,
            rejection_reason: None,
            policy_warning: policy.claim_warning(Some(over_threshold)),
        },
        Claim {
            id: "CLM-2".into(),
            requester: requester(),
            category: "Office".to_string(),
            description: "Desk accessories".to_string(),
            amount: Some(dec!(85.40)),
            date: today - Duration::days(1),
            status: ClaimStatus::Submitted,
            approval_date: None,
            approval_notes: None,
            rejection_reason: None,
            policy_warning: policy.claim_warning(Some(dec!(85.40))),
        },
    ];

    let expenses = vec![Expense {
        id: "EXP-1".into(),
        requester: requester(),
        category: "Meals".to_string(),
        description: "Team lunch".to_string(),
        amount: Some(dec!(112.75)),
        date: today - Duration::days(3),
        status: ExpenseStatus::Pending,
        failure_reason: None,
    }];

    let leave_requests = vec![LeaveRequest {
        id: "LVE-1".into(),
        requester: requester(),
        leave_type: "Annual".to_string(),
        days: 5,
        start_date: today + Duration::days(14),
        date: today - Duration::days(4),
        status: LeaveStatus::Pending,
        approval_date: None,
        rejection_reason: None,
    }];

    let purchase_orders = vec![PurchaseOrder {
        id: "PO-9".into(),
        requester: requester(),
        vendor: CompanyName().fake::<String>(),
        items: vec![
            OrderLine {
                description: "Workstations".to_string(),
                quantity: 4,
                unit_price: dec!(1200),
            },
            OrderLine {
                description: "Monitors".to_string(),
                quantity: 4,
                unit_price: dec!(100),
            },
        ],
        total_amount: Some(dec!(5200)),
        date: today - Duration::days(1),
        status: PurchaseOrderStatus::Draft,
        cancellation_reason: None,
    }];

    let letters = vec![HrLetter {
        id: "LTR-1".into(),
        requester: requester(),
        letter_type: "Employment".to_string(),
        purpose: "Bank account opening".to_string(),
        date: today - Duration::days(5),
        status: LetterStatus::Pending,
        approval_date: None,
        rejection_reason: None,
    }];

    Collections {
        claims: EntityStore::new(claims),
        expenses: EntityStore::new(expenses),
        leave_requests: EntityStore::new(leave_requests),
        purchase_orders: EntityStore::new(purchase_orders),
        letters: EntityStore::new(letters),
    }
}
