//! The review engine facade.

use std::collections::BTreeSet;

use chrono::Utc;
use tracing::{info, warn};

use opsdesk_shared::types::UserId;

use crate::access::{AccessService, Role};
use crate::entity::{ItemId, RequestKind};
use crate::export::{ExportError, export_feed_csv};
use crate::feed::{ApprovalItem, DetailField, FeedFilter, build_feed, detail_fields, filter_feed};
use crate::format::LocaleFormat;
use crate::policy::PolicyEvaluator;
use crate::review::bulk::BulkOutcome;
use crate::store::Collections;
use crate::workflow::{ActionError, ActionInput, WorkflowService};

/// Single-threaded coordinator over the five collections.
///
/// Owns the collections for the duration of a review session and is the
/// only writer while an action executes; the host gets them back through
/// [`ReviewEngine::into_collections`]. The feed is rebuilt from the
/// collections on demand, never cached across mutations.
pub struct ReviewEngine<F: LocaleFormat> {
    collections: Collections,
    policy: PolicyEvaluator,
    role: Role,
    acting_user: UserId,
    formatter: F,
    selection: BTreeSet<ItemId>,
}

impl<F: LocaleFormat> ReviewEngine<F> {
    /// Creates an engine for one acting user and their role.
    #[must_use]
    pub fn new(
        collections: Collections,
        policy: PolicyEvaluator,
        role: Role,
        acting_user: UserId,
        formatter: F,
    ) -> Self {
        Self {
            collections,
            policy,
            role,
            acting_user,
            formatter,
            selection: BTreeSet::new(),
        }
    }

    /// The unified feed, newest first.
    #[must_use]
    pub fn feed(&self) -> Vec<ApprovalItem<'_>> {
        build_feed(&self.collections, &self.policy, &self.formatter)
    }

    /// The feed narrowed to one view (tab, kind, query).
    #[must_use]
    pub fn filtered_feed(&self, filter: &FeedFilter) -> Vec<ApprovalItem<'_>> {
        filter_feed(&self.feed(), filter)
    }

    /// Approves an item, with optional reviewer notes.
    pub fn approve(&mut self, id: &ItemId, notes: Option<String>) -> Result<(), ActionError> {
        self.apply(id, &ActionInput::Approve { notes })
    }

    /// Rejects an item. The reason is mandatory and validated before any
    /// state changes.
    pub fn reject(&mut self, id: &ItemId, reason: impl Into<String>) -> Result<(), ActionError> {
        self.apply(
            id,
            &ActionInput::Reject {
                reason: reason.into(),
            },
        )
    }

    /// Marks an approved item as paid.
    pub fn pay(&mut self, id: &ItemId) -> Result<(), ActionError> {
        self.apply(id, &ActionInput::Pay)
    }

    /// Adds an item to the bulk selection.
    pub fn select(&mut self, id: ItemId) {
        self.selection.insert(id);
    }

    /// Removes an item from the bulk selection.
    pub fn deselect(&mut self, id: &ItemId) {
        self.selection.remove(id);
    }

    /// Empties the bulk selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The current bulk selection.
    #[must_use]
    pub const fn selection(&self) -> &BTreeSet<ItemId> {
        &self.selection
    }

    /// Applies one action to every selected item, best-effort.
    ///
    /// Requires `confirmed` from the host; an unconfirmed call refuses
    /// before touching anything. Per-item failures (invalid transition,
    /// missing reason, authorization) are collected and never abort the
    /// rest of the batch. The selection is cleared afterwards regardless
    /// of outcome.
    pub fn bulk_apply(
        &mut self,
        input: &ActionInput,
        confirmed: bool,
    ) -> Result<BulkOutcome, ActionError> {
        if !confirmed {
            return Err(ActionError::ConfirmationRequired);
        }

        let selected: Vec<ItemId> = self.selection.iter().cloned().collect();
        self.selection.clear();

        let mut outcome = BulkOutcome::default();
        for id in selected {
            match self.apply(&id, input) {
                Ok(()) => outcome.applied.push(id),
                Err(err) => outcome.failures.push((id, err)),
            }
        }

        info!(
            action = %input.action(),
            applied = outcome.applied.len(),
            failed = outcome.failures.len(),
            "bulk action finished"
        );
        Ok(outcome)
    }

    /// Resolves the detail-drawer fields for an item.
    pub fn detail(&self, id: &ItemId) -> Result<Vec<DetailField>, ActionError> {
        let feed = self.feed();
        let item = feed
            .iter()
            .find(|i| &i.id == id)
            .ok_or_else(|| ActionError::NotFound(id.clone()))?;
        Ok(detail_fields(item, &self.formatter))
    }

    /// CSV of the feed narrowed by `filter`, in feed order.
    pub fn export_csv(&self, filter: &FeedFilter) -> Result<String, ExportError> {
        export_feed_csv(&self.filtered_feed(filter), &self.formatter)
    }

    /// Hands the collections back to the host.
    #[must_use]
    pub fn into_collections(self) -> Collections {
        self.collections
    }

    /// Dispatches one action: authorize, then transition via atomic swap.
    fn apply(&mut self, id: &ItemId, input: &ActionInput) -> Result<(), ActionError> {
        let result = self.authorize(id).and_then(|()| self.transition(id, input));
        match &result {
            Ok(()) => info!(item = %id, action = %input.action(), "action applied"),
            Err(err) => {
                warn!(item = %id, action = %input.action(), error = %err, "action refused");
            }
        }
        result
    }

    /// Refuses actions the review surface would never have offered.
    ///
    /// The list only shows modules the role can see and hides actions on
    /// the user's own requests; a caller bypassing the surface must hit
    /// the same walls here.
    fn authorize(&self, id: &ItemId) -> Result<(), ActionError> {
        let module = AccessService::module_for_kind(id.kind);
        if !AccessService::is_module_visible(&self.role, module) {
            return Err(ActionError::ModuleHidden(module));
        }
        let requester = self.requester_of(id)?;
        if !AccessService::is_approver(requester, self.acting_user) {
            return Err(ActionError::NotAuthorized {
                user_id: self.acting_user,
            });
        }
        Ok(())
    }

    fn requester_of(&self, id: &ItemId) -> Result<UserId, ActionError> {
        let user_id = match id.kind {
            RequestKind::Claim => self
                .collections
                .claims
                .get(&id.original)
                .map(|c| c.requester.user_id),
            RequestKind::Expense => self
                .collections
                .expenses
                .get(&id.original)
                .map(|e| e.requester.user_id),
            RequestKind::Leave => self
                .collections
                .leave_requests
                .get(&id.original)
                .map(|l| l.requester.user_id),
            RequestKind::PurchaseOrder => self
                .collections
                .purchase_orders
                .get(&id.original)
                .map(|o| o.requester.user_id),
            RequestKind::Letter => self
                .collections
                .letters
                .get(&id.original)
                .map(|l| l.requester.user_id),
        };
        user_id.ok_or_else(|| ActionError::NotFound(id.clone()))
    }

    fn transition(&mut self, id: &ItemId, input: &ActionInput) -> Result<(), ActionError> {
        let today = Utc::now().date_naive();
        match id.kind {
            RequestKind::Claim => self
                .collections
                .claims
                .replace(&id.original, |c| {
                    WorkflowService::transition_claim(c, input, today)
                }),
            RequestKind::Expense => self
                .collections
                .expenses
                .replace(&id.original, |e| {
                    WorkflowService::transition_expense(e, input)
                }),
            RequestKind::Leave => self
                .collections
                .leave_requests
                .replace(&id.original, |l| {
                    WorkflowService::transition_leave(l, input, today)
                }),
            RequestKind::PurchaseOrder => self
                .collections
                .purchase_orders
                .replace(&id.original, |o| {
                    WorkflowService::transition_purchase_order(o, input)
                }),
            RequestKind::Letter => self
                .collections
                .letters
                .replace(&id.original, |l| {
                    WorkflowService::transition_letter(l, input, today)
                }),
        }
    }
}
