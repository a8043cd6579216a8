//! In-memory host collections.
//!
//! The host owns the request records; the engine mutates them only through
//! `EntityStore::replace`, which swaps a complete replacement record into
//! the slot. Views rendering concurrently with an action therefore observe
//! either the old record or the new one, never a half-edited value.

use opsdesk_shared::types::RequestId;

use crate::entity::{
    Claim, Expense, HrLetter, ItemId, LeaveRequest, PurchaseOrder, RequestRecord,
};
use crate::workflow::ActionError;

/// One host-owned collection of request records.
///
/// Insertion order is preserved; the feed relies on it for sort-tie
/// stability.
#[derive(Debug, Clone)]
pub struct EntityStore<T: RequestRecord> {
    records: Vec<T>,
}

impl<T: RequestRecord> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: RequestRecord> EntityStore<T> {
    /// Wraps an already-loaded host collection.
    #[must_use]
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    /// All records, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by its host-assigned ID.
    #[must_use]
    pub fn get(&self, id: &RequestId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Appends a record created by the host (or by an entity conversion).
    pub fn insert(&mut self, record: T) {
        self.records.push(record);
    }

    /// Replaces a record by atomic swap.
    ///
    /// The updater builds a complete replacement from the current record;
    /// if it fails, the store is left untouched. The record keeps its slot,
    /// so insertion order is stable across replacements.
    pub fn replace(
        &mut self,
        id: &RequestId,
        updater: impl FnOnce(&T) -> Result<T, ActionError>,
    ) -> Result<(), ActionError> {
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ActionError::NotFound(ItemId::new(T::KIND, id.clone())))?;
        *slot = updater(slot)?;
        Ok(())
    }
}

/// The five host collections handed to the engine.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    /// Reimbursement claims.
    pub claims: EntityStore<Claim>,
    /// Expense reports.
    pub expenses: EntityStore<Expense>,
    /// Leave requests.
    pub leave_requests: EntityStore<LeaveRequest>,
    /// Purchase orders.
    pub purchase_orders: EntityStore<PurchaseOrder>,
    /// HR letter requests.
    pub letters: EntityStore<HrLetter>,
}
