//! Outcome reporting for bulk actions.

use crate::entity::ItemId;
use crate::workflow::ActionError;

/// Result of a best-effort bulk action.
///
/// Valid transitions commit, invalid ones are reported here; one bad item
/// never aborts the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkOutcome {
    /// Items whose transition committed, in selection order.
    pub applied: Vec<ItemId>,
    /// Items that failed, with the error each one produced.
    pub failures: Vec<(ItemId, ActionError)>,
}

impl BulkOutcome {
    /// Returns true if every selected item transitioned.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of items the batch touched.
    #[must_use]
    pub fn total(&self) -> usize {
        self.applied.len() + self.failures.len()
    }
}
