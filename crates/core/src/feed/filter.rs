//! Partitioning and narrowing of the unified feed.

use serde::{Deserialize, Serialize};

use crate::entity::{RequestKind, StatusClass};
use crate::feed::types::ApprovalItem;

/// The two disjoint views of the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedTab {
    /// Items still awaiting action.
    #[default]
    Pending,
    /// Resolved items; queryable forever.
    History,
}

impl FeedTab {
    /// The status class shown on this tab.
    #[must_use]
    pub const fn class(self) -> StatusClass {
        match self {
            Self::Pending => StatusClass::Pending,
            Self::History => StatusClass::Resolved,
        }
    }
}

/// Narrowing criteria for one view of the feed.
///
/// The tab partition, the kind filter, and the text query compose with
/// logical AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedFilter {
    /// Which partition to show.
    pub tab: FeedTab,
    /// Exact-match kind filter, if any.
    pub kind: Option<RequestKind>,
    /// Case-insensitive substring query, if any.
    pub query: Option<String>,
}

impl FeedFilter {
    /// Creates a filter for the given tab with no narrowing.
    #[must_use]
    pub fn new(tab: FeedTab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    /// Restricts the view to one request kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: RequestKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Applies a free-text query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Returns true if the item belongs to this view.
    #[must_use]
    pub fn matches(&self, item: &ApprovalItem<'_>) -> bool {
        if item.class != self.tab.class() {
            return false;
        }
        if let Some(kind) = self.kind
            && item.kind != kind
        {
            return false;
        }
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let hit = item.title.to_lowercase().contains(&needle)
                || item.requester_name.to_lowercase().contains(&needle)
                || item
                    .id
                    .original
                    .as_str()
                    .to_lowercase()
                    .contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Narrows the feed to one view. Pure; preserves feed order.
#[must_use]
pub fn filter_feed<'a>(feed: &[ApprovalItem<'a>], filter: &FeedFilter) -> Vec<ApprovalItem<'a>> {
    feed.iter().filter(|i| filter.matches(i)).cloned().collect()
}
