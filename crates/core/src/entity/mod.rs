//! Request entities for the approval queue.
//!
//! Five unrelated record shapes funnel through one review surface. Each
//! keeps its own status vocabulary and fields; the shared pieces are the
//! kind discriminant, the composite item ID, and the pending/resolved
//! classification.
//!
//! # Modules
//!
//! - `status` - Per-kind status vocabularies and `StatusClass`
//! - `types` - The record structs, `RequestKind`, `ItemId`, `RequestRecord`

pub mod status;
pub mod types;

pub use status::{
    ClaimStatus, ExpenseStatus, LeaveStatus, LetterStatus, PurchaseOrderStatus, StatusClass,
};
pub use types::{
    Claim, Expense, HrLetter, ItemId, LeaveRequest, OrderLine, PurchaseOrder, RequestKind,
    RequestRecord, Requester,
};
