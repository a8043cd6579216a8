//! Visibility and approver checks.

use opsdesk_shared::types::UserId;

use super::types::{Module, PermissionLevel, Role};
use crate::entity::RequestKind;

/// Stateless service for access checks.
pub struct AccessService;

impl AccessService {
    /// Returns true if the module is visible to the role.
    ///
    /// `General` is always visible. Modules missing from the role's map
    /// default to visible: existing roles rely on this fail-open behavior,
    /// so it is part of the contract, not a bug to fix.
    #[must_use]
    pub fn is_module_visible(role: &Role, module: Module) -> bool {
        if module == Module::General {
            return true;
        }
        role.level(module).is_none_or(PermissionLevel::grants_access)
    }

    /// Returns true if the acting user may act as approver for a request.
    ///
    /// This is an identity check only: anyone other than the requester
    /// qualifies. It deliberately does not consult the role's module grants
    /// for the act of approving; those gate list visibility, nothing more.
    #[must_use]
    pub fn is_approver(requester: UserId, acting_user: UserId) -> bool {
        requester != acting_user
    }

    /// The module that owns a request kind's review actions.
    #[must_use]
    pub const fn module_for_kind(kind: RequestKind) -> Module {
        match kind {
            RequestKind::Claim | RequestKind::Expense | RequestKind::PurchaseOrder => {
                Module::Finance
            }
            RequestKind::Leave | RequestKind::Letter => Module::Hr,
        }
    }
}
