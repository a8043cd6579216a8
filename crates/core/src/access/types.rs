//! Role and permission types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Functional area of the console, used to gate view visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    /// Dashboard and shared views; always visible.
    General,
    /// Customer relationship management.
    Crm,
    /// Finance: claims, expenses, purchase orders.
    Finance,
    /// Human resources: leave, letters.
    Hr,
    /// Console settings.
    Settings,
}

impl Module {
    /// Returns the string representation of the module.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Crm => "crm",
            Self::Finance => "finance",
            Self::Hr => "hr",
            Self::Settings => "settings",
        }
    }

    /// Parses a module from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "general" => Some(Self::General),
            "crm" => Some(Self::Crm),
            "finance" => Some(Self::Finance),
            "hr" => Some(Self::Hr),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The grant a role holds for a module.
///
/// The engine only distinguishes `None` (module invisible) from everything
/// else; the finer levels exist for the host views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    /// No access; the module is hidden.
    None,
    /// Read-only access.
    View,
    /// Read and write access.
    Edit,
    /// Full access including module administration.
    Full,
}

impl PermissionLevel {
    /// Returns true if the level grants any access at all.
    #[must_use]
    pub const fn grants_access(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A role supplied by the host; read-only from the engine's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role name shown in the console.
    pub name: String,
    /// Module grants. Modules absent from the map default to visible.
    pub permissions: HashMap<Module, PermissionLevel>,
}

impl Role {
    /// Creates a role with the given grants.
    pub fn new(name: impl Into<String>, permissions: HashMap<Module, PermissionLevel>) -> Self {
        Self {
            name: name.into(),
            permissions,
        }
    }

    /// Returns the grant for a module, if one is mapped.
    #[must_use]
    pub fn level(&self, module: Module) -> Option<PermissionLevel> {
        self.permissions.get(&module).copied()
    }
}
