//! Capability provider trait and vocabulary

use crate::error::AccessError;
use atrium_client::Resource;

/// Action a console operation performs on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// List or read records
    View,
    /// Create a record
    Create,
    /// Edit an existing record
    Edit,
    /// Delete a record
    Delete,
    /// Render a record for printing
    Print,
    /// Approve or clear a record
    Approve,
}

impl Action {
    /// Stable name, used in log fields and cache keys
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Print => "print",
            Self::Approve => "approve",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of the signed-in operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Administers every society
    SuperAdmin,
    /// Administers a single society
    SocietyAdmin,
    /// Department manager at a site
    Manager,
    /// Line employee at a site
    Employee,
    /// Society resident
    Resident,
    /// External contractor
    Contractor,
}

impl Role {
    /// Stable name, used in log fields and cache keys
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::SocietyAdmin => "society_admin",
            Self::Manager => "manager",
            Self::Employee => "employee",
            Self::Resident => "resident",
            Self::Contractor => "contractor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers capability questions
///
/// Implementations must be deny-by-default: when a (role, action, resource)
/// triple is not covered by any rule, the answer is `false`.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait::async_trait]
pub trait CapabilityProvider: Send + Sync {
    /// Whether `role` may perform `action` on `resource`
    async fn can(&self, role: Role, action: Action, resource: Resource)
        -> Result<bool, AccessError>;
}
