//! Static policy table

use crate::error::AccessError;
use crate::provider::{Action, CapabilityProvider, Role};
use atrium_client::Resource;

/// Built-in capability rules
///
/// Deny-by-default: any triple not matched below is refused. The table is a
/// plain match so a reviewer can read the whole policy in one place.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyTable;

impl PolicyTable {
    /// New table with the built-in rules
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Synchronous rule lookup
    #[must_use]
    pub fn allows(self, role: Role, action: Action, resource: Resource) -> bool {
        use Action::{Approve, Create, Delete, Edit, Print, View};
        use Resource::{
            Blocks, DebitNotes, EhsChecklists, Employees, Events, Incidents, Listings, Members,
            SafetyStats, Societies, SocietyAdmins, Units,
        };

        match role {
            // Global scope, no restrictions
            Role::SuperAdmin => true,

            Role::SocietyAdmin => match resource {
                Blocks | Units | Members | Events | Listings => true,
                Societies => matches!(action, View | Edit),
                SocietyAdmins => matches!(action, View),
                Employees | EhsChecklists | Incidents | SafetyStats | DebitNotes => {
                    matches!(action, View)
                }
            },

            Role::Manager => match resource {
                Employees => matches!(action, View | Create | Edit),
                EhsChecklists | Incidents | DebitNotes => {
                    matches!(action, View | Create | Edit | Print | Approve)
                }
                SafetyStats => matches!(action, View | Create | Edit | Print),
                _ => false,
            },

            Role::Employee => match resource {
                Employees | EhsChecklists | SafetyStats => matches!(action, View),
                // Any employee can report an incident
                Incidents => matches!(action, View | Create),
                _ => false,
            },

            Role::Resident => match resource {
                Events => matches!(action, View),
                Listings => matches!(action, View | Create | Edit),
                _ => false,
            },

            Role::Contractor => match resource {
                EhsChecklists | DebitNotes => matches!(action, View),
                _ => false,
            },
        }
    }
}

#[async_trait::async_trait]
impl CapabilityProvider for PolicyTable {
    async fn can(
        &self,
        role: Role,
        action: Action,
        resource: Resource,
    ) -> Result<bool, AccessError> {
        Ok(self.allows(role, action, resource))
    }
}
