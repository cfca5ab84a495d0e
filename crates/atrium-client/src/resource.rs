//! Backend resource catalogue

/// Every backend collection the console talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Facility staff
    Employees,
    /// Society administrators
    SocietyAdmins,
    /// Societies (tenants)
    Societies,
    /// Building blocks
    Blocks,
    /// Residential units
    Units,
    /// Society members (resident directory)
    Members,
    /// Society events
    Events,
    /// Marketplace listings
    Listings,
    /// EHS inspection checklists
    EhsChecklists,
    /// EHS incident register
    Incidents,
    /// EHS safety statistics boards
    SafetyStats,
    /// Debit notes
    DebitNotes,
}

impl Resource {
    /// URL path segment for this resource
    #[inline]
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Employees => "employees",
            Self::SocietyAdmins => "society-admins",
            Self::Societies => "societies",
            Self::Blocks => "blocks",
            Self::Units => "units",
            Self::Members => "members",
            Self::Events => "events",
            Self::Listings => "listings",
            Self::EhsChecklists => "ehs/checklists",
            Self::Incidents => "ehs/incidents",
            Self::SafetyStats => "ehs/safety-stats",
            Self::DebitNotes => "ehs/debit-notes",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
