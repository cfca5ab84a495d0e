//! Staff and administrator entities
//!
//! Covers the three people-shaped records the console manages:
//! - [`Employee`] — facility staff with a role hierarchy
//! - [`SocietyAdmin`] — tenant administrators, society-scoped or global
//! - [`SocietyMember`] — residents as returned by the member directory

use crate::id::RecordId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Staff role hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    /// Site administrator
    Admin,
    /// Department manager
    Manager,
    /// Sub-manager reporting to a manager
    SubManager,
    /// Line employee
    Employee,
}

impl StaffRole {
    /// Roles below manager must name a reporting manager on their record
    #[inline]
    #[must_use]
    pub fn requires_reporting_manager(self) -> bool {
        matches!(self, Self::SubManager | Self::Employee)
    }

    /// Wire value for this role
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::SubManager => "sub_manager",
            Self::Employee => "employee",
        }
    }
}

impl std::str::FromStr for StaffRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            // Older backends used camelCase here
            "sub_manager" | "subManager" | "sub-manager" => Ok(Self::SubManager),
            "employee" => Ok(Self::Employee),
            other => Err(format!("unknown staff role: {other}")),
        }
    }
}

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// On the active roster
    Active,
    /// Temporarily suspended
    Suspended,
    /// No longer employed
    Inactive,
}

impl std::str::FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            "inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown employee status: {other}")),
        }
    }
}

/// Facility staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Server-assigned id
    pub id: RecordId,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone, if recorded
    pub phone: Option<String>,
    /// Role in the staff hierarchy
    pub role: StaffRole,
    /// Manager this employee reports to; required for sub-manager roles
    pub reporting_manager: Option<RecordId>,
    /// Date of birth, used for the minimum-age rule at intake
    pub date_of_birth: Option<NaiveDate>,
    /// Site (branch) this employee is assigned to
    pub site_id: Option<RecordId>,
    /// Employment status
    pub status: EmployeeStatus,
    /// Creation timestamp where the backend supplies one
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp where the backend supplies one
    pub updated_at: Option<DateTime<Utc>>,
}

/// Administrator scope, derived from society assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminLevel {
    /// Administers every society
    SuperAdmin,
    /// Administers a single society
    SocietyAdmin,
}

/// Society administrator
///
/// An admin with no `society_id` is a Super Admin; the absent assignment is a
/// valid state, not a data error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocietyAdmin {
    /// Server-assigned id
    pub id: RecordId,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone, if recorded
    pub phone: Option<String>,
    /// Society this admin is scoped to; absent for Super Admins
    pub society_id: Option<RecordId>,
    /// Creation timestamp where the backend supplies one
    pub created_at: Option<DateTime<Utc>>,
}

impl SocietyAdmin {
    /// Scope of this administrator
    #[inline]
    #[must_use]
    pub fn level(&self) -> AdminLevel {
        if self.society_id.is_some() {
            AdminLevel::SocietyAdmin
        } else {
            AdminLevel::SuperAdmin
        }
    }
}

/// Role of a resident within a society
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// Society committee admin
    Admin,
    /// Ordinary member
    Member,
}

impl std::str::FromStr for MemberRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            other => Err(format!("unknown member role: {other}")),
        }
    }
}

/// Resident as listed by the member directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocietyMember {
    /// Server-assigned id
    pub id: RecordId,
    /// Full name
    pub name: String,
    /// Directory role
    pub role: MemberRole,
    /// Unit this member occupies, if linked
    pub unit_id: Option<RecordId>,
}
