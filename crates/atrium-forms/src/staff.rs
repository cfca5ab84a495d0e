//! Staff and administrator drafts

use crate::report::ValidationReport;
use crate::{rules, FormMode, Validate};
use atrium_model::{Employee, EmployeeStatus, RecordId, SocietyAdmin, StaffRole};
use chrono::NaiveDate;
use serde::Serialize;
use ulid::Ulid;

/// Minimum hiring age, in years
pub const MIN_EMPLOYEE_AGE: u32 = 18;

/// Draft for creating or editing an [`Employee`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    /// Client-side draft id, never sent on the wire
    #[serde(skip)]
    pub draft_id: Ulid,
    /// Create or edit
    #[serde(skip)]
    pub mode: FormMode,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Role in the staff hierarchy
    pub role: StaffRole,
    /// Manager this employee reports to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_manager: Option<RecordId>,
    /// Date of birth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// Site assignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<RecordId>,
    /// Employment status
    pub status: EmployeeStatus,
    /// Reference date for the age rule; tests pin this
    #[serde(skip)]
    pub age_reference: Option<NaiveDate>,
}

impl EmployeeForm {
    /// Blank draft for a new employee
    #[must_use]
    pub fn create() -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Create,
            name: String::new(),
            email: String::new(),
            phone: None,
            role: StaffRole::Employee,
            reporting_manager: None,
            date_of_birth: None,
            site_id: None,
            status: EmployeeStatus::Active,
            age_reference: None,
        }
    }

    /// Draft seeded from an existing record
    #[must_use]
    pub fn edit(employee: &Employee) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Edit(employee.id.clone()),
            name: employee.name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            role: employee.role,
            reporting_manager: employee.reporting_manager.clone(),
            date_of_birth: employee.date_of_birth,
            site_id: employee.site_id.clone(),
            status: employee.status,
            age_reference: None,
        }
    }
}

impl Validate for EmployeeForm {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        rules::required(&mut report, "name", &self.name);
        rules::required(&mut report, "email", &self.email);
        rules::email(&mut report, "email", &self.email);
        rules::phone(&mut report, "phone", self.phone.as_deref());

        // Roles below manager cannot be submitted without a manager
        rules::required_if(
            &mut report,
            "reportingManager",
            self.role.requires_reporting_manager(),
            &self.reporting_manager,
            "a reporting manager is required for this role",
        );

        if let Some(dob) = self.date_of_birth {
            match self.age_reference {
                Some(today) => {
                    rules::min_age_on(&mut report, "dateOfBirth", dob, MIN_EMPLOYEE_AGE, today);
                }
                None => rules::min_age(&mut report, "dateOfBirth", dob, MIN_EMPLOYEE_AGE),
            }
        }

        report
    }
}

/// Draft for creating or editing a [`SocietyAdmin`]
///
/// A draft with no society is a Super Admin creation and passes validation;
/// society assignment is scope, not a required field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocietyAdminForm {
    /// Client-side draft id, never sent on the wire
    #[serde(skip)]
    pub draft_id: Ulid,
    /// Create or edit
    #[serde(skip)]
    pub mode: FormMode,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Society scope; absent means Super Admin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub society_id: Option<RecordId>,
}

impl SocietyAdminForm {
    /// Blank draft for a new administrator
    #[must_use]
    pub fn create() -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Create,
            name: String::new(),
            email: String::new(),
            phone: None,
            society_id: None,
        }
    }

    /// Draft seeded from an existing record
    #[must_use]
    pub fn edit(admin: &SocietyAdmin) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Edit(admin.id.clone()),
            name: admin.name.clone(),
            email: admin.email.clone(),
            phone: admin.phone.clone(),
            society_id: admin.society_id.clone(),
        }
    }

    /// Scope the draft will create
    #[inline]
    #[must_use]
    pub fn admin_level(&self) -> atrium_model::AdminLevel {
        if self.society_id.is_some() {
            atrium_model::AdminLevel::SocietyAdmin
        } else {
            atrium_model::AdminLevel::SuperAdmin
        }
    }
}

impl Validate for SocietyAdminForm {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        rules::required(&mut report, "name", &self.name);
        rules::required(&mut report, "email", &self.email);
        rules::email(&mut report, "email", &self.email);
        rules::phone(&mut report, "phone", self.phone.as_deref());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_model::AdminLevel;
    use pretty_assertions::assert_eq;

    fn valid_employee() -> EmployeeForm {
        let mut form = EmployeeForm::create();
        form.name = "Priya Sharma".to_string();
        form.email = "priya@example.com".to_string();
        form.role = StaffRole::Manager;
        form
    }

    #[test]
    fn sub_role_without_manager_is_rejected() {
        let mut form = valid_employee();
        form.role = StaffRole::SubManager;
        form.reporting_manager = None;

        let report = form.validate();
        assert_eq!(report.for_field("reportingManager").len(), 1);
    }

    #[test]
    fn sub_role_with_manager_passes() {
        let mut form = valid_employee();
        form.role = StaffRole::Employee;
        form.reporting_manager = Some(RecordId::new("mgr-1"));

        assert!(form.validate().is_empty());
    }

    #[test]
    fn manager_role_does_not_need_manager() {
        let form = valid_employee();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn under_age_employee_is_rejected() {
        let mut form = valid_employee();
        form.age_reference = NaiveDate::from_ymd_opt(2025, 6, 1);
        form.date_of_birth = NaiveDate::from_ymd_opt(2010, 1, 1);

        let report = form.validate();
        assert_eq!(report.for_field("dateOfBirth").len(), 1);
    }

    #[test]
    fn eighteen_year_old_passes() {
        let mut form = valid_employee();
        form.age_reference = NaiveDate::from_ymd_opt(2025, 6, 1);
        form.date_of_birth = NaiveDate::from_ymd_opt(2007, 6, 1);

        assert!(form.validate().is_empty());
    }

    #[test]
    fn admin_without_society_is_valid_super_admin() {
        let mut form = SocietyAdminForm::create();
        form.name = "Asha Rao".to_string();
        form.email = "asha@example.com".to_string();

        assert!(form.validate().is_empty());
        assert_eq!(form.admin_level(), AdminLevel::SuperAdmin);
    }

    #[test]
    fn admin_with_society_is_scoped() {
        let mut form = SocietyAdminForm::create();
        form.name = "Asha Rao".to_string();
        form.email = "asha@example.com".to_string();
        form.society_id = Some(RecordId::new("soc-1"));

        assert_eq!(form.admin_level(), AdminLevel::SocietyAdmin);
    }

    #[test]
    fn draft_payload_omits_absent_fields() {
        let form = valid_employee();
        let payload = serde_json::to_value(&form).unwrap();

        assert_eq!(payload["name"], "Priya Sharma");
        assert!(payload.get("reportingManager").is_none());
        assert!(payload.get("draftId").is_none());
        assert!(payload.get("mode").is_none());
    }
}
