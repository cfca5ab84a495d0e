//! EHS drafts: checklists, incidents, debit notes

use crate::report::ValidationReport;
use crate::{rules, FormMode, Validate};
use atrium_model::{
    ChecklistItem, Compliance, DebitNote, DebitNoteStatus, EhsChecklist, IncidentKind,
    IncidentRecord, RecordId,
};
use chrono::NaiveDate;
use serde::Serialize;
use ulid::Ulid;

/// One line of a checklist draft
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItemForm {
    /// Requirement description
    pub description: String,
    /// Verdict recorded by the inspector
    pub status: Compliance,
    /// Free-text remarks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl ChecklistItemForm {
    /// Blank compliant line
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            status: Compliance::Compliant,
            remarks: None,
        }
    }

    fn from_item(item: &ChecklistItem) -> Self {
        Self {
            description: item.description.clone(),
            status: item.status,
            remarks: item.remarks.clone(),
        }
    }
}

/// Draft for an inspection checklist
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistForm {
    /// Client-side draft id, never sent on the wire
    #[serde(skip)]
    pub draft_id: Ulid,
    /// Create or edit
    #[serde(skip)]
    pub mode: FormMode,
    /// Inspected site
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<RecordId>,
    /// Contractor under inspection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contractor: Option<String>,
    /// Inspector name
    pub inspector: String,
    /// Inspection date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Checklist lines
    pub items: Vec<ChecklistItemForm>,
}

impl ChecklistForm {
    /// Blank draft scoped to a site
    #[must_use]
    pub fn create(site_id: RecordId) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Create,
            site_id: Some(site_id),
            contractor: None,
            inspector: String::new(),
            date: None,
            items: Vec::new(),
        }
    }

    /// Draft seeded from an existing record
    #[must_use]
    pub fn edit(checklist: &EhsChecklist) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Edit(checklist.id.clone()),
            site_id: Some(checklist.site_id.clone()),
            contractor: checklist.contractor.clone(),
            inspector: checklist.inspector.clone(),
            date: Some(checklist.date),
            items: checklist.items.iter().map(ChecklistItemForm::from_item).collect(),
        }
    }
}

impl Validate for ChecklistForm {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        rules::required(&mut report, "inspector", &self.inspector);
        rules::required_some(&mut report, "siteId", &self.site_id);
        rules::required_some(&mut report, "date", &self.date);

        if self.items.is_empty() {
            report.reject("items", "a checklist needs at least one item");
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.description.trim().is_empty() {
                report.reject(format!("items[{index}].description"), "required");
            }
        }

        report
    }
}

/// Draft for an incident register entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentForm {
    /// Client-side draft id, never sent on the wire
    #[serde(skip)]
    pub draft_id: Ulid,
    /// Create or edit
    #[serde(skip)]
    pub mode: FormMode,
    /// Site where the incident occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<RecordId>,
    /// Classification
    pub kind: IncidentKind,
    /// Date of occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// What happened
    pub description: String,
    /// People involved, by name
    pub involved: Vec<String>,
    /// Whether the incident has been cleared
    pub cleared: bool,
}

impl IncidentForm {
    /// Blank draft scoped to a site
    #[must_use]
    pub fn create(site_id: RecordId) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Create,
            site_id: Some(site_id),
            kind: IncidentKind::NearMiss,
            date: None,
            description: String::new(),
            involved: Vec::new(),
            cleared: false,
        }
    }

    /// Draft seeded from an existing record
    #[must_use]
    pub fn edit(incident: &IncidentRecord) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Edit(incident.id.clone()),
            site_id: Some(incident.site_id.clone()),
            kind: incident.kind,
            date: Some(incident.date),
            description: incident.description.clone(),
            involved: incident.involved.clone(),
            cleared: incident.cleared,
        }
    }
}

impl Validate for IncidentForm {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        rules::required(&mut report, "description", &self.description);
        rules::required_some(&mut report, "siteId", &self.site_id);
        rules::required_some(&mut report, "date", &self.date);
        report
    }
}

/// Draft for a contractor debit note
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebitNoteForm {
    /// Client-side draft id, never sent on the wire
    #[serde(skip)]
    pub draft_id: Ulid,
    /// Create or edit
    #[serde(skip)]
    pub mode: FormMode,
    /// Site where the violation occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<RecordId>,
    /// Contractor the note is issued against
    pub contractor: String,
    /// Violation description
    pub violation: String,
    /// Penalty amount in minor currency units
    pub amount: i64,
    /// Issue date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
    /// Lifecycle state
    pub status: DebitNoteStatus,
}

impl DebitNoteForm {
    /// Blank draft scoped to a site
    #[must_use]
    pub fn create(site_id: RecordId) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Create,
            site_id: Some(site_id),
            contractor: String::new(),
            violation: String::new(),
            amount: 0,
            issued_on: None,
            status: DebitNoteStatus::Open,
        }
    }

    /// Draft seeded from an existing record
    #[must_use]
    pub fn edit(note: &DebitNote) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Edit(note.id.clone()),
            site_id: Some(note.site_id.clone()),
            contractor: note.contractor.clone(),
            violation: note.violation.clone(),
            amount: note.amount,
            issued_on: Some(note.issued_on),
            status: note.status,
        }
    }
}

impl Validate for DebitNoteForm {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        rules::required(&mut report, "contractor", &self.contractor);
        rules::required(&mut report, "violation", &self.violation);
        rules::required_some(&mut report, "siteId", &self.site_id);
        rules::required_some(&mut report, "issuedOn", &self.issued_on);
        rules::positive_amount(&mut report, "amount", self.amount);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_checklist_is_rejected() {
        let mut form = ChecklistForm::create(RecordId::new("site-1"));
        form.inspector = "R. Nair".to_string();
        form.date = NaiveDate::from_ymd_opt(2025, 2, 10);

        let report = form.validate();
        assert_eq!(report.for_field("items").len(), 1);
    }

    #[test]
    fn checklist_with_blank_item_is_rejected() {
        let mut form = ChecklistForm::create(RecordId::new("site-1"));
        form.inspector = "R. Nair".to_string();
        form.date = NaiveDate::from_ymd_opt(2025, 2, 10);
        form.items.push(ChecklistItemForm::new("Guard rails installed"));
        form.items.push(ChecklistItemForm::new("  "));

        let report = form.validate();
        assert_eq!(report.for_field("items[1].description").len(), 1);
    }

    #[test]
    fn checklist_with_one_item_passes() {
        let mut form = ChecklistForm::create(RecordId::new("site-1"));
        form.inspector = "R. Nair".to_string();
        form.date = NaiveDate::from_ymd_opt(2025, 2, 10);
        form.items.push(ChecklistItemForm::new("Harnesses inspected"));

        assert!(form.validate().is_empty());
    }

    #[test]
    fn debit_note_requires_positive_amount() {
        let mut form = DebitNoteForm::create(RecordId::new("site-1"));
        form.contractor = "Acme Scaffolding".to_string();
        form.violation = "No harness at height".to_string();
        form.issued_on = NaiveDate::from_ymd_opt(2025, 2, 12);
        form.amount = 0;

        assert_eq!(form.validate().for_field("amount").len(), 1);

        form.amount = 2_500_000;
        assert!(form.validate().is_empty());
    }

    #[test]
    fn incident_requires_description_and_date() {
        let form = IncidentForm::create(RecordId::new("site-1"));
        let report = form.validate();
        assert!(!report.for_field("description").is_empty());
        assert!(!report.for_field("date").is_empty());
    }
}
