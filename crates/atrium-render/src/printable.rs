//! Printable record types

use crate::document::{PrintDocument, Section};
use atrium_model::{Compliance, DebitNote, EhsChecklist, Employee, IncidentRecord, SafetyStats};
use chrono::NaiveDate;

/// Records that render to a print document
pub trait Printable {
    /// Build the print document for this record
    fn print_document(&self) -> PrintDocument;

    /// Render straight to a self-contained byte buffer
    #[must_use]
    fn print(&self) -> Vec<u8> {
        self.print_document().into_bytes()
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Minor currency units as a display amount
fn format_amount(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let minor = minor.unsigned_abs();
    format!("{sign}{}.{:02}", minor / 100, minor % 100)
}

fn compliance_label(compliance: Compliance) -> &'static str {
    match compliance {
        Compliance::Compliant => "Compliant",
        Compliance::NonCompliant => "Non-compliant",
        Compliance::NotApplicable => "N/A",
    }
}

impl Printable for DebitNote {
    fn print_document(&self) -> PrintDocument {
        PrintDocument::new("Debit Note")
            .with_subtitle(format!("No. {}", self.id))
            .with_meta("Issued on", format_date(self.issued_on))
            .with_meta("Site", self.site_id.to_string())
            .with_meta("Contractor", &self.contractor)
            .with_section(Section::KeyValues {
                heading: String::new(),
                rows: vec![
                    ("Violation".to_string(), self.violation.clone()),
                    ("Amount".to_string(), format_amount(self.amount)),
                    ("Status".to_string(), format!("{:?}", self.status)),
                ],
            })
            .with_signature("Issued by")
            .with_signature("Contractor")
    }
}

impl Printable for EhsChecklist {
    fn print_document(&self) -> PrintDocument {
        let rows = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                vec![
                    (index + 1).to_string(),
                    item.description.clone(),
                    compliance_label(item.status).to_string(),
                    item.remarks.clone().unwrap_or_default(),
                ]
            })
            .collect();

        let mut doc = PrintDocument::new("EHS Inspection Checklist")
            .with_meta("Date", format_date(self.date))
            .with_meta("Site", self.site_id.to_string())
            .with_meta("Inspector", &self.inspector);
        if let Some(contractor) = &self.contractor {
            doc = doc.with_meta("Contractor", contractor);
        }
        doc.with_meta("Violations", self.violations().to_string())
            .with_section(Section::Table {
                heading: "Items".to_string(),
                columns: vec![
                    "#".to_string(),
                    "Requirement".to_string(),
                    "Status".to_string(),
                    "Remarks".to_string(),
                ],
                rows,
            })
            .with_signature("Inspector")
            .with_signature("Site in-charge")
    }
}

impl Printable for IncidentRecord {
    fn print_document(&self) -> PrintDocument {
        PrintDocument::new("Incident Report")
            .with_subtitle(format!("No. {}", self.id))
            .with_meta("Date", format_date(self.date))
            .with_meta("Site", self.site_id.to_string())
            .with_meta("Classification", format!("{:?}", self.kind))
            .with_meta("Cleared", if self.cleared { "Yes" } else { "No" })
            .with_section(Section::KeyValues {
                heading: "Details".to_string(),
                rows: vec![
                    ("Description".to_string(), self.description.clone()),
                    ("Persons involved".to_string(), self.involved.join(", ")),
                ],
            })
            .with_signature("Reported by")
            .with_signature("Safety officer")
    }
}

impl Printable for SafetyStats {
    fn print_document(&self) -> PrintDocument {
        PrintDocument::new("Safety Statistics Board")
            .with_meta(
                "Period",
                format!(
                    "{} to {}",
                    format_date(self.period_start),
                    format_date(self.period_end)
                ),
            )
            .with_meta("Site", self.site_id.to_string())
            .with_section(Section::KeyValues {
                heading: String::new(),
                rows: vec![
                    ("Man-hours worked".to_string(), self.man_hours.to_string()),
                    ("First-aid cases".to_string(), self.first_aid_cases.to_string()),
                    (
                        "Lost-time injuries".to_string(),
                        self.lost_time_injuries.to_string(),
                    ),
                    ("Near misses".to_string(), self.near_misses.to_string()),
                    (
                        "Days since last LTI".to_string(),
                        self.days_since_lti.to_string(),
                    ),
                ],
            })
            .with_signature("Safety officer")
    }
}

impl Printable for Employee {
    fn print_document(&self) -> PrintDocument {
        let mut rows = vec![
            ("Name".to_string(), self.name.clone()),
            ("Email".to_string(), self.email.clone()),
            ("Role".to_string(), self.role.as_str().to_string()),
            ("Status".to_string(), format!("{:?}", self.status)),
        ];
        if let Some(phone) = &self.phone {
            rows.push(("Phone".to_string(), phone.clone()));
        }
        if let Some(manager) = &self.reporting_manager {
            rows.push(("Reports to".to_string(), manager.to_string()));
        }
        if let Some(site) = &self.site_id {
            rows.push(("Site".to_string(), site.to_string()));
        }

        PrintDocument::new("Employee Record")
            .with_subtitle(format!("No. {}", self.id))
            .with_section(Section::KeyValues {
                heading: String::new(),
                rows,
            })
            .with_signature("HR")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_model::{ChecklistItem, DebitNoteStatus, RecordId};

    #[test]
    fn amount_formats_minor_units() {
        assert_eq!(format_amount(450_000), "4500.00");
        assert_eq!(format_amount(99), "0.99");
        assert_eq!(format_amount(-2_50), "-2.50");
    }

    #[test]
    fn debit_note_prints_to_bytes() {
        let note = DebitNote {
            id: RecordId::new("dn-7"),
            site_id: RecordId::new("site-1"),
            contractor: "Acme Scaffolding".to_string(),
            violation: "No harness at height".to_string(),
            amount: 2_500_000,
            issued_on: NaiveDate::from_ymd_opt(2025, 2, 12).unwrap(),
            status: DebitNoteStatus::Open,
        };

        let html = String::from_utf8(note.print()).unwrap();
        assert!(html.contains("Debit Note"));
        assert!(html.contains("Acme Scaffolding"));
        assert!(html.contains("25000.00"));
        assert!(html.contains("12 Feb 2025"));
    }

    #[test]
    fn checklist_prints_every_item() {
        let checklist = EhsChecklist {
            id: RecordId::new("c1"),
            site_id: RecordId::new("site-1"),
            contractor: None,
            inspector: "R. Nair".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            items: vec![
                ChecklistItem {
                    description: "Guard rails installed".to_string(),
                    status: Compliance::Compliant,
                    remarks: None,
                },
                ChecklistItem {
                    description: "Harnesses inspected".to_string(),
                    status: Compliance::NonCompliant,
                    remarks: Some("two expired tags".to_string()),
                },
            ],
        };

        let html = String::from_utf8(checklist.print()).unwrap();
        assert!(html.contains("Guard rails installed"));
        assert!(html.contains("Non-compliant"));
        assert!(html.contains("two expired tags"));
    }
}
