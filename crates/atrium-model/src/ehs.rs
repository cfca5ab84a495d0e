//! EHS (Environment, Health & Safety) compliance entities
//!
//! These mirror the regulatory paper forms the console manages: inspection
//! checklists, the incident register, the safety statistics board, and debit
//! notes issued against contractors for violations.

use crate::id::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-item compliance verdict on a checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compliance {
    /// Item meets the requirement
    Compliant,
    /// Item fails the requirement
    NonCompliant,
    /// Requirement does not apply
    NotApplicable,
}

impl std::str::FromStr for Compliance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compliant" | "yes" => Ok(Self::Compliant),
            "non_compliant" | "nonCompliant" | "no" => Ok(Self::NonCompliant),
            "not_applicable" | "na" | "n/a" => Ok(Self::NotApplicable),
            other => Err(format!("unknown compliance verdict: {other}")),
        }
    }
}

/// Single line on an inspection checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Requirement description
    pub description: String,
    /// Verdict recorded by the inspector
    pub status: Compliance,
    /// Free-text remarks
    pub remarks: Option<String>,
}

/// Site inspection checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EhsChecklist {
    /// Server-assigned id
    pub id: RecordId,
    /// Inspected site
    pub site_id: RecordId,
    /// Contractor under inspection, if any
    pub contractor: Option<String>,
    /// Inspector name
    pub inspector: String,
    /// Inspection date
    pub date: NaiveDate,
    /// Checklist lines
    pub items: Vec<ChecklistItem>,
}

impl EhsChecklist {
    /// Count of non-compliant lines
    #[inline]
    #[must_use]
    pub fn violations(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.status == Compliance::NonCompliant)
            .count()
    }
}

/// Incident classification on the register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentKind {
    /// Treated on site
    FirstAid,
    /// Injury causing lost work time
    LostTimeInjury,
    /// Fatality
    Fatal,
    /// Damage to property
    PropertyDamage,
    /// Environmental release
    Environmental,
    /// No injury, but could have been one
    NearMiss,
}

impl std::str::FromStr for IncidentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_aid" | "firstAid" => Ok(Self::FirstAid),
            "lost_time_injury" | "lostTimeInjury" => Ok(Self::LostTimeInjury),
            "fatal" => Ok(Self::Fatal),
            "property_damage" | "propertyDamage" => Ok(Self::PropertyDamage),
            "environmental" => Ok(Self::Environmental),
            "near_miss" | "nearMiss" => Ok(Self::NearMiss),
            other => Err(format!("unknown incident kind: {other}")),
        }
    }
}

/// Entry in the incident register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    /// Server-assigned id
    pub id: RecordId,
    /// Site where the incident occurred
    pub site_id: RecordId,
    /// Classification
    pub kind: IncidentKind,
    /// Date of occurrence
    pub date: NaiveDate,
    /// What happened
    pub description: String,
    /// People involved, by name
    pub involved: Vec<String>,
    /// Whether the incident has been cleared
    pub cleared: bool,
}

/// Safety statistics board for a reporting period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyStats {
    /// Server-assigned id
    pub id: RecordId,
    /// Site the board covers
    pub site_id: RecordId,
    /// First day of the reporting period
    pub period_start: NaiveDate,
    /// Last day of the reporting period
    pub period_end: NaiveDate,
    /// Man-hours worked in the period
    pub man_hours: u64,
    /// First-aid cases
    pub first_aid_cases: u32,
    /// Lost-time injuries
    pub lost_time_injuries: u32,
    /// Near misses reported
    pub near_misses: u32,
    /// Days since the last lost-time injury
    pub days_since_lti: u32,
}

/// Debit note lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebitNoteStatus {
    /// Issued, payment pending
    Open,
    /// Penalty paid
    Settled,
    /// Withdrawn after review
    Waived,
}

impl std::str::FromStr for DebitNoteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" | "pending" => Ok(Self::Open),
            "settled" | "paid" => Ok(Self::Settled),
            "waived" => Ok(Self::Waived),
            other => Err(format!("unknown debit note status: {other}")),
        }
    }
}

/// Financial penalty issued against a contractor for a safety violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebitNote {
    /// Server-assigned id
    pub id: RecordId,
    /// Site where the violation occurred
    pub site_id: RecordId,
    /// Contractor the note is issued against
    pub contractor: String,
    /// Violation description
    pub violation: String,
    /// Penalty amount in minor currency units
    pub amount: i64,
    /// Issue date
    pub issued_on: NaiveDate,
    /// Lifecycle state
    pub status: DebitNoteStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_counts_violations() {
        let checklist = EhsChecklist {
            id: RecordId::new("c1"),
            site_id: RecordId::new("s1"),
            contractor: Some("Acme Scaffolding".to_string()),
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
                ChecklistItem {
                    description: "Hot work permit".to_string(),
                    status: Compliance::NotApplicable,
                    remarks: None,
                },
            ],
        };

        assert_eq!(checklist.violations(), 1);
    }

    #[test]
    fn incident_kind_parses_wire_variants() {
        assert_eq!("nearMiss".parse::<IncidentKind>().unwrap(), IncidentKind::NearMiss);
        assert_eq!("first_aid".parse::<IncidentKind>().unwrap(), IncidentKind::FirstAid);
        assert!("mystery".parse::<IncidentKind>().is_err());
    }
}
