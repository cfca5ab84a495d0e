//! Typed decoding of backend payloads
//!
//! One [`FromRaw`] impl per entity. These impls are the complete catalogue
//! of shape drift the console tolerates; nothing outside this module guesses
//! at field names.

use crate::envelope::{list_items, record_object, PageInfo};
use crate::error::DecodeError;
use crate::raw::RawRecord;
use atrium_model::{
    Block, ChecklistItem, DebitNote, EhsChecklist, Employee, EmployeeStatus, Event,
    IncidentRecord, Listing, ListingStatus, SafetyStats, Society, SocietyAdmin, SocietyMember,
    Unit,
};
use serde_json::Value;

/// Decode one canonical entity from a raw backend record
pub trait FromRaw: Sized {
    /// Build the canonical entity, applying alias fallbacks and defaults
    fn from_raw(raw: &RawRecord<'_>) -> Result<Self, DecodeError>;
}

/// Decoded list payload
#[derive(Debug, Clone)]
pub struct DecodedList<T> {
    /// Decoded records, in backend order
    pub items: Vec<T>,
    /// Pagination block, when the envelope carried one
    pub page_info: Option<PageInfo>,
}

/// Decode a list payload of any recognized envelope shape
///
/// # Errors
/// - [`DecodeError::UnrecognizedEnvelope`] if no known shape matches
/// - [`DecodeError::Record`] if any record fails to decode
pub fn decode_list<T: FromRaw>(value: &Value) -> Result<DecodedList<T>, DecodeError> {
    let (raw_items, page_info) = list_items(value)?;

    let mut items = Vec::with_capacity(raw_items.len());
    for (index, raw_value) in raw_items.iter().enumerate() {
        let raw = RawRecord::from_value(raw_value).map_err(|e| e.at_index(index))?;
        items.push(T::from_raw(&raw).map_err(|e| e.at_index(index))?);
    }

    Ok(DecodedList { items, page_info })
}

/// Decode a single-record payload of any recognized envelope shape
pub fn decode_record<T: FromRaw>(value: &Value) -> Result<T, DecodeError> {
    let obj = record_object(value)?;
    T::from_raw(&RawRecord::new(obj))
}

impl FromRaw for Employee {
    fn from_raw(raw: &RawRecord<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: raw.id()?,
            name: raw.str("name")?.to_string(),
            email: raw.str("email")?.to_string(),
            phone: raw.opt_str("phone").map(ToString::to_string),
            role: raw.parsed("role")?,
            reporting_manager: raw.reference("reporting_manager"),
            date_of_birth: raw.opt_date("date_of_birth")?,
            site_id: raw.reference("site_id"),
            // Older backends omit status for active staff
            status: raw.opt_parsed("status")?.unwrap_or(EmployeeStatus::Active),
            created_at: raw.opt_datetime("created_at"),
            updated_at: raw.opt_datetime("updated_at"),
        })
    }
}

impl FromRaw for SocietyAdmin {
    fn from_raw(raw: &RawRecord<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: raw.id()?,
            name: raw.str("name")?.to_string(),
            email: raw.str("email")?.to_string(),
            phone: raw.opt_str("phone").map(ToString::to_string),
            // Absent society is a Super Admin, not an error
            society_id: raw.reference("society_id"),
            created_at: raw.opt_datetime("created_at"),
        })
    }
}

impl FromRaw for SocietyMember {
    fn from_raw(raw: &RawRecord<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: raw.id()?,
            name: raw.str("name")?.to_string(),
            role: raw.parsed("role")?,
            unit_id: raw.reference("unit_id"),
        })
    }
}

impl FromRaw for Society {
    fn from_raw(raw: &RawRecord<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: raw.id()?,
            name: raw.str("name")?.to_string(),
            address: raw.str("address")?.to_string(),
            city: raw.opt_str("city").map(ToString::to_string),
            created_at: raw.opt_datetime("created_at"),
        })
    }
}

impl FromRaw for Block {
    fn from_raw(raw: &RawRecord<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: raw.id()?,
            society_id: raw
                .reference("society_id")
                .ok_or_else(|| DecodeError::missing("society_id"))?,
            society_name: raw.reference_name("society_id"),
            name: raw.str("name")?.to_string(),
            floors: raw.opt_u32("floors"),
        })
    }
}

impl FromRaw for Unit {
    fn from_raw(raw: &RawRecord<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: raw.id()?,
            block_id: raw
                .reference("block_id")
                .ok_or_else(|| DecodeError::missing("block_id"))?,
            number: raw.str("number")?.to_string(),
            floor: raw.opt_u32("floor"),
            occupancy: raw.parsed("occupancy")?,
        })
    }
}

impl FromRaw for Event {
    fn from_raw(raw: &RawRecord<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: raw.id()?,
            society_id: raw
                .reference("society_id")
                .ok_or_else(|| DecodeError::missing("society_id"))?,
            title: raw.str("title")?.to_string(),
            venue: raw.str("venue")?.to_string(),
            starts_at: raw.datetime("starts_at")?,
            ends_at: raw.datetime("ends_at")?,
            capacity: raw.opt_u32("capacity"),
            registered: raw.opt_u32("registered").unwrap_or(0),
        })
    }
}

impl FromRaw for Listing {
    fn from_raw(raw: &RawRecord<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: raw.id()?,
            society_id: raw
                .reference("society_id")
                .ok_or_else(|| DecodeError::missing("society_id"))?,
            seller: raw.str("seller")?.to_string(),
            title: raw.str("title")?.to_string(),
            price: raw.amount("price")?,
            category: raw.parsed("category")?,
            status: raw.opt_parsed("status")?.unwrap_or(ListingStatus::Active),
            created_at: raw.opt_datetime("created_at"),
        })
    }
}

impl FromRaw for ChecklistItem {
    fn from_raw(raw: &RawRecord<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            description: raw.str("description")?.to_string(),
            status: raw.parsed("status")?,
            remarks: raw.opt_str("remarks").map(ToString::to_string),
        })
    }
}

impl FromRaw for EhsChecklist {
    fn from_raw(raw: &RawRecord<'_>) -> Result<Self, DecodeError> {
        let raw_items = raw.array("items")?;
        let mut items = Vec::with_capacity(raw_items.len());
        for (index, raw_value) in raw_items.iter().enumerate() {
            let item = RawRecord::from_value(raw_value)
                .and_then(|r| ChecklistItem::from_raw(&r))
                .map_err(|e| e.at_index(index))?;
            items.push(item);
        }

        Ok(Self {
            id: raw.id()?,
            site_id: raw
                .reference("site_id")
                .ok_or_else(|| DecodeError::missing("site_id"))?,
            contractor: raw.opt_str("contractor").map(ToString::to_string),
            inspector: raw.str("inspector")?.to_string(),
            date: raw.date("date")?,
            items,
        })
    }
}

impl FromRaw for IncidentRecord {
    fn from_raw(raw: &RawRecord<'_>) -> Result<Self, DecodeError> {
        let involved = raw
            .opt_array("involved")
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            id: raw.id()?,
            site_id: raw
                .reference("site_id")
                .ok_or_else(|| DecodeError::missing("site_id"))?,
            kind: raw.parsed("kind")?,
            date: raw.date("date")?,
            description: raw.str("description")?.to_string(),
            involved,
            cleared: raw.opt_bool("cleared").unwrap_or(false),
        })
    }
}

impl FromRaw for SafetyStats {
    fn from_raw(raw: &RawRecord<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: raw.id()?,
            site_id: raw
                .reference("site_id")
                .ok_or_else(|| DecodeError::missing("site_id"))?,
            period_start: raw.date("period_start")?,
            period_end: raw.date("period_end")?,
            man_hours: raw.opt_u64("man_hours").unwrap_or(0),
            first_aid_cases: raw.opt_u32("first_aid_cases").unwrap_or(0),
            lost_time_injuries: raw.opt_u32("lost_time_injuries").unwrap_or(0),
            near_misses: raw.opt_u32("near_misses").unwrap_or(0),
            days_since_lti: raw.opt_u32("days_since_lti").unwrap_or(0),
        })
    }
}

impl FromRaw for DebitNote {
    fn from_raw(raw: &RawRecord<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: raw.id()?,
            site_id: raw
                .reference("site_id")
                .ok_or_else(|| DecodeError::missing("site_id"))?,
            contractor: raw.str("contractor")?.to_string(),
            violation: raw.str("violation")?.to_string(),
            amount: raw.amount("amount")?,
            issued_on: raw.date("issued_on")?,
            status: raw.parsed("status")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_model::{Compliance, IncidentKind, MemberRole, StaffRole};
    use serde_json::json;

    #[test]
    fn decodes_employee_from_legacy_message_envelope() {
        let payload = json!({
            "message": [
                {
                    "_id": "e1",
                    "name": "Priya Sharma",
                    "email": "priya@example.com",
                    "role": "employee",
                    "manager": "m7",
                    "branch_id": "b2",
                    "dob": "1991-06-14"
                }
            ]
        });

        let decoded: DecodedList<Employee> = decode_list(&payload).unwrap();
        assert_eq!(decoded.items.len(), 1);

        let employee = &decoded.items[0];
        assert_eq!(employee.id.as_str(), "e1");
        assert_eq!(employee.role, StaffRole::Employee);
        assert_eq!(employee.reporting_manager.as_ref().unwrap().as_str(), "m7");
        assert_eq!(employee.site_id.as_ref().unwrap().as_str(), "b2");
        assert!(employee.date_of_birth.is_some());
        assert_eq!(employee.status, EmployeeStatus::Active);
    }

    #[test]
    fn decodes_member_list_from_message_envelope() {
        let payload = json!({
            "message": [
                {"_id": "1", "name": "A", "role": "admin"},
                {"_id": "2", "name": "B", "role": "member"}
            ]
        });

        let decoded: DecodedList<SocietyMember> = decode_list(&payload).unwrap();
        assert_eq!(decoded.items.len(), 2);
        assert_eq!(decoded.items[0].role, MemberRole::Admin);
        assert_eq!(decoded.items[1].role, MemberRole::Member);
    }

    #[test]
    fn society_admin_without_society_is_super_admin() {
        let payload = json!({"data": {"_id": "a1", "name": "Dev", "email": "dev@example.com"}});

        let admin: SocietyAdmin = decode_record(&payload).unwrap();
        assert!(admin.society_id.is_none());
        assert_eq!(admin.level(), atrium_model::AdminLevel::SuperAdmin);
    }

    #[test]
    fn bad_record_fails_whole_list_with_position() {
        let payload = json!({
            "data": [
                {"_id": "e1", "name": "Ok", "email": "ok@example.com", "role": "manager"},
                {"_id": "e2", "name": "Bad", "email": "bad@example.com", "role": "wizard"}
            ]
        });

        let err = decode_list::<Employee>(&payload).unwrap_err();
        assert!(matches!(err, DecodeError::Record { index: 1, .. }));
    }

    #[test]
    fn decodes_checklist_with_items() {
        let payload = json!({
            "_id": "c1",
            "site": {"_id": "s1", "name": "Tower B"},
            "inspector": "R. Nair",
            "date": "2025-02-10",
            "items": [
                {"description": "Guard rails", "status": "compliant"},
                {"description": "Harnesses", "status": "nonCompliant", "remarks": "expired"}
            ]
        });

        let checklist: EhsChecklist = decode_record(&payload).unwrap();
        assert_eq!(checklist.site_id.as_str(), "s1");
        assert_eq!(checklist.items.len(), 2);
        assert_eq!(checklist.items[1].status, Compliance::NonCompliant);
    }

    #[test]
    fn decodes_incident_with_defaults() {
        let payload = json!({
            "_id": "i1",
            "siteId": "s1",
            "kind": "nearMiss",
            "date": "2025-01-20",
            "description": "Unsecured ladder"
        });

        let incident: IncidentRecord = decode_record(&payload).unwrap();
        assert_eq!(incident.kind, IncidentKind::NearMiss);
        assert!(incident.involved.is_empty());
        assert!(!incident.cleared);
    }

    #[test]
    fn unrecognized_envelope_is_loud() {
        let payload = json!({"ok": true});
        assert!(matches!(
            decode_list::<Employee>(&payload),
            Err(DecodeError::UnrecognizedEnvelope)
        ));
    }
}
