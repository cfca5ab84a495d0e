//! Tenancy drafts: blocks and units

use crate::report::ValidationReport;
use crate::{rules, FormMode, Validate};
use atrium_model::{Block, Occupancy, RecordId, Unit};
use serde::Serialize;
use ulid::Ulid;

/// Draft for creating or editing a [`Block`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockForm {
    /// Client-side draft id, never sent on the wire
    #[serde(skip)]
    pub draft_id: Ulid,
    /// Create or edit
    #[serde(skip)]
    pub mode: FormMode,
    /// Owning society
    #[serde(skip_serializing_if = "Option::is_none")]
    pub society_id: Option<RecordId>,
    /// Block name
    pub name: String,
    /// Number of floors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floors: Option<u32>,
}

impl BlockForm {
    /// Blank draft scoped to a society
    #[must_use]
    pub fn create(society_id: RecordId) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Create,
            society_id: Some(society_id),
            name: String::new(),
            floors: None,
        }
    }

    /// Draft seeded from an existing record
    #[must_use]
    pub fn edit(block: &Block) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Edit(block.id.clone()),
            society_id: Some(block.society_id.clone()),
            name: block.name.clone(),
            floors: block.floors,
        }
    }
}

impl Validate for BlockForm {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        rules::required(&mut report, "name", &self.name);
        rules::required_some(&mut report, "societyId", &self.society_id);
        rules::bounded(&mut report, "floors", self.floors, 1, 200);
        report
    }
}

/// Draft for creating or editing a [`Unit`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitForm {
    /// Client-side draft id, never sent on the wire
    #[serde(skip)]
    pub draft_id: Ulid,
    /// Create or edit
    #[serde(skip)]
    pub mode: FormMode,
    /// Owning block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<RecordId>,
    /// Door number
    pub number: String,
    /// Floor the unit is on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<u32>,
    /// Occupancy state
    pub occupancy: Occupancy,
}

impl UnitForm {
    /// Blank draft scoped to a block
    #[must_use]
    pub fn create(block_id: RecordId) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Create,
            block_id: Some(block_id),
            number: String::new(),
            floor: None,
            occupancy: Occupancy::Vacant,
        }
    }

    /// Draft seeded from an existing record
    #[must_use]
    pub fn edit(unit: &Unit) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Edit(unit.id.clone()),
            block_id: Some(unit.block_id.clone()),
            number: unit.number.clone(),
            floor: unit.floor,
            occupancy: unit.occupancy,
        }
    }
}

impl Validate for UnitForm {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        rules::required(&mut report, "number", &self.number);
        rules::required_some(&mut report, "blockId", &self.block_id);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_requires_name_and_society() {
        let mut form = BlockForm::create(RecordId::new("soc-1"));
        form.society_id = None;

        let report = form.validate();
        assert_eq!(report.for_field("name").len(), 1);
        assert_eq!(report.for_field("societyId").len(), 1);
    }

    #[test]
    fn block_floors_are_bounded() {
        let mut form = BlockForm::create(RecordId::new("soc-1"));
        form.name = "A Wing".to_string();
        form.floors = Some(0);

        assert_eq!(form.validate().for_field("floors").len(), 1);

        form.floors = Some(12);
        assert!(form.validate().is_empty());
    }

    #[test]
    fn unit_requires_door_number() {
        let mut form = UnitForm::create(RecordId::new("blk-1"));
        assert!(!form.validate().is_empty());

        form.number = "A-304".to_string();
        assert!(form.validate().is_empty());
    }
}
