//! Store and filter trait impls for the canonical entities
//!
//! Which fields are searchable and which dimensions are filterable per page
//! lives here, next to the engine that consumes it.

use crate::filter::{FilterKey, Searchable};
use crate::store::Identified;
use atrium_model::{
    Block, DebitNote, EhsChecklist, Employee, Event, IncidentRecord, Listing, RecordId,
    SafetyStats, Society, SocietyAdmin, SocietyMember, Unit,
};

macro_rules! identified {
    ($($entity:ty),* $(,)?) => {
        $(
            impl Identified for $entity {
                fn record_id(&self) -> &RecordId {
                    &self.id
                }
            }
        )*
    };
}

identified!(
    Employee,
    SocietyAdmin,
    SocietyMember,
    Society,
    Block,
    Unit,
    Event,
    Listing,
    EhsChecklist,
    IncidentRecord,
    SafetyStats,
    DebitNote,
);

impl Searchable for Employee {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn filter_field(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Role => Some(self.role.as_str().to_string()),
            FilterKey::Status => serde_variant(&self.status),
            FilterKey::Site => self.site_id.as_ref().map(ToString::to_string),
            _ => None,
        }
    }
}

impl Searchable for SocietyAdmin {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn filter_field(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Society => self.society_id.as_ref().map(ToString::to_string),
            _ => None,
        }
    }
}

impl Searchable for SocietyMember {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn filter_field(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Role => serde_variant(&self.role),
            _ => None,
        }
    }
}

impl Searchable for Society {
    fn search_haystacks(&self) -> Vec<&str> {
        let mut haystacks = vec![self.name.as_str(), self.address.as_str()];
        if let Some(city) = &self.city {
            haystacks.push(city);
        }
        haystacks
    }

    fn filter_field(&self, _key: FilterKey) -> Option<String> {
        None
    }
}

impl Searchable for Block {
    fn search_haystacks(&self) -> Vec<&str> {
        let mut haystacks = vec![self.name.as_str()];
        if let Some(society) = &self.society_name {
            haystacks.push(society);
        }
        haystacks
    }

    fn filter_field(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Society => Some(self.society_id.to_string()),
            _ => None,
        }
    }
}

impl Searchable for Unit {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.number]
    }

    fn filter_field(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Block => Some(self.block_id.to_string()),
            FilterKey::Status => serde_variant(&self.occupancy),
            _ => None,
        }
    }
}

impl Searchable for Event {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.venue]
    }

    fn filter_field(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Society => Some(self.society_id.to_string()),
            _ => None,
        }
    }
}

impl Searchable for Listing {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.seller]
    }

    fn filter_field(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Category => serde_variant(&self.category),
            FilterKey::Status => serde_variant(&self.status),
            FilterKey::Society => Some(self.society_id.to_string()),
            _ => None,
        }
    }
}

impl Searchable for EhsChecklist {
    fn search_haystacks(&self) -> Vec<&str> {
        let mut haystacks = vec![self.inspector.as_str()];
        if let Some(contractor) = &self.contractor {
            haystacks.push(contractor);
        }
        haystacks
    }

    fn filter_field(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Site => Some(self.site_id.to_string()),
            _ => None,
        }
    }
}

impl Searchable for IncidentRecord {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.description]
    }

    fn filter_field(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Category => serde_variant(&self.kind),
            FilterKey::Site => Some(self.site_id.to_string()),
            _ => None,
        }
    }
}

impl Searchable for SafetyStats {
    fn search_haystacks(&self) -> Vec<&str> {
        Vec::new()
    }

    fn filter_field(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Site => Some(self.site_id.to_string()),
            _ => None,
        }
    }
}

impl Searchable for DebitNote {
    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.contractor, &self.violation]
    }

    fn filter_field(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Status => serde_variant(&self.status),
            FilterKey::Site => Some(self.site_id.to_string()),
            _ => None,
        }
    }
}

/// Wire spelling of a unit enum variant, via its serde rename
fn serde_variant<T: serde::Serialize>(value: &T) -> Option<String> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{apply_filters, FilterQuery};
    use atrium_model::{EmployeeStatus, StaffRole};

    fn employee(name: &str, role: StaffRole) -> Employee {
        Employee {
            id: RecordId::new(name),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            role,
            reporting_manager: None,
            date_of_birth: None,
            site_id: Some(RecordId::new("s1")),
            status: EmployeeStatus::Active,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn employee_filters_by_role_wire_value() {
        let records = vec![
            employee("Priya", StaffRole::Manager),
            employee("Arun", StaffRole::SubManager),
        ];

        let query = FilterQuery::new().with_selection(FilterKey::Role, "sub_manager");
        let visible = apply_filters(&records, &query);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Arun");
    }

    #[test]
    fn employee_search_covers_email() {
        let records = vec![employee("Priya", StaffRole::Manager)];
        let query = FilterQuery::new().with_search("priya@example");

        assert_eq!(apply_filters(&records, &query).len(), 1);
    }
}
