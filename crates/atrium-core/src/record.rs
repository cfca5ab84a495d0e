//! Binding of entity types to backend resources

use atrium_client::Resource;
use atrium_ingress::FromRaw;
use atrium_model::{
    Block, DebitNote, EhsChecklist, Employee, Event, IncidentRecord, Listing, SafetyStats,
    Society, SocietyAdmin, SocietyMember, Unit,
};
use atrium_store::{Identified, Searchable};

/// Entity types the console manages end to end
///
/// The one place the resource catalogue meets the canonical model. A type
/// implementing this can be listed, stored, filtered, and submitted through a
/// [`crate::ListManager`].
pub trait ConsoleRecord: FromRaw + Identified + Searchable + Clone + Send + Sync + 'static {
    /// Backend collection holding this entity
    const RESOURCE: Resource;
}

macro_rules! console_record {
    ($($entity:ty => $resource:ident),+ $(,)?) => {
        $(
            impl ConsoleRecord for $entity {
                const RESOURCE: Resource = Resource::$resource;
            }
        )+
    };
}

console_record! {
    Employee => Employees,
    SocietyAdmin => SocietyAdmins,
    Society => Societies,
    Block => Blocks,
    Unit => Units,
    SocietyMember => Members,
    Event => Events,
    Listing => Listings,
    EhsChecklist => EhsChecklists,
    IncidentRecord => Incidents,
    SafetyStats => SafetyStats,
    DebitNote => DebitNotes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entity_maps_to_its_collection() {
        assert_eq!(Employee::RESOURCE, Resource::Employees);
        assert_eq!(DebitNote::RESOURCE, Resource::DebitNotes);
        assert_eq!(SocietyMember::RESOURCE, Resource::Members);
    }
}
