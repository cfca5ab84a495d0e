//! Atrium form drafts and validation
//!
//! Every create/edit dialog in the console is backed by a draft type here.
//! A draft is seeded from defaults (create) or an existing record (edit),
//! validated in full at submit time, and only then serialized as the request
//! payload. A draft that fails validation never reaches the network.
//!
//! Validation collects **all** violations, not just the first, so the form
//! can annotate every offending field in one pass.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod ehs;
pub mod event;
pub mod listing;
pub mod report;
pub mod rules;
pub mod society;
pub mod staff;

pub use ehs::{ChecklistForm, ChecklistItemForm, DebitNoteForm, IncidentForm};
pub use event::EventForm;
pub use listing::ListingForm;
pub use report::{FieldViolation, ValidationReport};
pub use society::{BlockForm, UnitForm};
pub use staff::{EmployeeForm, SocietyAdminForm};

use atrium_model::RecordId;

/// Whether a draft creates a new record or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Creating a new record
    Create,
    /// Editing the record with this id
    Edit(RecordId),
}

impl FormMode {
    /// Id of the record under edit, if any
    #[inline]
    #[must_use]
    pub fn record_id(&self) -> Option<&RecordId> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }

    /// Whether this draft edits an existing record
    #[inline]
    #[must_use]
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

/// Submit-time validation
pub trait Validate {
    /// Run every rule and collect all violations
    fn validate(&self) -> ValidationReport;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
