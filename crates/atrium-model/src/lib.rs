//! Atrium canonical entity model
//!
//! One typed representation per backend record. Everything the rest of the
//! workspace consumes is defined here; the drifting wire shapes produced by
//! the various backends never leave the ingress boundary.
//!
//! # Entities
//!
//! - Staff: [`Employee`], [`SocietyAdmin`], [`SocietyMember`]
//! - Tenancy: [`Society`], [`Block`], [`Unit`]
//! - Community: [`Event`], [`Listing`]
//! - EHS compliance: [`EhsChecklist`], [`IncidentRecord`], [`SafetyStats`],
//!   [`DebitNote`]
//!
//! All ids are server-assigned; the client never fabricates a [`RecordId`].

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod ehs;
pub mod event;
pub mod id;
pub mod listing;
pub mod society;
pub mod staff;

pub use ehs::{
    ChecklistItem, Compliance, DebitNote, DebitNoteStatus, EhsChecklist, IncidentKind,
    IncidentRecord, SafetyStats,
};
pub use event::Event;
pub use id::RecordId;
pub use listing::{Listing, ListingCategory, ListingStatus};
pub use society::{Block, Occupancy, Society, Unit};
pub use staff::{
    AdminLevel, Employee, EmployeeStatus, MemberRole, SocietyAdmin, SocietyMember, StaffRole,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
