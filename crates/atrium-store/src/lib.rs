//! Atrium record stores and filtering
//!
//! Each console page owns a [`RecordStore`]: an ordered, disposable cache of
//! the backend's list, replaced wholesale on every successful fetch. The
//! [`filter`] module is the pure engine that derives the visible subset from
//! the store contents and the user's search/filter selections.
//!
//! The store makes no consistency promises beyond last-write-wins; the
//! backend is the source of truth.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod entities;
pub mod filter;
pub mod registry;
pub mod store;

pub use filter::{apply_filters, FilterKey, FilterQuery, Searchable};
pub use registry::StoreRegistry;
pub use store::{Identified, RecordStore, StoreStats};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
