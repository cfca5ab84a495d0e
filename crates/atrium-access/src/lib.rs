//! Atrium capability checks
//!
//! Every console operation asks this crate before touching the backend:
//! may this role perform this action on this resource? Checks run against a
//! deny-by-default policy table; a [`CachedCapabilities`] wrapper memoizes
//! provider answers so dynamic providers are not re-queried per keystroke.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cache;
pub mod error;
pub mod policy;
pub mod provider;

pub use cache::CachedCapabilities;
pub use error::AccessError;
pub use policy::PolicyTable;
pub use provider::{Action, CapabilityProvider, Role};

#[cfg(any(test, feature = "mocks"))]
pub use provider::MockCapabilityProvider;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
