//! Atrium console orchestration
//!
//! Ties the layers together: configuration, per-page [`ListManager`]s that
//! own a record store and a repository, and the [`AdminConsole`] facade that
//! wires the backend, the capability service, and per-resource managers.
//!
//! Control flow is deliberately simple: independent async operations, no
//! request queueing or cancellation, last write wins on racing mutations, and
//! a failed refresh always leaves last-known-good data in place.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod console;
pub mod error;
pub mod manager;
pub mod notice;
pub mod record;

pub use config::ConsoleConfig;
pub use console::AdminConsole;
pub use error::ConsoleError;
pub use manager::ListManager;
pub use notice::Notice;
pub use record::ConsoleRecord;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
