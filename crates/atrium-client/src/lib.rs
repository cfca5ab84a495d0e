//! Atrium data-access collaborator
//!
//! One well-defined interface to the backend: [`Backend`] is the raw
//! transport seam (JSON in, JSON out, tagged errors), and [`Repository`]
//! binds a [`Resource`] to a canonical entity type so call sites only ever
//! see `Result<T, ClientError>`.
//!
//! Every operation is a single best-effort request. There is no retry, no
//! backoff, and no request queueing; racing mutations resolve last-write-wins
//! at the store.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod backend;
pub mod error;
pub mod http;
pub mod query;
pub mod repository;
pub mod resource;

pub use backend::Backend;
#[cfg(any(test, feature = "mocks"))]
pub use backend::MockBackend;
pub use error::ClientError;
pub use http::HttpBackend;
pub use query::{ListQuery, Page};
pub use repository::Repository;
pub use resource::Resource;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
