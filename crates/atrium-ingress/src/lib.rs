//! Atrium ingress boundary
//!
//! The single place where backend payload shapes are understood. The
//! backends this console talks to disagree on almost everything: list
//! envelopes (`{data: [...]}`, `{message: [...]}`, `{result: [...]}`, bare
//! arrays), record envelopes (`{data: {...}}`, `{user: {...}}`, bare
//! objects), id fields (`_id`, `id`, `uuid`), and field spellings
//! (`branch_id` vs `branch`, snake_case vs camelCase).
//!
//! Everything downstream of this crate sees only the canonical
//! `atrium-model` types. Shape drift handled anywhere else is a bug.
//!
//! # Core Operations
//!
//! - **Classify**: [`Envelope::classify`] names the payload shape
//! - **Decode**: [`decode_list`] / [`decode_record`] produce typed entities
//! - **Recover**: [`error_message`] extracts backend error text defensively

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod decode;
pub mod envelope;
pub mod error;
pub mod raw;

pub use decode::{decode_list, decode_record, DecodedList, FromRaw};
pub use envelope::{error_message, Envelope, PageInfo};
pub use error::DecodeError;
pub use raw::RawRecord;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
