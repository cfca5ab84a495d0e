//! Atrium print rendering
//!
//! Records are printed by building a [`PrintDocument`] and rendering it to a
//! self-contained HTML byte buffer: inline styles, no external assets, no
//! live references into application state. The caller hands the buffer to
//! whatever output path it has (save, spool, preview) without the renderer
//! knowing or caring.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod document;
pub mod printable;

pub use document::{PrintDocument, Section, SignatureBlock};
pub use printable::Printable;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
