//! Test support for the console crates
//!
//! [`MemoryBackend`] stands in for the HTTP backend: wire-shaped JSON in a
//! map, answered through whichever envelope style the test needs, with
//! injectable failures. Fixtures produce realistic wire payloads.

#![warn(unreachable_pub)]

pub mod backend;
pub mod fixtures;

pub use backend::{EnvelopeStyle, MemoryBackend};

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install the test tracing subscriber once per process
///
/// Honors `RUST_LOG`; output goes through the capture-aware test writer.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
