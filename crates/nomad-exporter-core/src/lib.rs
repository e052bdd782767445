//! nomad-exporter core: upstream payload model and the shared error surface.
//!
//! This crate knows how to turn the Nomad health JSON into a typed
//! [`HealthSnapshot`] and how scrape failures are classified. It carries no
//! HTTP or runtime dependencies so the decoding rules can be tested in
//! isolation from the collector and the server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed upstream
//! bodies must surface as `ExporterError::Decode`, never as a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod health;

pub use error::{ErrorKind, ExporterError, Result};
pub use health::HealthSnapshot;
