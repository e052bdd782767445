//! nomad-exporter library entry.
//!
//! Wires config, the upstream scrape target, the metric instruments and the
//! HTTP surface into one exporter. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod cli;
pub mod collector;
pub mod config;
pub mod ops;
pub mod router;
