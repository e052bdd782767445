//! Scrape-and-translate cycle: upstream target, instruments, and the
//! `prometheus` collector tying them together.

pub mod exporter;
pub mod instruments;
pub mod target;

pub use exporter::NomadExporter;
pub use instruments::{Instruments, StatusCodeGauges, NAMESPACE, STATUS_CODE_LABEL};
pub use target::ExporterTarget;
