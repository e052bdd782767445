//! Shared application state for the exporter's HTTP surface.
//!
//! Owns the config and the metrics registry the exporter is registered in.
//! No process-global registry is used.

use std::sync::Arc;

use prometheus::Registry;

use nomad_exporter_core::error::{ExporterError, Result};

use crate::collector::NomadExporter;
use crate::config::ExporterConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    registry: Registry,
}

impl AppState {
    /// Build the exporter for `cfg.nomad` and register it.
    ///
    /// The exporter owns a blocking HTTP client; call this outside of async
    /// contexts (or from `spawn_blocking`).
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let exporter = NomadExporter::new(&cfg.nomad)?;
        Self::with_exporter(cfg, exporter)
    }

    pub fn with_exporter(cfg: ExporterConfig, exporter: NomadExporter) -> Result<Self> {
        let registry = Registry::new();
        registry
            .register(Box::new(exporter))
            .map_err(|e| ExporterError::Internal(format!("register exporter failed: {e}")))?;

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, registry }),
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }
}
