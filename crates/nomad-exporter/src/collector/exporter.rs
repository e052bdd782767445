//! Nomad health collector.
//!
//! Every `collect` performs exactly one upstream scrape while holding the
//! instrument lock, so concurrent polls are serialized into sequential scrapes
//! and the status code maps are never touched concurrently.

use std::sync::{Mutex, MutexGuard, PoisonError};

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;

use nomad_exporter_core::error::Result;

use super::instruments::{Instruments, StatusCodeGauges};
use super::target::ExporterTarget;
use crate::config::NomadSection;

pub struct NomadExporter {
    target: ExporterTarget,
    instruments: Instruments,
    codes: Mutex<StatusCodeGauges>,
}

impl NomadExporter {
    pub fn new(cfg: &NomadSection) -> Result<Self> {
        Ok(Self {
            target: ExporterTarget::new(cfg)?,
            instruments: Instruments::new()?,
            codes: Mutex::new(StatusCodeGauges::default()),
        })
    }

    /// Run one scrape cycle. On failure `up` drops to 0 and nothing else moves.
    pub fn scrape(&self) -> Result<()> {
        let mut codes = self.lock();
        self.scrape_locked(&mut codes)
    }

    /// Current value of every instrument, without contacting upstream.
    pub fn snapshot(&self) -> Vec<MetricFamily> {
        let _codes = self.lock();
        self.instruments.collect_all()
    }

    /// Status codes seen so far, as `(current, total)`.
    pub fn known_status_codes(&self) -> (Vec<String>, Vec<String>) {
        let codes = self.lock();
        let own = |v: Vec<&str>| -> Vec<String> { v.into_iter().map(str::to_string).collect() };
        (own(codes.current_codes()), own(codes.total_codes()))
    }

    fn scrape_locked(&self, codes: &mut StatusCodeGauges) -> Result<()> {
        let res = self
            .target
            .fetch()
            .and_then(|snap| self.instruments.apply(&snap, codes));
        if res.is_err() {
            self.instruments.set_up(false);
        }
        res
    }

    fn lock(&self) -> MutexGuard<'_, StatusCodeGauges> {
        self.codes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Collector for NomadExporter {
    fn desc(&self) -> Vec<&Desc> {
        self.instruments.descs()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let mut codes = self.lock();

        if let Err(e) = self.scrape_locked(&mut codes) {
            tracing::error!(
                kind = e.kind().as_str(),
                target = %self.target.url(),
                error = %e,
                "scrape failed"
            );
            return self.instruments.collect_up();
        }
        tracing::debug!(
            current_codes = codes.current_codes().len(),
            total_codes = codes.total_codes().len(),
            "scrape ok"
        );

        self.instruments.collect_all()
    }
}
