//! Metric instruments published by the exporter.
//!
//! Four singleton gauges plus two families keyed by the `statusCode` label.
//! Family children are created on first sight of a status code and are never
//! evicted; the handles live in [`StatusCodeGauges`].

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{Gauge, GaugeVec, Opts};

use nomad_exporter_core::error::{ExporterError, Result};
use nomad_exporter_core::HealthSnapshot;

pub const NAMESPACE: &str = "nomad";
pub const STATUS_CODE_LABEL: &str = "statusCode";

/// Lazily populated `statusCode -> gauge` handles for both families.
#[derive(Debug, Default)]
pub struct StatusCodeGauges {
    current: BTreeMap<String, Gauge>,
    total: BTreeMap<String, Gauge>,
}

impl StatusCodeGauges {
    pub fn current_codes(&self) -> Vec<&str> {
        self.current.keys().map(String::as_str).collect()
    }

    pub fn total_codes(&self) -> Vec<&str> {
        self.total.keys().map(String::as_str).collect()
    }
}

pub struct Instruments {
    up: Gauge,
    uptime: Gauge,
    response_time_total: Gauge,
    response_time_avg: Gauge,
    count_current: GaugeVec,
    count_total: GaugeVec,
}

impl Instruments {
    pub fn new() -> Result<Self> {
        let instruments = Self {
            up: gauge("up", "Is Nomad up ?")?,
            uptime: gauge("uptime", "Current Nomad uptime")?,
            response_time_total: gauge(
                "request_response_time_total",
                "Total response time of Nomad requests",
            )?,
            response_time_avg: gauge(
                "request_response_time_avg",
                "Average response time of Nomad requests",
            )?,
            count_current: gauge_vec(
                "request_count_current",
                "Number of request Nomad is handling",
            )?,
            count_total: gauge_vec("request_count_total", "Number of request handled by Nomad")?,
        };
        // Not confirmed reachable until the first successful scrape.
        instruments.up.set(0.0);
        Ok(instruments)
    }

    pub fn set_up(&self, up: bool) {
        self.up.set(if up { 1.0 } else { 0.0 });
    }

    /// Push a decoded snapshot into the instruments.
    ///
    /// Current counts are zeroed first so codes missing from `snap` read 0.
    /// Cumulative counts are only overwritten for codes present in `snap`.
    pub fn apply(&self, snap: &HealthSnapshot, codes: &mut StatusCodeGauges) -> Result<()> {
        self.set_up(true);
        self.uptime.set(snap.uptime_sec);
        self.response_time_total.set(snap.total_response_time_sec);
        self.response_time_avg.set(snap.average_response_time_sec);

        for g in codes.current.values() {
            g.set(0.0);
        }
        for (code, n) in &snap.status_code_count {
            child(&self.count_current, &mut codes.current, code)?.set(*n);
        }

        for (code, n) in &snap.total_status_code_count {
            child(&self.count_total, &mut codes.total, code)?.set(*n);
        }

        Ok(())
    }

    pub fn descs(&self) -> Vec<&Desc> {
        let mut out = Vec::with_capacity(6);
        out.extend(self.up.desc());
        out.extend(self.uptime.desc());
        out.extend(self.response_time_total.desc());
        out.extend(self.response_time_avg.desc());
        out.extend(self.count_current.desc());
        out.extend(self.count_total.desc());
        out
    }

    pub fn collect_up(&self) -> Vec<MetricFamily> {
        self.up.collect()
    }

    pub fn collect_all(&self) -> Vec<MetricFamily> {
        let mut out = self.up.collect();
        out.extend(self.uptime.collect());
        out.extend(self.response_time_total.collect());
        out.extend(self.response_time_avg.collect());
        out.extend(self.count_current.collect());
        out.extend(self.count_total.collect());
        out
    }
}

fn child<'a>(
    family: &GaugeVec,
    seen: &'a mut BTreeMap<String, Gauge>,
    code: &str,
) -> Result<&'a Gauge> {
    match seen.entry(code.to_owned()) {
        Entry::Occupied(e) => Ok(e.into_mut()),
        Entry::Vacant(e) => {
            let g = family
                .get_metric_with_label_values(&[code])
                .map_err(|err| ExporterError::Internal(format!("gauge child for {code}: {err}")))?;
            tracing::debug!(status_code = %code, "new status code gauge");
            Ok(e.insert(g))
        }
    }
}

fn gauge(name: &str, help: &str) -> Result<Gauge> {
    Gauge::with_opts(Opts::new(name, help).namespace(NAMESPACE))
        .map_err(|e| ExporterError::Internal(format!("gauge {name}: {e}")))
}

fn gauge_vec(name: &str, help: &str) -> Result<GaugeVec> {
    GaugeVec::new(Opts::new(name, help).namespace(NAMESPACE), &[STATUS_CODE_LABEL])
        .map_err(|e| ExporterError::Internal(format!("gauge family {name}: {e}")))
}
