//! Upstream scrape target.
//!
//! One blocking GET per scrape, reusing a single client for the life of the
//! process. There is no per-scrape deadline beyond the client's own default.

use reqwest::blocking::Client;
use reqwest::Url;

use nomad_exporter_core::error::{ExporterError, Result};
use nomad_exporter_core::HealthSnapshot;

use crate::config::NomadSection;

#[derive(Debug)]
pub struct ExporterTarget {
    url: Url,
    region: Option<String>,
    client: Client,
}

impl ExporterTarget {
    pub fn new(cfg: &NomadSection) -> Result<Self> {
        let url = cfg.url()?;
        let client = Client::builder()
            .build()
            .map_err(|e| ExporterError::Internal(format!("http client init failed: {e}")))?;
        Ok(Self {
            url,
            region: cfg.region.clone(),
            client,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch and decode one health payload.
    pub fn fetch(&self) -> Result<HealthSnapshot> {
        let mut req = self.client.get(self.url.clone());
        if let Some(region) = &self.region {
            req = req.query(&[("region", region.as_str())]);
        }

        let resp = req
            .send()
            .map_err(|e| ExporterError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ExporterError::BadStatus(status.as_u16()));
        }

        let body = resp
            .bytes()
            .map_err(|e| ExporterError::Transport(format!("read body failed: {e}")))?;
        HealthSnapshot::from_slice(&body)
    }
}
