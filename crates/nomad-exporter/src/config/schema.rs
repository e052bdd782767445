use std::net::SocketAddr;

use reqwest::Url;
use serde::Deserialize;
use nomad_exporter_core::error::{ExporterError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub web: WebSection,

    #[serde(default)]
    pub nomad: NomadSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            web: WebSection::default(),
            nomad: NomadSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ExporterError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.web.validate()?;
        self.nomad.validate()?;

        Ok(())
    }
}

/// Routes owned by the landing page and the liveness probe.
const RESERVED_PATHS: [&str; 2] = ["/", "/healthz"];

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebSection {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    #[serde(default = "default_telemetry_path")]
    pub telemetry_path: String,
}

impl Default for WebSection {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            telemetry_path: default_telemetry_path(),
        }
    }
}

impl WebSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.telemetry_path.starts_with('/') {
            return Err(ExporterError::Config(
                "web.telemetry_path must start with '/'".into(),
            ));
        }
        if RESERVED_PATHS.contains(&self.telemetry_path.as_str()) {
            return Err(ExporterError::Config(format!(
                "web.telemetry_path must not be {}",
                self.telemetry_path
            )));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen_address.parse().map_err(|e| {
            ExporterError::Config(format!(
                "web.listen_address must be a valid SocketAddr ({}): {e}",
                self.listen_address
            ))
        })
    }
}

fn default_listen_address() -> String {
    "0.0.0.0:9000".into()
}
fn default_telemetry_path() -> String {
    "/metrics".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NomadSection {
    #[serde(default = "default_nomad_address")]
    pub address: String,

    #[serde(default)]
    pub region: Option<String>,
}

impl Default for NomadSection {
    fn default() -> Self {
        Self {
            address: default_nomad_address(),
            region: None,
        }
    }
}

impl NomadSection {
    pub fn validate(&self) -> Result<()> {
        let url = self.url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ExporterError::Config(format!(
                "nomad.address must use http or https, got {}",
                url.scheme()
            )));
        }
        if let Some(region) = &self.region {
            if region.trim().is_empty() {
                return Err(ExporterError::Config("nomad.region must not be blank".into()));
            }
        }
        Ok(())
    }

    pub fn url(&self) -> Result<Url> {
        Url::parse(&self.address).map_err(|e| {
            ExporterError::Config(format!("nomad.address is not a valid url ({}): {e}", self.address))
        })
    }
}

fn default_nomad_address() -> String {
    "http://127.0.0.1:4646".into()
}
