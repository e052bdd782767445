//! Command-line flags.
//!
//! Flags override values from the optional YAML file, which overrides the
//! built-in defaults.

use clap::Parser;

use nomad_exporter_core::error::Result;

use crate::config::{self, ExporterConfig};

/// Prometheus exporter for the Nomad health endpoint.
#[derive(Parser, Debug, Default)]
#[command(name = "nomad_exporter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// YAML config file.
    #[arg(long = "config.file", value_name = "PATH")]
    pub config_file: Option<String>,

    /// Address to listen on for web interface and telemetry.
    #[arg(long = "web.listen-address", value_name = "ADDR")]
    pub listen_address: Option<String>,

    /// Path under which to expose metrics.
    #[arg(long = "web.telemetry-path", value_name = "PATH")]
    pub telemetry_path: Option<String>,

    /// HTTP API address of a Nomad agent.
    #[arg(long = "nomad.address", env = "NOMAD_ADDR", value_name = "URL")]
    pub nomad_address: Option<String>,

    /// Nomad region to track.
    #[arg(long = "nomad.region", env = "NOMAD_REGION", value_name = "REGION")]
    pub nomad_region: Option<String>,
}

impl Cli {
    /// Merge defaults, the config file and flags, then validate.
    pub fn into_config(self) -> Result<ExporterConfig> {
        let mut cfg = match &self.config_file {
            Some(path) => config::load_from_file(path)?,
            None => ExporterConfig::default(),
        };

        if let Some(v) = self.listen_address {
            cfg.web.listen_address = v;
        }
        if let Some(v) = self.telemetry_path {
            cfg.web.telemetry_path = v;
        }
        if let Some(v) = self.nomad_address {
            cfg.nomad.address = v;
        }
        if let Some(v) = self.nomad_region {
            cfg.nomad.region = Some(v);
        }

        cfg.validate()?;
        Ok(cfg)
    }
}
