//! Shared error type across nomad-exporter crates.

use thiserror::Error;

/// Stable, machine-readable error kinds (used as the `kind` log field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request could not be sent or the connection failed.
    Transport,
    /// Upstream answered outside of 2xx.
    BadStatus,
    /// Body was not the expected JSON shape.
    Decode,
    /// Invalid configuration.
    Config,
    /// Anything else.
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Transport => "TRANSPORT",
            ErrorKind::BadStatus => "BAD_STATUS",
            ErrorKind::Decode => "DECODE",
            ErrorKind::Config => "CONFIG",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Unified error type used by core and the exporter.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("can't scrape nomad: {0}")]
    Transport(String),
    #[error("can't scrape nomad: status {0}")]
    BadStatus(u16),
    #[error("can't scrape nomad: invalid json: {0}")]
    Decode(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ExporterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExporterError::Transport(_) => ErrorKind::Transport,
            ExporterError::BadStatus(_) => ErrorKind::BadStatus,
            ExporterError::Decode(_) => ErrorKind::Decode,
            ExporterError::Config(_) => ErrorKind::Config,
            ExporterError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// True for the failures a single scrape cycle can produce.
    pub fn is_scrape_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Transport | ErrorKind::BadStatus | ErrorKind::Decode
        )
    }
}
