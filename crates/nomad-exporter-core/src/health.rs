//! Nomad health payload.
//!
//! Every field is optional on the wire. A missing field and an explicit
//! `null` both decode to the zero value, including `null` count values inside
//! the status code maps. Unknown top-level fields are ignored, and so is
//! anything after the first JSON value in the body.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::error::{ExporterError, Result};

/// Status code string (e.g. `"200"`) -> count.
pub type StatusCodeCounts = BTreeMap<String, f64>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HealthSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub uptime_sec: f64,

    #[serde(default, deserialize_with = "counts_null_as_zero")]
    pub status_code_count: StatusCodeCounts,

    #[serde(default, deserialize_with = "counts_null_as_zero")]
    pub total_status_code_count: StatusCodeCounts,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total_response_time_sec: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub average_response_time_sec: f64,
}

impl HealthSnapshot {
    /// Decode a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::Deserializer::from_slice(body)
            .into_iter::<Self>()
            .next()
            .ok_or_else(|| ExporterError::Decode("empty body".into()))?
            .map_err(|e| ExporterError::Decode(e.to_string()))
    }
}

fn null_as_default<'de, D, T>(de: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

fn counts_null_as_zero<'de, D>(de: D) -> std::result::Result<StatusCodeCounts, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<f64>>> = Option::deserialize(de)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(code, n)| (code, n.unwrap_or_default()))
        .collect())
}
