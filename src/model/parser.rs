//! Decoding of persisted `energy` responses.

use crate::error::PayloadError;
use crate::model::EnergySeries;
use crate::storage::ArtifactStore;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Decodes a raw response body into an [`EnergySeries`].
///
/// A payload without a top-level `energy` field yields
/// [`PayloadError::MissingSeries`] so callers can report it without treating
/// it as a decode failure. The time unit is not checked against the known set.
pub fn parse_energy_series(payload: &[u8]) -> Result<EnergySeries, PayloadError> {
    let document: Value = serde_json::from_slice(payload).map_err(PayloadError::malformed)?;

    let energy = document
        .as_object()
        .and_then(|object| object.get("energy"))
        .ok_or(PayloadError::MissingSeries)?;

    let series = EnergySeries::deserialize(energy).map_err(PayloadError::malformed)?;
    tracing::debug!(
        "Parsed {} {} readings in {}",
        series.readings.len(),
        series.time_unit,
        series.unit
    );
    Ok(series)
}

/// Reads an artifact back from the store and parses it.
pub fn read_energy_series(
    store: &dyn ArtifactStore,
    path: &Path,
) -> Result<EnergySeries, PayloadError> {
    let payload = store
        .read(path)
        .map_err(|err| PayloadError::io(path, err))?;
    parse_energy_series(&payload)
}
