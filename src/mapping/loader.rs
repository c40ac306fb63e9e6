// TOON record fixtures
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::types::ConstituentRecord;

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("could not decode record list: {0}")]
    Decode(String),
}

#[derive(Debug, Deserialize, Serialize)]
struct RecordsDocument {
    records: Vec<ConstituentRecord>,
}

/// Read a `records[N]{id,neighborhood_raw}:` document (an optional `city`
/// column is picked up too). `null` labels become `None`; bare numeric ids are
/// kept as their decimal text.
pub fn load_records_toon(text: &str) -> Result<Vec<ConstituentRecord>, RecordsError> {
    let doc: RecordsDocument = toon_format::decode_default(text).map_err(|e| RecordsError::Decode(e.to_string()))?;
    debug!(records = doc.records.len(), "loaded constituent records");
    Ok(doc.records)
}
