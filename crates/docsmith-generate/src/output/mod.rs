pub mod csv;

use std::fs;
use std::path::Path;

use crate::errors::GenerationError;
use crate::synth::Document;

/// Write documents as a pretty-printed JSON array.
pub fn write_json(path: &Path, documents: &[Document]) -> Result<(), GenerationError> {
    let payload = serde_json::to_vec_pretty(documents)?;
    fs::write(path, payload)?;
    Ok(())
}
