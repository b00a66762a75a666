//! JSON decoding for the bundled preset document.
//!
//! The document is plain JSON with camelCase keys. Decoding is strict about
//! shape (a missing required field or type mismatch is an error) and about
//! the `schemaVersion` tag, and lenient about unknown fields.

use std::path::Path;

use crate::errors::{PresetError, PresetResult};
use crate::{PresetData, SUPPORTED_SCHEMA_VERSION};

/// Decode a preset document from raw JSON bytes.
///
/// Rejects documents whose `schemaVersion` differs from
/// [`SUPPORTED_SCHEMA_VERSION`].
pub fn parse_presets(bytes: &[u8]) -> PresetResult<PresetData> {
    let data: PresetData = serde_json::from_slice(bytes)?;
    if data.schema_version != SUPPORTED_SCHEMA_VERSION {
        return Err(PresetError::UnsupportedSchemaVersion {
            found: data.schema_version,
            supported: SUPPORTED_SCHEMA_VERSION,
        });
    }
    Ok(data)
}

/// Decode a preset document from a JSON string.
pub fn parse_presets_str(content: &str) -> PresetResult<PresetData> {
    parse_presets(content.as_bytes())
}

/// Decode a preset document from a file path.
pub fn parse_presets_file(path: &Path) -> PresetResult<PresetData> {
    let bytes = std::fs::read(path)?;
    parse_presets(&bytes)
}
