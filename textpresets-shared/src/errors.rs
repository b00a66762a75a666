use thiserror::Error;

/// Common error types for preset decoding and loading
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Failed to decode preset data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unsupported preset schema version {found} (supported: {supported})")]
    UnsupportedSchemaVersion { found: u32, supported: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type PresetResult<T> = Result<T, PresetError>;
