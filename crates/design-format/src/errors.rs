/// Errors during design file loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("could not parse design file: {0}")]
    ParseError(String),

    #[error("not a merch-studio design file (format identifier {0:?})")]
    UnknownFormat(String),

    #[error("file version {file_version} is newer than this build supports (max {supported_version})")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("migration from v{from} to v{to} failed: {reason}")]
    MigrationFailed { from: u32, to: u32, reason: String },
}

/// Errors during share-link decoding.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ShareError {
    #[error("share payload is not valid base64: {0}")]
    InvalidEncoding(String),

    #[error("could not parse shared design: {0}")]
    ParseError(String),

    #[error("share payload version {payload_version} is newer than this build supports (max {supported_version})")]
    FutureVersion {
        payload_version: u32,
        supported_version: u32,
    },
}
