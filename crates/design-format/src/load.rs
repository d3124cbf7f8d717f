use serde::Deserialize;
use studio_types::DesignState;

use crate::errors::LoadError;
use crate::metadata::DesignMetadata;
use crate::save::{FORMAT_NAME, FORMAT_VERSION};

/// The top-level file structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct DesignFileRaw {
    pub format: String,
    pub version: u32,
    pub project: DesignMetadata,
    pub design: DesignState,
}

/// Deserialize a design file from a JSON string.
///
/// Checks the format identifier, refuses files written by a newer
/// version, and migrates older files up to the current version.
pub fn load_design(json: &str) -> Result<(DesignState, DesignMetadata), LoadError> {
    let raw: DesignFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != FORMAT_NAME {
        return Err(LoadError::UnknownFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    let design = if raw.version < FORMAT_VERSION {
        crate::migrate::migrate(raw.design, raw.version, FORMAT_VERSION)?
    } else {
        raw.design
    };

    Ok((design, raw.project))
}
