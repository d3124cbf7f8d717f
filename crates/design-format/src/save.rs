use serde::Serialize;
use studio_types::DesignState;

use crate::metadata::DesignMetadata;

/// Current file format version.
pub const FORMAT_VERSION: u32 = 1;

/// Format identifier written into every design file.
pub(crate) const FORMAT_NAME: &str = "merch-studio";

/// The top-level file structure.
#[derive(Debug, Clone, Serialize)]
pub struct DesignFile {
    /// Format identifier.
    pub format: String,
    /// Format version number.
    pub version: u32,
    /// Design metadata.
    pub project: DesignMetadata,
    /// The design document itself.
    pub design: DesignState,
}

/// Serialize a design to a pretty-printed JSON string.
pub fn save_design(design: &DesignState, metadata: &DesignMetadata) -> String {
    let file = DesignFile {
        format: FORMAT_NAME.to_string(),
        version: FORMAT_VERSION,
        project: metadata.clone(),
        design: design.clone(),
    };
    serde_json::to_string_pretty(&file).expect("DesignState serialization should never fail")
}
