use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use studio_types::{DesignState, HexColor, ImageSource, Product};

use crate::errors::ShareError;

/// Current share payload version.
pub const SHARE_VERSION: u32 = 1;

/// The compact design snapshot carried inside a share link.
///
/// Text overlays are intentionally omitted: a share link describes the
/// product, color, and decals only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedDesign {
    /// Payload version, so older links survive future shape changes.
    pub v: u32,
    pub product: Product,
    pub color: HexColor,
    pub logo_decal: Option<ImageSource>,
    pub full_decal: Option<ImageSource>,
    /// Unix timestamp (milliseconds) at share time.
    pub timestamp: i64,
}

/// Encode a design into the base64 path segment of a share URL.
///
/// The URL-safe alphabet without padding keeps the payload valid as a
/// path segment.
pub fn encode_share(design: &DesignState, shared_at: DateTime<Utc>) -> String {
    let payload = SharedDesign {
        v: SHARE_VERSION,
        product: design.product,
        color: design.color.clone(),
        logo_decal: design.logo_decal.clone(),
        full_decal: design.full_decal.clone(),
        timestamp: shared_at.timestamp_millis(),
    };
    let json = serde_json::to_vec(&payload).expect("SharedDesign serialization should never fail");
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a share payload back into a design snapshot.
pub fn decode_share(payload: &str) -> Result<SharedDesign, ShareError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| ShareError::InvalidEncoding(e.to_string()))?;

    let shared: SharedDesign =
        serde_json::from_slice(&bytes).map_err(|e| ShareError::ParseError(e.to_string()))?;

    if shared.v > SHARE_VERSION {
        return Err(ShareError::FutureVersion {
            payload_version: shared.v,
            supported_version: SHARE_VERSION,
        });
    }

    Ok(shared)
}

impl SharedDesign {
    /// Rehydrate a full design document from the shared snapshot.
    /// Decal visibility follows the set-decal convention: the logo slot
    /// is shown when present, otherwise the full slot.
    pub fn into_design(self) -> DesignState {
        let logo_enabled = self.logo_decal.is_some() || self.full_decal.is_none();
        DesignState {
            product: self.product,
            color: self.color,
            logo_enabled,
            full_enabled: !logo_enabled && self.full_decal.is_some(),
            logo_decal: self.logo_decal,
            full_decal: self.full_decal,
            text_elements: Vec::new(),
        }
    }
}
