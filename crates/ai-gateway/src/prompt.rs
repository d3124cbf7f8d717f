//! Prompt enhancement.
//!
//! Each service gets its own suffix per decal kind: FAL models respond
//! well to branding/print vocabulary, Pollinations to simpler style tags.

use crate::api::DecalKind;

/// Enhance a prompt for FAL AI.
pub fn enhance_fal(prompt: &str, kind: DecalKind) -> String {
    match kind {
        DecalKind::Logo => format!(
            "{}, vector logo, flat design, minimalist, clean lines, white background, \
             professional branding",
            prompt
        ),
        DecalKind::Full => format!(
            "{}, t-shirt design, apparel graphic, wearable art, print ready, \
             high contrast, centered composition",
            prompt
        ),
    }
}

/// Enhance a prompt for Pollinations.ai.
pub fn enhance_pollinations(prompt: &str, kind: DecalKind) -> String {
    match kind {
        DecalKind::Logo => format!(
            "{}, minimalist logo, vector art, simple, clean, white background, icon style",
            prompt
        ),
        DecalKind::Full => format!(
            "{}, t-shirt design, digital art, clean, centered, bold colors, graphic design",
            prompt
        ),
    }
}
