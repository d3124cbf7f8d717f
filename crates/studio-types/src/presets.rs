use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::product::Product;

/// The built-in style presets offered by the design studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetKind {
    Streetwear,
    Minimalist,
    Vaporwave,
    Tech,
    Nature,
    Abstract,
    Retro,
    Geometric,
}

impl PresetKind {
    pub const ALL: [PresetKind; 8] = [
        PresetKind::Streetwear,
        PresetKind::Minimalist,
        PresetKind::Vaporwave,
        PresetKind::Tech,
        PresetKind::Nature,
        PresetKind::Abstract,
        PresetKind::Retro,
        PresetKind::Geometric,
    ];

    pub fn preset(self) -> StylePreset {
        match self {
            PresetKind::Streetwear => StylePreset::build(
                self,
                "Streetwear",
                "urban streetwear design, bold typography, graffiti art, urban fashion, \
                 edgy graphics, limited color palette, street art style, modern urban",
                ["#000000", "#FFFFFF", "#FF6B6B", "#4ECDC4", "#45B7D1"],
            ),
            PresetKind::Minimalist => StylePreset::build(
                self,
                "Minimalist",
                "minimalist design, clean typography, simple geometric shapes, negative \
                 space, elegant, sophisticated, modern, clean lines, subtle",
                ["#FFFFFF", "#000000", "#666666", "#F0F0F0", "#333333"],
            ),
            PresetKind::Vaporwave => StylePreset::build(
                self,
                "Vaporwave",
                "vaporwave aesthetic, retro 80s design, pastel colors, glitch art, \
                 cyberpunk, neon colors, surreal, nostalgic, synthwave style",
                ["#FF6B6B", "#4ECDC4", "#FFEAA7", "#DDA0DD", "#98D8C8"],
            ),
            PresetKind::Tech => StylePreset::build(
                self,
                "Tech",
                "tech futuristic design, cyberpunk style, glowing elements, circuit \
                 patterns, digital art, holographic effects, futuristic technology, sci-fi",
                ["#00FFFF", "#FF00FF", "#000000", "#00FF00", "#0000FF"],
            ),
            PresetKind::Nature => StylePreset::build(
                self,
                "Nature",
                "nature inspired design, botanical illustrations, organic shapes, floral \
                 patterns, leaves, natural elements, earthy tones, plant life",
                ["#2E8B57", "#8FBC8F", "#DAA520", "#CD5C5C", "#4682B4"],
            ),
            PresetKind::Abstract => StylePreset::build(
                self,
                "Abstract",
                "abstract art, colorful geometric patterns, modern art, painterly \
                 effects, expressive brush strokes, contemporary art, artistic composition",
                ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7"],
            ),
            PresetKind::Retro => StylePreset::build(
                self,
                "Retro",
                "retro vintage design, 80s 90s aesthetic, nostalgic graphics, classic \
                 style, old school design, retro gaming art, vintage typography",
                ["#FF6B6B", "#4ECDC4", "#FFD700", "#8A2BE2", "#FF6347"],
            ),
            PresetKind::Geometric => StylePreset::build(
                self,
                "Geometric",
                "geometric patterns, mathematical shapes, precise lines, polygons, \
                 structured design, modern geometry, abstract shapes, symmetrical patterns",
                ["#000000", "#FFFFFF", "#FF6B6B", "#45B7D1", "#FFEAA7"],
            ),
        }
    }

    /// Presets recommended for a given product.
    pub fn recommended_for(product: Product) -> &'static [PresetKind] {
        match product {
            Product::Tshirt => &[
                PresetKind::Streetwear,
                PresetKind::Minimalist,
                PresetKind::Vaporwave,
                PresetKind::Retro,
            ],
            Product::Mug => &[
                PresetKind::Minimalist,
                PresetKind::Nature,
                PresetKind::Abstract,
                PresetKind::Geometric,
            ],
            Product::Cap => &[
                PresetKind::Streetwear,
                PresetKind::Tech,
                PresetKind::Abstract,
                PresetKind::Geometric,
            ],
        }
    }
}

/// A style preset: a display name, a prompt fragment appended to AI
/// generation requests, and a small palette (first entry is the color
/// applied when the preset's colors are adopted).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StylePreset {
    pub kind: PresetKind,
    pub name: &'static str,
    pub prompt: &'static str,
    pub colors: Vec<HexColor>,
}

impl StylePreset {
    fn build(
        kind: PresetKind,
        name: &'static str,
        prompt: &'static str,
        palette: [&'static str; 5],
    ) -> Self {
        let colors = palette
            .iter()
            .map(|s| HexColor::parse(s).expect("preset palette color is valid"))
            .collect();
        Self {
            kind,
            name,
            prompt,
            colors,
        }
    }

    /// The palette color applied by "use this preset's colors".
    pub fn primary_color(&self) -> &HexColor {
        &self.colors[0]
    }
}
