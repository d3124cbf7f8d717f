use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::HexColor;
use crate::product::Product;

/// An image payload for a decal slot: either a URL/asset path the client
/// resolves, or an embedded `data:` URL carrying the bytes inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageSource {
    Url { url: String },
    DataUrl { data: String },
}

impl ImageSource {
    pub fn url(url: impl Into<String>) -> Self {
        ImageSource::Url { url: url.into() }
    }

    pub fn data_url(data: impl Into<String>) -> Self {
        ImageSource::DataUrl { data: data.into() }
    }

    /// The raw string the rendering surface hands to its texture loader.
    pub fn as_str(&self) -> &str {
        match self {
            ImageSource::Url { url } => url,
            ImageSource::DataUrl { data } => data,
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, ImageSource::DataUrl { .. })
    }
}

/// A text overlay placed on the product.
///
/// `id` is unique for the lifetime of the document; the order of elements
/// in `DesignState::text_elements` is display-significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub id: Uuid,
    pub text: String,
    pub color: HexColor,
    /// Font size in model units. Always positive and finite.
    pub size: f32,
}

/// The editable design document: product selection, base color, decal
/// slots, and text overlays. All edits mutate it in place; snapshot
/// isolation is provided by `Clone` (every field is an owned value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignState {
    pub product: Product,
    pub color: HexColor,

    pub logo_decal: Option<ImageSource>,
    pub full_decal: Option<ImageSource>,
    /// Whether the logo decal slot is shown. Exclusivity with
    /// `full_enabled` is a UI convention, not a data-model invariant.
    pub logo_enabled: bool,
    pub full_enabled: bool,

    pub text_elements: Vec<TextElement>,
}

impl Default for DesignState {
    fn default() -> Self {
        Self {
            product: Product::Tshirt,
            color: HexColor::parse("#3B82F6").expect("default color is valid"),
            logo_decal: Some(ImageSource::url("/threejs.png")),
            full_decal: Some(ImageSource::url("/threejs.png")),
            logo_enabled: true,
            full_enabled: false,
            text_elements: Vec::new(),
        }
    }
}

impl DesignState {
    /// Find a text element by id.
    pub fn find_text(&self, id: Uuid) -> Option<&TextElement> {
        self.text_elements.iter().find(|t| t.id == id)
    }

    /// Index of a text element by id.
    pub fn text_index(&self, id: Uuid) -> Option<usize> {
        self.text_elements.iter().position(|t| t.id == id)
    }
}
