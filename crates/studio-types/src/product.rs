use serde::{Deserialize, Serialize};

/// The customizable product kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    Tshirt,
    Mug,
    Cap,
}

impl Product {
    pub const ALL: [Product; 3] = [Product::Tshirt, Product::Mug, Product::Cap];

    /// Catalog entry for this product.
    pub fn spec(self) -> ProductSpec {
        match self {
            Product::Tshirt => ProductSpec {
                name: "T-Shirt",
                model_path: "/shirt_baked.glb",
                price_usd: 29.99,
                logo_decal_position: [0.0, 0.04, 0.15],
                full_decal_position: [0.0, 0.0, 0.0],
                scale: 1.0,
                rotation: [0.0, 0.0, 0.0],
            },
            Product::Mug => ProductSpec {
                name: "Coffee Mug",
                model_path: "/mug.glb",
                price_usd: 19.99,
                logo_decal_position: [0.0, 0.1, 0.05],
                full_decal_position: [0.0, 0.1, 0.0],
                scale: 0.8,
                rotation: [0.0, std::f32::consts::FRAC_PI_4, 0.0],
            },
            Product::Cap => ProductSpec {
                name: "Baseball Cap",
                model_path: "/cap.glb",
                price_usd: 24.99,
                logo_decal_position: [0.0, 0.08, 0.08],
                full_decal_position: [0.0, 0.0, 0.0],
                scale: 1.2,
                rotation: [0.0, 0.0, 0.0],
            },
        }
    }
}

/// Static catalog data for one product: the asset to load and how to
/// place decals on it. Consumed by the rendering surface, not the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSpec {
    pub name: &'static str,
    pub model_path: &'static str,
    pub price_usd: f32,
    /// Decal anchor for the logo slot, in model space.
    pub logo_decal_position: [f32; 3],
    /// Decal anchor for the full-coverage slot, in model space.
    pub full_decal_position: [f32; 3],
    pub scale: f32,
    /// Euler rotation applied to the model, radians.
    pub rotation: [f32; 3],
}
