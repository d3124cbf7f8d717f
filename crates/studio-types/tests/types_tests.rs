use studio_types::{DesignState, HexColor, ImageSource, PresetKind, Product};

// ── Colors ─────────────────────────────────────────────────────────────

#[test]
fn hex_color_validation() {
    assert!(HexColor::parse("#3B82F6").is_ok());
    assert!(HexColor::parse("#3b82f6").is_ok());

    assert!(HexColor::parse("3B82F6").is_err());
    assert!(HexColor::parse("#3B82F").is_err());
    assert!(HexColor::parse("#3B82FG").is_err());
    assert!(HexColor::parse("red").is_err());
}

#[test]
fn hex_color_channels() {
    let c = HexColor::parse("#10B981").unwrap();
    assert_eq!(c.red(), 0x10);
    assert_eq!(c.green(), 0xB9);
    assert_eq!(c.blue(), 0x81);
}

#[test]
fn contrasting_color_flips_at_mid_brightness() {
    let white = HexColor::parse("#FFFFFF").unwrap();
    assert_eq!(white.contrasting().as_str(), "#000000");

    let navy = HexColor::parse("#1E40AF").unwrap();
    assert_eq!(navy.contrasting().as_str(), "#FFFFFF");
}

#[test]
fn hex_color_serde_rejects_invalid_strings() {
    let ok: Result<HexColor, _> = serde_json::from_str("\"#EC4899\"");
    assert!(ok.is_ok());

    let bad: Result<HexColor, _> = serde_json::from_str("\"#nothex\"");
    assert!(bad.is_err());
}

// ── Catalog ────────────────────────────────────────────────────────────

#[test]
fn product_catalog_is_complete() {
    for product in Product::ALL {
        let spec = product.spec();
        assert!(!spec.name.is_empty());
        assert!(spec.model_path.ends_with(".glb"));
        assert!(spec.price_usd > 0.0);
        assert!(spec.scale > 0.0);
    }
}

#[test]
fn products_serialize_snake_case() {
    assert_eq!(serde_json::to_string(&Product::Tshirt).unwrap(), "\"tshirt\"");
    assert_eq!(serde_json::to_string(&Product::Cap).unwrap(), "\"cap\"");
}

#[test]
fn every_preset_has_a_five_color_palette() {
    for kind in PresetKind::ALL {
        let preset = kind.preset();
        assert_eq!(preset.colors.len(), 5);
        assert!(!preset.prompt.is_empty());
        assert_eq!(preset.primary_color(), &preset.colors[0]);
    }
}

#[test]
fn recommendations_only_name_known_presets() {
    for product in Product::ALL {
        let recommended = PresetKind::recommended_for(product);
        assert_eq!(recommended.len(), 4);
    }
}

// ── Design document ────────────────────────────────────────────────────

#[test]
fn default_design_shows_the_logo_slot() {
    let design = DesignState::default();
    assert_eq!(design.product, Product::Tshirt);
    assert!(design.logo_enabled);
    assert!(!design.full_enabled);
    assert!(design.text_elements.is_empty());
}

#[test]
fn image_source_round_trips_as_tagged_json() {
    let source = ImageSource::data_url("data:image/png;base64,AAAA");
    let json = serde_json::to_string(&source).unwrap();
    assert!(json.contains("\"type\":\"data_url\""));

    let back: ImageSource = serde_json::from_str(&json).unwrap();
    assert_eq!(back, source);
    assert!(back.is_embedded());
}
