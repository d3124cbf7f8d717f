use studio_bridge::messages::{EngineToUi, HistoryAction, UiToEngine};
use studio_bridge::{dispatch, StudioState};
use studio_types::{HexColor, ImageSource, Product};

fn color(s: &str) -> HexColor {
    HexColor::parse(s).unwrap()
}

fn expect_design_updated(response: EngineToUi) -> (studio_types::DesignState, bool, bool) {
    match response {
        EngineToUi::DesignUpdated {
            design,
            can_undo,
            can_redo,
        } => (design, can_undo, can_redo),
        other => panic!("expected DesignUpdated, got {:?}", other),
    }
}

// ── Dispatch paths ─────────────────────────────────────────────────────

#[test]
fn select_product_round_trip() {
    let mut state = StudioState::new();
    let response = dispatch(
        &mut state,
        UiToEngine::SelectProduct {
            product: Product::Mug,
        },
    );

    let (design, can_undo, _) = expect_design_updated(response);
    assert_eq!(design.product, Product::Mug);
    assert!(can_undo);
}

#[test]
fn undo_over_the_bridge() {
    let mut state = StudioState::new();
    dispatch(
        &mut state,
        UiToEngine::SetColor {
            color: color("#EF4444"),
        },
    );

    let (design, _, can_redo) = expect_design_updated(dispatch(&mut state, UiToEngine::Undo));
    assert_ne!(design.color, color("#EF4444"));
    assert!(can_redo);

    let (design, _, _) = expect_design_updated(dispatch(&mut state, UiToEngine::Redo));
    assert_eq!(design.color, color("#EF4444"));
}

#[test]
fn exhausted_history_is_a_soft_signal() {
    let mut state = StudioState::new();

    match dispatch(&mut state, UiToEngine::Undo) {
        EngineToUi::HistoryExhausted { action } => assert_eq!(action, HistoryAction::Undo),
        other => panic!("expected HistoryExhausted, got {:?}", other),
    }
    match dispatch(&mut state, UiToEngine::Redo) {
        EngineToUi::HistoryExhausted { action } => assert_eq!(action, HistoryAction::Redo),
        other => panic!("expected HistoryExhausted, got {:?}", other),
    }
}

#[test]
fn invalid_text_becomes_an_error_response() {
    let mut state = StudioState::new();
    let response = dispatch(
        &mut state,
        UiToEngine::AddText {
            text: "   ".to_string(),
            color: color("#FFFFFF"),
            size: 0.08,
        },
    );

    assert!(matches!(response, EngineToUi::Error { .. }));
}

#[test]
fn save_load_round_trip_over_the_bridge() {
    let mut state = StudioState::new();
    dispatch(
        &mut state,
        UiToEngine::SetLogoDecal {
            image: ImageSource::data_url("data:image/png;base64,QUJD"),
        },
    );

    let json_data = match dispatch(&mut state, UiToEngine::SaveDesign) {
        EngineToUi::SaveReady { json_data } => json_data,
        other => panic!("expected SaveReady, got {:?}", other),
    };

    let mut fresh = StudioState::new();
    match dispatch(&mut fresh, UiToEngine::LoadDesign { data: json_data }) {
        EngineToUi::DesignLoaded { design } => {
            assert_eq!(
                design.logo_decal,
                Some(ImageSource::data_url("data:image/png;base64,QUJD"))
            );
        }
        other => panic!("expected DesignLoaded, got {:?}", other),
    }
}

#[test]
fn load_of_garbage_reports_an_error() {
    let mut state = StudioState::new();
    let response = dispatch(
        &mut state,
        UiToEngine::LoadDesign {
            data: "{}".to_string(),
        },
    );
    assert!(matches!(response, EngineToUi::Error { .. }));
}

#[test]
fn share_produces_a_decodable_payload() {
    let mut state = StudioState::new();
    dispatch(
        &mut state,
        UiToEngine::SelectProduct {
            product: Product::Cap,
        },
    );

    let payload = match dispatch(&mut state, UiToEngine::ShareDesign) {
        EngineToUi::ShareReady { payload } => payload,
        other => panic!("expected ShareReady, got {:?}", other),
    };

    let shared = design_format::decode_share(&payload).expect("payload decodes");
    assert_eq!(shared.product, Product::Cap);
}

// ── Wire format ────────────────────────────────────────────────────────

#[test]
fn messages_use_tagged_json() {
    let msg: UiToEngine = serde_json::from_str(
        r##"{"type": "SetColor", "color": "#8B5CF6"}"##,
    )
    .expect("tagged message parses");
    assert!(matches!(msg, UiToEngine::SetColor { .. }));

    let json = serde_json::to_string(&UiToEngine::Undo).unwrap();
    assert_eq!(json, r#"{"type":"Undo"}"#);
}

#[test]
fn design_updated_serializes_with_history_flags() {
    let mut state = StudioState::new();
    let response = dispatch(&mut state, UiToEngine::ToggleFullDecal);

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"type\":\"DesignUpdated\""));
    assert!(json.contains("\"can_undo\":true"));
    assert!(json.contains("\"can_redo\":false"));
}

#[test]
fn malformed_color_fails_message_parse() {
    let result: Result<UiToEngine, _> =
        serde_json::from_str(r#"{"type": "SetColor", "color": "red"}"#);
    assert!(result.is_err());
}
