use chrono::Utc;

use crate::messages::{EngineToUi, HistoryAction, UiToEngine};
use crate::studio_state::{BridgeError, StudioState};

/// Dispatch a UI message to the engine and return a response.
///
/// This is the main entry point for processing messages from the
/// JavaScript main thread. Each message is dispatched to the appropriate
/// engine method, and the result is converted to an EngineToUi response.
pub fn dispatch(state: &mut StudioState, msg: UiToEngine) -> EngineToUi {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => EngineToUi::Error {
            message: e.to_string(),
        },
    }
}

fn handle_message(state: &mut StudioState, msg: UiToEngine) -> Result<EngineToUi, BridgeError> {
    match msg {
        // -- Design operations --
        UiToEngine::SelectProduct { product } => {
            state.engine.select_product(product);
            Ok(design_updated_response(state))
        }

        UiToEngine::SetColor { color } => {
            state.engine.set_color(color);
            Ok(design_updated_response(state))
        }

        UiToEngine::ApplyPresetColors { preset } => {
            state.engine.apply_preset_colors(preset);
            Ok(design_updated_response(state))
        }

        UiToEngine::SetLogoDecal { image } => {
            state.engine.set_logo_decal(image);
            Ok(design_updated_response(state))
        }

        UiToEngine::SetFullDecal { image } => {
            state.engine.set_full_decal(image);
            Ok(design_updated_response(state))
        }

        UiToEngine::ToggleLogoDecal => {
            state.engine.toggle_logo_decal();
            Ok(design_updated_response(state))
        }

        UiToEngine::ToggleFullDecal => {
            state.engine.toggle_full_decal();
            Ok(design_updated_response(state))
        }

        // -- Text operations --
        UiToEngine::AddText { text, color, size } => {
            state.engine.add_text(text, color, size)?;
            Ok(design_updated_response(state))
        }

        UiToEngine::RemoveText { id } => {
            state.engine.remove_text(id)?;
            Ok(design_updated_response(state))
        }

        UiToEngine::ClearText => {
            state.engine.clear_text();
            Ok(design_updated_response(state))
        }

        // -- History --
        UiToEngine::Undo => {
            if state.engine.undo() {
                Ok(design_updated_response(state))
            } else {
                Ok(EngineToUi::HistoryExhausted {
                    action: HistoryAction::Undo,
                })
            }
        }

        UiToEngine::Redo => {
            if state.engine.redo() {
                Ok(design_updated_response(state))
            } else {
                Ok(EngineToUi::HistoryExhausted {
                    action: HistoryAction::Redo,
                })
            }
        }

        // -- File operations --
        UiToEngine::SaveDesign => {
            state.metadata.touch();
            let json_data = design_format::save_design(state.engine.design(), &state.metadata);
            Ok(EngineToUi::SaveReady { json_data })
        }

        UiToEngine::LoadDesign { data } => {
            let (design, metadata) = design_format::load_design(&data)?;
            state.metadata = metadata;
            state.engine.replace_design(design.clone());
            Ok(EngineToUi::DesignLoaded { design })
        }

        UiToEngine::ShareDesign => {
            let payload = design_format::encode_share(state.engine.design(), Utc::now());
            Ok(EngineToUi::ShareReady { payload })
        }
    }
}

/// Build a DesignUpdated response from the current engine state.
fn design_updated_response(state: &StudioState) -> EngineToUi {
    EngineToUi::DesignUpdated {
        design: state.engine.design().clone(),
        can_undo: state.engine.can_undo(),
        can_redo: state.engine.can_redo(),
    }
}
