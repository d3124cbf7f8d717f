use serde::{Deserialize, Serialize};
use uuid::Uuid;

use studio_types::{DesignState, HexColor, ImageSource, PresetKind, Product};

/// Messages from the UI (JavaScript main thread) to the engine (WASM Worker).
/// Serialized as JSON for postMessage transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToEngine {
    // -- Design operations --
    /// Switch to a different product model.
    SelectProduct {
        product: Product,
    },
    /// Set the base color.
    SetColor {
        color: HexColor,
    },
    /// Adopt a style preset's primary palette color.
    ApplyPresetColors {
        preset: PresetKind,
    },
    /// Install a logo decal (upload or AI result) and show it.
    SetLogoDecal {
        image: ImageSource,
    },
    /// Install a full-coverage decal and show it.
    SetFullDecal {
        image: ImageSource,
    },
    /// Flip logo decal visibility.
    ToggleLogoDecal,
    /// Flip full-coverage decal visibility.
    ToggleFullDecal,

    // -- Text operations --
    /// Add a text overlay.
    AddText {
        text: String,
        color: HexColor,
        size: f32,
    },
    /// Remove a text overlay by id.
    RemoveText {
        id: Uuid,
    },
    /// Remove all text overlays.
    ClearText,

    // -- History --
    Undo,
    Redo,

    // -- File operations --
    SaveDesign,
    LoadDesign {
        data: String,
    },
    /// Produce a share-link payload for the current design.
    ShareDesign,
}

/// Which history action was requested but had nothing to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryAction {
    Undo,
    Redo,
}

/// Messages from the engine (WASM Worker) to the UI (JavaScript main thread).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineToUi {
    /// The design changed.
    DesignUpdated {
        design: DesignState,
        can_undo: bool,
        can_redo: bool,
    },

    /// Undo/redo was requested with no history available. Soft signal,
    /// not an error; the UI should already have disabled the affordance.
    HistoryExhausted { action: HistoryAction },

    /// Save design is ready.
    SaveReady { json_data: String },

    /// Design loaded successfully.
    DesignLoaded { design: DesignState },

    /// Share payload is ready (base64, URL-path safe).
    ShareReady { payload: String },

    /// An error occurred in the engine.
    Error { message: String },
}
