//! StudioBuilder — fluent API for scripting customizer workflows in tests.
//!
//! Wraps `studio_bridge::dispatch()` to test the real dispatch path, not a
//! simulation. Methods accept plain strings where the wire types want
//! validated values, for readability.

use uuid::Uuid;

use studio_bridge::messages::{EngineToUi, UiToEngine};
use studio_bridge::{dispatch, StudioState};
use studio_types::{DesignState, HexColor, ImageSource, PresetKind, Product};

/// A fluent builder for driving and inspecting editing sessions in tests.
pub struct StudioBuilder {
    pub state: StudioState,
    /// Human-readable trail of (step, response kind) for diagnostics.
    history: Vec<(String, String)>,
}

impl StudioBuilder {
    pub fn new() -> Self {
        Self {
            state: StudioState::new(),
            history: Vec::new(),
        }
    }

    // ── Design steps ────────────────────────────────────────────────────

    pub fn select_product(&mut self, product: Product) -> &mut Self {
        self.step(
            format!("select_product {:?}", product),
            UiToEngine::SelectProduct { product },
        );
        self
    }

    pub fn set_color(&mut self, color: &str) -> Result<&mut Self, HarnessError> {
        let color = parse_color(color)?;
        self.step(format!("set_color {}", color), UiToEngine::SetColor { color });
        Ok(self)
    }

    pub fn apply_preset_colors(&mut self, preset: PresetKind) -> &mut Self {
        self.step(
            format!("apply_preset {:?}", preset),
            UiToEngine::ApplyPresetColors { preset },
        );
        self
    }

    pub fn set_logo_decal(&mut self, image: ImageSource) -> &mut Self {
        self.step("set_logo_decal".to_string(), UiToEngine::SetLogoDecal { image });
        self
    }

    pub fn set_full_decal(&mut self, image: ImageSource) -> &mut Self {
        self.step("set_full_decal".to_string(), UiToEngine::SetFullDecal { image });
        self
    }

    pub fn add_text(&mut self, text: &str, color: &str, size: f32) -> Result<Uuid, HarnessError> {
        let color = parse_color(color)?;
        let response = self.step(
            format!("add_text {:?}", text),
            UiToEngine::AddText {
                text: text.to_string(),
                color,
                size,
            },
        );
        match response {
            EngineToUi::DesignUpdated { design, .. } => design
                .text_elements
                .last()
                .map(|t| t.id)
                .ok_or_else(|| HarnessError::UnexpectedResponse {
                    step: "add_text".to_string(),
                    response: "DesignUpdated without text elements".to_string(),
                }),
            other => Err(HarnessError::unexpected("add_text", &other)),
        }
    }

    pub fn remove_text(&mut self, id: Uuid) -> &mut Self {
        self.step(format!("remove_text {}", id), UiToEngine::RemoveText { id });
        self
    }

    pub fn clear_text(&mut self) -> &mut Self {
        self.step("clear_text".to_string(), UiToEngine::ClearText);
        self
    }

    // ── History steps ───────────────────────────────────────────────────

    /// Undo; returns whether a state was restored.
    pub fn undo(&mut self) -> bool {
        matches!(
            self.step("undo".to_string(), UiToEngine::Undo),
            EngineToUi::DesignUpdated { .. }
        )
    }

    /// Redo; returns whether a state was restored.
    pub fn redo(&mut self) -> bool {
        matches!(
            self.step("redo".to_string(), UiToEngine::Redo),
            EngineToUi::DesignUpdated { .. }
        )
    }

    // ── File steps ──────────────────────────────────────────────────────

    pub fn save(&mut self) -> Result<String, HarnessError> {
        match self.step("save".to_string(), UiToEngine::SaveDesign) {
            EngineToUi::SaveReady { json_data } => Ok(json_data),
            other => Err(HarnessError::unexpected("save", &other)),
        }
    }

    pub fn load(&mut self, data: String) -> Result<DesignState, HarnessError> {
        match self.step("load".to_string(), UiToEngine::LoadDesign { data }) {
            EngineToUi::DesignLoaded { design } => Ok(design),
            other => Err(HarnessError::unexpected("load", &other)),
        }
    }

    pub fn share(&mut self) -> Result<String, HarnessError> {
        match self.step("share".to_string(), UiToEngine::ShareDesign) {
            EngineToUi::ShareReady { payload } => Ok(payload),
            other => Err(HarnessError::unexpected("share", &other)),
        }
    }

    // ── Inspection ──────────────────────────────────────────────────────

    pub fn design(&self) -> &DesignState {
        self.state.engine.design()
    }

    pub fn can_undo(&self) -> bool {
        self.state.engine.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.engine.can_redo()
    }

    /// The (step, response) trail, for failure diagnostics.
    pub fn trail(&self) -> &[(String, String)] {
        &self.history
    }

    fn step(&mut self, label: String, msg: UiToEngine) -> EngineToUi {
        let response = dispatch(&mut self.state, msg);
        self.history.push((label, response_kind(&response)));
        response
    }
}

impl Default for StudioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_color(s: &str) -> Result<HexColor, HarnessError> {
    HexColor::parse(s).map_err(|e| HarnessError::BadColor(e.to_string()))
}

fn response_kind(response: &EngineToUi) -> String {
    match response {
        EngineToUi::DesignUpdated { .. } => "DesignUpdated".to_string(),
        EngineToUi::HistoryExhausted { .. } => "HistoryExhausted".to_string(),
        EngineToUi::SaveReady { .. } => "SaveReady".to_string(),
        EngineToUi::DesignLoaded { .. } => "DesignLoaded".to_string(),
        EngineToUi::ShareReady { .. } => "ShareReady".to_string(),
        EngineToUi::Error { message } => format!("Error({})", message),
    }
}

/// Errors from harness steps.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("invalid color: {0}")]
    BadColor(String),

    #[error("step {step} got unexpected response: {response}")]
    UnexpectedResponse { step: String, response: String },
}

impl HarnessError {
    fn unexpected(step: &str, response: &EngineToUi) -> Self {
        Self::UnexpectedResponse {
            step: step.to_string(),
            response: response_kind(response),
        }
    }
}
