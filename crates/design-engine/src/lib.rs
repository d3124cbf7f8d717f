pub mod history;

use thiserror::Error;
use uuid::Uuid;

use studio_types::{DesignState, HexColor, ImageSource, PresetKind, Product, TextElement};

use crate::history::DesignHistory;

/// The design editing engine.
///
/// Owns the live document and its undo log. Every mutating operation
/// commits the post-mutation state, keeping the log's `present` aligned
/// with the live document — undo restores the previous committed state,
/// redo the next one.
pub struct Engine {
    design: DesignState,
    history: DesignHistory,
}

impl Engine {
    /// Create an engine with a default document. The initial state is
    /// committed so the first edit becomes undoable.
    pub fn new() -> Self {
        Self::with_design(DesignState::default())
    }

    pub fn with_design(design: DesignState) -> Self {
        let mut history = DesignHistory::new();
        history.push_state(&design);
        Self { design, history }
    }

    pub fn with_max_history(design: DesignState, max_history: usize) -> Self {
        let mut history = DesignHistory::with_max_history(max_history);
        history.push_state(&design);
        Self { design, history }
    }

    /// The live document.
    pub fn design(&self) -> &DesignState {
        &self.design
    }

    // ── Design operations ───────────────────────────────────────────────

    /// Switch product. Resets the decal slots to the logo-only default,
    /// since decal placement differs per product.
    pub fn select_product(&mut self, product: Product) {
        self.design.product = product;
        self.design.logo_enabled = true;
        self.design.full_enabled = false;
        self.commit();
    }

    pub fn set_color(&mut self, color: HexColor) {
        self.design.color = color;
        self.commit();
    }

    /// Adopt a style preset's primary palette color.
    pub fn apply_preset_colors(&mut self, preset: PresetKind) {
        self.design.color = preset.preset().primary_color().clone();
        self.commit();
    }

    /// Install a logo decal and show it, hiding the full-coverage slot.
    pub fn set_logo_decal(&mut self, image: ImageSource) {
        self.design.logo_decal = Some(image);
        self.design.logo_enabled = true;
        self.design.full_enabled = false;
        self.commit();
    }

    /// Install a full-coverage decal and show it, hiding the logo slot.
    pub fn set_full_decal(&mut self, image: ImageSource) {
        self.design.full_decal = Some(image);
        self.design.full_enabled = true;
        self.design.logo_enabled = false;
        self.commit();
    }

    /// Flip logo visibility. Deliberately does not touch `full_enabled`:
    /// the slots are exclusive by convention only, and both may be on.
    pub fn toggle_logo_decal(&mut self) {
        self.design.logo_enabled = !self.design.logo_enabled;
        self.commit();
    }

    /// Flip full-coverage visibility; see `toggle_logo_decal`.
    pub fn toggle_full_decal(&mut self) {
        self.design.full_enabled = !self.design.full_enabled;
        self.commit();
    }

    /// Add a text overlay. Returns the new element's id.
    pub fn add_text(
        &mut self,
        text: impl Into<String>,
        color: HexColor,
        size: f32,
    ) -> Result<Uuid, EngineError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(EngineError::EmptyText);
        }
        if !size.is_finite() || size <= 0.0 {
            return Err(EngineError::InvalidTextSize { size });
        }

        let id = Uuid::new_v4();
        self.design.text_elements.push(TextElement {
            id,
            text: text.trim().to_string(),
            color,
            size,
        });
        self.commit();
        Ok(id)
    }

    /// Remove a text overlay by id. Nothing is committed when the id is
    /// unknown, so a failed removal never pollutes the undo log.
    pub fn remove_text(&mut self, id: Uuid) -> Result<(), EngineError> {
        let pos = self
            .design
            .text_index(id)
            .ok_or(EngineError::TextNotFound { id })?;
        self.design.text_elements.remove(pos);
        self.commit();
        Ok(())
    }

    /// Remove all text overlays. A no-op (nothing committed) when there
    /// is nothing to clear.
    pub fn clear_text(&mut self) {
        if self.design.text_elements.is_empty() {
            return;
        }
        self.design.text_elements.clear();
        self.commit();
    }

    /// Replace the whole document (load / shared-design import).
    pub fn replace_design(&mut self, design: DesignState) {
        self.design = design;
        self.commit();
    }

    // ── History ─────────────────────────────────────────────────────────

    /// Restore the previous committed state into the live document.
    /// Returns false (no change) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.design = previous;
                true
            }
            None => false,
        }
    }

    /// Restore the next committed state into the live document.
    /// Returns false (no change) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(next) => {
                self.design = next;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &DesignHistory {
        &self.history
    }

    fn commit(&mut self) {
        self.history.push_state(&self.design);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from design operations. Exhausted undo/redo is a soft `false`,
/// never an error.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error("text must not be empty")]
    EmptyText,

    #[error("text size must be positive and finite, got {size}")]
    InvalidTextSize { size: f32 },

    #[error("no text element with id {id}")]
    TextNotFound { id: Uuid },
}
