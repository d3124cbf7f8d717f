use design_engine::Engine;
use design_format::DesignMetadata;

/// The engine state wrapper for the UI bridge.
///
/// Holds the design engine and the metadata used for save operations.
pub struct StudioState {
    /// The design editing engine.
    pub engine: Engine,
    /// Metadata carried into saved design files.
    pub metadata: DesignMetadata,
}

impl StudioState {
    /// Create a new studio state with a default document.
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            metadata: DesignMetadata::new("Untitled"),
        }
    }
}

impl Default for StudioState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from the UI bridge layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("engine error: {0}")]
    Engine(#[from] design_engine::EngineError),

    #[error("load error: {0}")]
    Load(#[from] design_format::LoadError),

    #[error("share error: {0}")]
    Share(#[from] design_format::ShareError),
}
