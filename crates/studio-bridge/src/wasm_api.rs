//! WASM entry points for the web worker.
//!
//! This module is only compiled for the `wasm32` target. It provides the
//! `#[wasm_bindgen]` functions that JavaScript calls from the web worker.

use wasm_bindgen::prelude::*;

use crate::dispatch;
use crate::messages::{EngineToUi, UiToEngine};
use crate::studio_state::StudioState;

// Global studio state — single-threaded in the web worker.
thread_local! {
    static STUDIO_STATE: std::cell::RefCell<Option<StudioState>> = std::cell::RefCell::new(None);
}

/// Initialize the WASM engine. Must be called once before any other function.
///
/// Sets up panic hooks for better error messages and creates the studio state.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();

    STUDIO_STATE.with(|cell| {
        *cell.borrow_mut() = Some(StudioState::new());
    });
}

/// Process a JSON message from the UI and return a JSON response.
///
/// This is the main entry point for the web worker's message handler.
/// The input should be a JSON-serialized `UiToEngine` message.
/// Returns a JSON-serialized `EngineToUi` response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    let response = STUDIO_STATE.with(|cell| {
        let mut state = cell.borrow_mut();
        let state = state
            .as_mut()
            .expect("Studio not initialized. Call init() first.");

        let msg: UiToEngine = match serde_json::from_str(json_input) {
            Ok(msg) => msg,
            Err(e) => {
                return EngineToUi::Error {
                    message: format!("Failed to parse message: {}", e),
                };
            }
        };

        dispatch::dispatch(state, msg)
    });

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"type":"Error","message":"Serialization failed: {}"}}"#, e)
    })
}

/// Get the current design document as JSON.
///
/// Useful for the UI to query state without sending a full command.
#[wasm_bindgen]
pub fn get_design() -> String {
    STUDIO_STATE.with(|cell| {
        let state = cell.borrow();
        let state = state.as_ref().expect("Studio not initialized.");
        serde_json::to_string(state.engine.design()).unwrap_or_default()
    })
}
