pub mod dispatch;
pub mod messages;
pub mod studio_state;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::dispatch;
pub use studio_state::{BridgeError, StudioState};
