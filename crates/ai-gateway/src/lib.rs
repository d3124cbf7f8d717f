//! AI image-generation gateway.
//!
//! A thin HTTP proxy between the customizer UI and third-party
//! image-generation services. The UI sends a prompt plus a decal kind;
//! the gateway enhances the prompt for the selected service, calls it,
//! and returns the image as a base64 data URL. No retry, queueing, or
//! caching: failures are reported straight back to the caller.

pub mod api;
pub mod config;
pub mod prompt;
pub mod providers;
pub mod server;
pub mod service;

pub use config::GatewayConfig;
pub use server::{handle_request, serve, ApiResponse};
pub use service::{GatewayError, ServiceRegistry};
