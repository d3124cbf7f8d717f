pub mod fal;
pub mod pollinations;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

use crate::api::DecalKind;

pub use fal::FalProvider;
pub use pollinations::PollinationsProvider;

/// A generated image, packaged for the client.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// `data:<mime>;base64,<payload>` — directly loadable as a texture.
    pub data_url: String,
    /// The upstream model that produced it.
    pub model: String,
}

/// A single upstream image-generation service.
///
/// `generate` blocks on the upstream HTTP calls; the gateway is a
/// synchronous proxy and callers await the whole request.
pub trait ImageProvider {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn premium(&self) -> bool;
    /// Whether this provider can currently serve requests.
    fn available(&self) -> bool;
    fn generate(&self, prompt: &str, kind: DecalKind) -> Result<GeneratedImage, ProviderError>;
}

/// Errors from upstream providers.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{service} is not configured")]
    NotConfigured { service: &'static str },

    #[error("upstream request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("{service} returned no image")]
    NoImage { service: &'static str },
}

/// Package raw image bytes as a `data:` URL.
pub(crate) fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Fold a ureq error into a provider error, preserving the upstream
/// status and body where available.
pub(crate) fn map_ureq_error(e: ureq::Error) -> ProviderError {
    match e {
        ureq::Error::Status(status, response) => ProviderError::Upstream {
            status,
            body: response.into_string().unwrap_or_default(),
        },
        other => ProviderError::Transport(other.to_string()),
    }
}

/// Read the full body of an upstream image response.
pub(crate) fn read_image_bytes(response: ureq::Response) -> Result<Vec<u8>, ProviderError> {
    use std::io::Read;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut bytes)
        .map_err(|e| ProviderError::Transport(e.to_string()))?;
    Ok(bytes)
}
