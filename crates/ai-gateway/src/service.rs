use thiserror::Error;
use tracing::{info, warn};

use crate::api::{DecalKind, GenerateRequest, GenerateResponse, ServiceInfo, TestResponse};
use crate::config::GatewayConfig;
use crate::providers::{FalProvider, ImageProvider, PollinationsProvider, ProviderError};

/// Fixed prompt used by the test endpoint.
pub const TEST_PROMPT: &str = "a simple red apple logo, minimalist";

/// The set of upstream providers the gateway can route to.
pub struct ServiceRegistry {
    providers: Vec<Box<dyn ImageProvider>>,
}

impl ServiceRegistry {
    /// Build the production registry: FAL AI (when configured) and
    /// Pollinations.
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::with_providers(vec![
            Box::new(FalProvider::new(config.fal_api_key.clone())),
            Box::new(PollinationsProvider),
        ])
    }

    /// Build a registry from explicit providers. Used by tests to swap
    /// in mocks.
    pub fn with_providers(providers: Vec<Box<dyn ImageProvider>>) -> Self {
        Self { providers }
    }

    pub fn get(&self, id: &str) -> Option<&dyn ImageProvider> {
        self.providers
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.as_ref())
    }

    /// Service listing for the UI's service selector.
    pub fn services(&self) -> Vec<ServiceInfo> {
        self.providers
            .iter()
            .map(|p| ServiceInfo {
                id: p.id().to_string(),
                name: p.name().to_string(),
                available: p.available(),
                description: p.description().to_string(),
                premium: p.premium(),
            })
            .collect()
    }

    pub fn is_available(&self, id: &str) -> bool {
        self.get(id).map(|p| p.available()).unwrap_or(false)
    }
}

/// Route a generation request to the selected provider.
///
/// No fallback: if the selected service fails, the error goes back to
/// the caller, who picks a different service explicitly.
pub fn generate_image(
    registry: &ServiceRegistry,
    request: &GenerateRequest,
) -> Result<GenerateResponse, GatewayError> {
    if request.prompt.trim().is_empty() {
        return Err(GatewayError::MissingPrompt);
    }

    let provider = registry
        .get(&request.ai_service)
        .ok_or_else(|| GatewayError::UnknownService(request.ai_service.clone()))?;

    if !provider.available() {
        return Err(GatewayError::NotConfigured {
            service: provider.name(),
        });
    }

    info!(
        service = provider.id(),
        kind = ?request.kind,
        "generation request"
    );

    let image = provider
        .generate(&request.prompt, request.kind)
        .map_err(|e| {
            warn!(service = provider.id(), error = %e, "generation failed");
            e
        })?;

    Ok(GenerateResponse {
        success: true,
        base64: image.data_url,
        service: provider.id().to_string(),
        model: image.model,
        message: format!(
            "Generated with {} ({})",
            provider.name(),
            if provider.premium() { "Premium" } else { "Free" }
        ),
    })
}

/// Run the fixed test prompt through a service.
///
/// Unlike `generate_image`, this falls back to Pollinations when the
/// requested service is unknown or unavailable, so the endpoint always
/// exercises something.
pub fn test_generation(
    registry: &ServiceRegistry,
    requested: &str,
) -> Result<TestResponse, GatewayError> {
    let provider = match registry.get(requested) {
        Some(p) if p.available() => p,
        _ => registry
            .get("pollinations")
            .ok_or_else(|| GatewayError::UnknownService(requested.to_string()))?,
    };

    info!(service = provider.id(), "test generation");
    let image = provider.generate(TEST_PROMPT, DecalKind::Logo)?;

    // Preview only: the full payload would drown the response.
    let preview: String = image.data_url.chars().take(100).collect();
    Ok(TestResponse {
        success: true,
        message: format!("Test generation successful with {}", provider.id()),
        service: provider.id().to_string(),
        base64: format!("{}...", preview),
    })
}

/// Errors surfaced by the gateway's routing layer.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Prompt is required")]
    MissingPrompt,

    #[error("Invalid AI service selected: {0}")]
    UnknownService(String),

    #[error("{service} not configured")]
    NotConfigured { service: &'static str },

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
