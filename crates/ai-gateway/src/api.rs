//! Wire types for the gateway's JSON API.

use serde::{Deserialize, Serialize};

/// Which decal slot the generated image targets. Drives model selection
/// and prompt enhancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecalKind {
    #[default]
    Logo,
    Full,
}

/// `POST /api/generate-image` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// The user's prompt. Required; blank prompts are rejected.
    #[serde(default)]
    pub prompt: String,
    #[serde(rename = "type", default)]
    pub kind: DecalKind,
    /// Service id; unknown ids are rejected, not silently remapped.
    #[serde(default = "default_service")]
    pub ai_service: String,
}

fn default_service() -> String {
    "fal-ai".to_string()
}

/// Successful generation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    /// The generated image as a `data:` URL.
    pub base64: String,
    pub service: String,
    pub model: String,
    pub message: String,
}

/// Error body for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `GET /api/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub services: ServiceFlags,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceFlags {
    #[serde(rename = "falAI")]
    pub fal_ai: bool,
    pub pollinations: bool,
}

/// One entry of `GET /api/ai-services`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub id: String,
    pub name: String,
    pub available: bool,
    pub description: String,
    pub premium: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesResponse {
    pub services: Vec<ServiceInfo>,
}

/// `POST /api/test-generation` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRequest {
    #[serde(default = "default_test_service")]
    pub ai_service: String,
}

fn default_test_service() -> String {
    "pollinations".to_string()
}

/// `POST /api/test-generation` response: a truncated base64 preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResponse {
    pub success: bool,
    pub message: String,
    pub service: String,
    pub base64: String,
}

/// Per-service entry of `GET /api/service-status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub configured: bool,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "falAI")]
    pub fal_ai: ServiceStatus,
    pub pollinations: ServiceStatus,
    pub timestamp: String,
}
