//! HTTP surface: route matching, JSON bodies, CORS.
//!
//! Routing and payload construction live in `handle_request`, which is
//! plain data in / data out so tests can drive it without sockets. The
//! tiny_http loop in `serve` only does transport.

use std::io::Read;

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use crate::api::{
    ErrorResponse, GenerateRequest, HealthResponse, ServiceFlags, ServiceStatus, ServicesResponse,
    StatusResponse, TestRequest,
};
use crate::config::GatewayConfig;
use crate::service::{self, GatewayError, ServiceRegistry};

/// A routed response: HTTP status plus a JSON body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    fn json<T: serde::Serialize>(status: u16, payload: &T) -> Self {
        Self {
            status,
            body: serde_json::to_string(payload).expect("API payload serialization should never fail"),
        }
    }

    fn error(status: u16, error: impl Into<String>, message: Option<String>) -> Self {
        Self::json(
            status,
            &ErrorResponse {
                error: error.into(),
                message,
            },
        )
    }
}

/// Route a request to its handler. `path` excludes the query string.
pub fn handle_request(
    registry: &ServiceRegistry,
    method: &str,
    path: &str,
    body: &str,
) -> ApiResponse {
    match (method, path) {
        ("GET", "/api/health") => health(registry),
        ("GET", "/api/ai-services") => ApiResponse::json(
            200,
            &ServicesResponse {
                services: registry.services(),
            },
        ),
        ("GET", "/api/service-status") => service_status(registry),
        ("POST", "/api/generate-image") => generate(registry, body),
        ("POST", "/api/test-generation") => test_generation(registry, body),
        _ => ApiResponse::error(404, "Not found", None),
    }
}

fn health(registry: &ServiceRegistry) -> ApiResponse {
    ApiResponse::json(
        200,
        &HealthResponse {
            status: "OK".to_string(),
            message: "Multi-AI gateway is running".to_string(),
            services: ServiceFlags {
                fal_ai: registry.is_available("fal-ai"),
                pollinations: registry.is_available("pollinations"),
            },
            timestamp: Utc::now().to_rfc3339(),
        },
    )
}

fn service_status(registry: &ServiceRegistry) -> ApiResponse {
    let status_of = |id: &str| {
        let configured = registry.is_available(id);
        ServiceStatus {
            configured,
            status: if configured { "READY" } else { "NOT_CONFIGURED" }.to_string(),
        }
    };
    ApiResponse::json(
        200,
        &StatusResponse {
            fal_ai: status_of("fal-ai"),
            pollinations: status_of("pollinations"),
            timestamp: Utc::now().to_rfc3339(),
        },
    )
}

fn generate(registry: &ServiceRegistry, body: &str) -> ApiResponse {
    let request: GenerateRequest = match serde_json::from_str(body) {
        Ok(req) => req,
        Err(e) => return ApiResponse::error(400, "Invalid request body", Some(e.to_string())),
    };

    match service::generate_image(registry, &request) {
        Ok(response) => ApiResponse::json(200, &response),
        Err(e) => gateway_error_response(e),
    }
}

fn test_generation(registry: &ServiceRegistry, body: &str) -> ApiResponse {
    // An empty body means "use the default service".
    let body = if body.trim().is_empty() { "{}" } else { body };
    let request: TestRequest = match serde_json::from_str(body) {
        Ok(req) => req,
        Err(e) => return ApiResponse::error(400, "Invalid request body", Some(e.to_string())),
    };

    match service::test_generation(registry, &request.ai_service) {
        Ok(response) => ApiResponse::json(200, &response),
        Err(e) => gateway_error_response(e),
    }
}

fn gateway_error_response(e: GatewayError) -> ApiResponse {
    match e {
        GatewayError::MissingPrompt => ApiResponse::error(400, "Prompt is required", None),
        GatewayError::UnknownService(_) => {
            ApiResponse::error(400, "Invalid AI service selected", None)
        }
        GatewayError::NotConfigured { service } => ApiResponse::error(
            400,
            format!("{} not configured", service),
            Some("Please configure FAL_AI_API_KEY in your server environment".to_string()),
        ),
        GatewayError::Provider(e) => {
            ApiResponse::error(500, "Image generation failed", Some(e.to_string()))
        }
    }
}

/// Errors starting the server.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind server: {0}")]
    Bind(String),
}

/// Run the gateway until the process exits.
pub fn serve(config: &GatewayConfig, registry: ServiceRegistry) -> Result<(), ServeError> {
    let server = tiny_http::Server::http(("0.0.0.0", config.port))
        .map_err(|e| ServeError::Bind(e.to_string()))?;
    info!(port = config.port, "gateway listening");

    for mut request in server.incoming_requests() {
        let method = request.method().to_string();
        let url = request.url().to_string();
        let path = url.split('?').next().unwrap_or(&url).to_string();

        // CORS preflight
        if method == "OPTIONS" {
            let response = tiny_http::Response::empty(204)
                .with_header(header("Access-Control-Allow-Origin", "*"))
                .with_header(header("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
                .with_header(header("Access-Control-Allow-Headers", "Content-Type"));
            let _ = request.respond(response);
            continue;
        }

        let mut body = String::new();
        if request.as_reader().read_to_string(&mut body).is_err() {
            body.clear();
        }

        let api = handle_request(&registry, &method, &path, &body);
        info!(%method, %path, status = api.status, "request");

        let response = tiny_http::Response::from_string(api.body)
            .with_status_code(api.status)
            .with_header(header("Content-Type", "application/json"))
            .with_header(header("Access-Control-Allow-Origin", "*"));
        let _ = request.respond(response);
    }

    Ok(())
}

fn header(name: &str, value: &str) -> tiny_http::Header {
    tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes())
        .expect("static header is valid")
}
