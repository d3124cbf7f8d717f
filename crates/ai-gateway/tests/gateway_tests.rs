use serde_json::Value;

use ai_gateway::api::{DecalKind, GenerateResponse, ServicesResponse, TestResponse};
use ai_gateway::prompt::{enhance_fal, enhance_pollinations};
use ai_gateway::providers::{GeneratedImage, ImageProvider, ProviderError};
use ai_gateway::{handle_request, ServiceRegistry};

/// A deterministic in-memory provider standing in for the hosted services.
struct MockProvider {
    id: &'static str,
    name: &'static str,
    premium: bool,
    available: bool,
    fail: bool,
}

impl MockProvider {
    fn ok(id: &'static str, name: &'static str, premium: bool) -> Self {
        Self {
            id,
            name,
            premium,
            available: true,
            fail: false,
        }
    }

    fn unavailable(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            premium: true,
            available: false,
            fail: false,
        }
    }

    fn failing(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            premium: false,
            available: true,
            fail: true,
        }
    }
}

impl ImageProvider for MockProvider {
    fn id(&self) -> &'static str {
        self.id
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "mock provider"
    }

    fn premium(&self) -> bool {
        self.premium
    }

    fn available(&self) -> bool {
        self.available
    }

    fn generate(&self, prompt: &str, kind: DecalKind) -> Result<GeneratedImage, ProviderError> {
        if self.fail {
            return Err(ProviderError::Upstream {
                status: 503,
                body: "overloaded".to_string(),
            });
        }
        Ok(GeneratedImage {
            data_url: format!("data:image/png;base64,{}-{:?}", prompt.len(), kind),
            model: "mock-model".to_string(),
        })
    }
}

fn registry() -> ServiceRegistry {
    ServiceRegistry::with_providers(vec![
        Box::new(MockProvider::unavailable("fal-ai", "FAL AI")),
        Box::new(MockProvider::ok("pollinations", "Pollinations.ai", false)),
    ])
}

fn body_json(body: &str) -> Value {
    serde_json::from_str(body).expect("response body is JSON")
}

// ── Generation routing ─────────────────────────────────────────────────

#[test]
fn generate_requires_a_prompt() {
    let response = handle_request(
        &registry(),
        "POST",
        "/api/generate-image",
        r#"{"prompt": "   ", "aiService": "pollinations"}"#,
    );
    assert_eq!(response.status, 400);
    assert_eq!(body_json(&response.body)["error"], "Prompt is required");
}

#[test]
fn generate_rejects_unknown_service() {
    let response = handle_request(
        &registry(),
        "POST",
        "/api/generate-image",
        r#"{"prompt": "a fox", "aiService": "midjourney"}"#,
    );
    assert_eq!(response.status, 400);
    assert_eq!(
        body_json(&response.body)["error"],
        "Invalid AI service selected"
    );
}

#[test]
fn generate_rejects_unconfigured_service() {
    let response = handle_request(
        &registry(),
        "POST",
        "/api/generate-image",
        r#"{"prompt": "a fox", "aiService": "fal-ai"}"#,
    );
    assert_eq!(response.status, 400);
    assert_eq!(body_json(&response.body)["error"], "FAL AI not configured");
}

#[test]
fn generate_defaults_to_fal_and_logo() {
    // With FAL configured, an all-defaults request routes there.
    let registry = ServiceRegistry::with_providers(vec![
        Box::new(MockProvider::ok("fal-ai", "FAL AI", true)),
        Box::new(MockProvider::ok("pollinations", "Pollinations.ai", false)),
    ]);
    let response = handle_request(
        &registry,
        "POST",
        "/api/generate-image",
        r#"{"prompt": "a fox"}"#,
    );
    assert_eq!(response.status, 200);

    let parsed: GenerateResponse = serde_json::from_str(&response.body).unwrap();
    assert!(parsed.success);
    assert_eq!(parsed.service, "fal-ai");
    assert_eq!(parsed.message, "Generated with FAL AI (Premium)");
    assert!(parsed.base64.contains("Logo"));
}

#[test]
fn upstream_failure_is_a_500_with_detail() {
    let registry = ServiceRegistry::with_providers(vec![Box::new(MockProvider::failing(
        "pollinations",
        "Pollinations.ai",
    ))]);
    let response = handle_request(
        &registry,
        "POST",
        "/api/generate-image",
        r#"{"prompt": "a fox", "aiService": "pollinations"}"#,
    );
    assert_eq!(response.status, 500);

    let body = body_json(&response.body);
    assert_eq!(body["error"], "Image generation failed");
    assert!(body["message"].as_str().unwrap().contains("503"));
}

#[test]
fn malformed_body_is_a_400() {
    let response = handle_request(&registry(), "POST", "/api/generate-image", "not json");
    assert_eq!(response.status, 400);
    assert_eq!(body_json(&response.body)["error"], "Invalid request body");
}

// ── Discovery endpoints ────────────────────────────────────────────────

#[test]
fn services_listing_reports_availability() {
    let response = handle_request(&registry(), "GET", "/api/ai-services", "");
    assert_eq!(response.status, 200);

    let parsed: ServicesResponse = serde_json::from_str(&response.body).unwrap();
    assert_eq!(parsed.services.len(), 2);

    let fal = parsed.services.iter().find(|s| s.id == "fal-ai").unwrap();
    assert!(!fal.available);
    assert!(fal.premium);

    let poll = parsed
        .services
        .iter()
        .find(|s| s.id == "pollinations")
        .unwrap();
    assert!(poll.available);
    assert!(!poll.premium);
}

#[test]
fn health_reports_per_service_flags() {
    let response = handle_request(&registry(), "GET", "/api/health", "");
    assert_eq!(response.status, 200);

    let body = body_json(&response.body);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["services"]["falAI"], false);
    assert_eq!(body["services"]["pollinations"], true);
}

#[test]
fn service_status_uses_ready_markers() {
    let response = handle_request(&registry(), "GET", "/api/service-status", "");
    let body = body_json(&response.body);
    assert_eq!(body["falAI"]["status"], "NOT_CONFIGURED");
    assert_eq!(body["pollinations"]["status"], "READY");
}

#[test]
fn unknown_route_is_a_404() {
    let response = handle_request(&registry(), "GET", "/api/nope", "");
    assert_eq!(response.status, 404);
}

// ── Test-generation fallback ───────────────────────────────────────────

#[test]
fn test_generation_falls_back_to_pollinations() {
    // FAL requested but unavailable: the test endpoint still runs.
    let response = handle_request(
        &registry(),
        "POST",
        "/api/test-generation",
        r#"{"aiService": "fal-ai"}"#,
    );
    assert_eq!(response.status, 200);

    let parsed: TestResponse = serde_json::from_str(&response.body).unwrap();
    assert_eq!(parsed.service, "pollinations");
    assert!(parsed.base64.ends_with("..."));
}

#[test]
fn test_generation_accepts_an_empty_body() {
    let response = handle_request(&registry(), "POST", "/api/test-generation", "");
    assert_eq!(response.status, 200);
}

// ── Prompt enhancement ─────────────────────────────────────────────────

#[test]
fn prompts_are_enhanced_per_service_and_kind() {
    let fal_logo = enhance_fal("a dragon", DecalKind::Logo);
    assert!(fal_logo.starts_with("a dragon, "));
    assert!(fal_logo.contains("professional branding"));

    let fal_full = enhance_fal("a dragon", DecalKind::Full);
    assert!(fal_full.contains("print ready"));

    let poll_logo = enhance_pollinations("a dragon", DecalKind::Logo);
    assert!(poll_logo.contains("icon style"));

    let poll_full = enhance_pollinations("a dragon", DecalKind::Full);
    assert!(poll_full.contains("bold colors"));
}
