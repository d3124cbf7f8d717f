use serde::Deserialize;
use tracing::debug;

use crate::api::DecalKind;
use crate::prompt::enhance_fal;
use crate::providers::{
    map_ureq_error, read_image_bytes, to_data_url, GeneratedImage, ImageProvider, ProviderError,
};

/// FAL AI: premium hosted models behind a synchronous HTTP endpoint.
pub struct FalProvider {
    api_key: Option<String>,
}

/// Recraft is the stronger logo/vector model; flux handles full designs.
const LOGO_MODEL: &str = "fal-ai/recraft-v3";
const FULL_MODEL: &str = "fal-ai/flux/dev";

#[derive(Debug, Deserialize)]
struct FalOutput {
    #[serde(default)]
    images: Vec<FalImage>,
}

#[derive(Debug, Deserialize)]
struct FalImage {
    url: String,
}

impl FalProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

impl ImageProvider for FalProvider {
    fn id(&self) -> &'static str {
        "fal-ai"
    }

    fn name(&self) -> &'static str {
        "FAL AI"
    }

    fn description(&self) -> &'static str {
        "High quality, various models"
    }

    fn premium(&self) -> bool {
        true
    }

    fn available(&self) -> bool {
        self.api_key.is_some()
    }

    fn generate(&self, prompt: &str, kind: DecalKind) -> Result<GeneratedImage, ProviderError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::NotConfigured { service: "FAL AI" })?;

        let model = match kind {
            DecalKind::Logo => LOGO_MODEL,
            DecalKind::Full => FULL_MODEL,
        };
        let steps = match kind {
            DecalKind::Logo => 20,
            DecalKind::Full => 28,
        };
        let enhanced = enhance_fal(prompt, kind);
        debug!(model, prompt = %enhanced, "calling FAL AI");

        let response = ureq::post(&format!("https://fal.run/{}", model))
            .set("Authorization", &format!("Key {}", key))
            .send_json(serde_json::json!({
                "prompt": enhanced,
                "image_size": "square_hd",
                "num_inference_steps": steps,
                "num_images": 1,
                "guidance_scale": 7.5,
            }))
            .map_err(map_ureq_error)?;

        let output: FalOutput = response
            .into_json()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        let image = output
            .images
            .into_iter()
            .next()
            .ok_or(ProviderError::NoImage { service: "FAL AI" })?;

        // The model returns a hosted URL; fetch and embed the bytes so the
        // client never talks to FAL's CDN directly.
        let image_response = ureq::get(&image.url).call().map_err(map_ureq_error)?;
        let mime = match image_response.content_type() {
            "" => "image/png".to_string(),
            ct => ct.to_string(),
        };
        let bytes = read_image_bytes(image_response)?;

        Ok(GeneratedImage {
            data_url: to_data_url(&mime, &bytes),
            model: model.to_string(),
        })
    }
}
