use chrono::Utc;
use tracing::debug;

use crate::api::DecalKind;
use crate::prompt::enhance_pollinations;
use crate::providers::{
    map_ureq_error, read_image_bytes, to_data_url, GeneratedImage, ImageProvider, ProviderError,
};

/// Pollinations.ai: free, keyless, prompt-in-the-URL image generation.
pub struct PollinationsProvider;

impl ImageProvider for PollinationsProvider {
    fn id(&self) -> &'static str {
        "pollinations"
    }

    fn name(&self) -> &'static str {
        "Pollinations.ai"
    }

    fn description(&self) -> &'static str {
        "Free & reliable alternative"
    }

    fn premium(&self) -> bool {
        false
    }

    fn available(&self) -> bool {
        true
    }

    fn generate(&self, prompt: &str, kind: DecalKind) -> Result<GeneratedImage, ProviderError> {
        let enhanced = enhance_pollinations(prompt, kind);
        // Vary the seed per call so identical prompts produce fresh images.
        let seed = Utc::now().timestamp_subsec_millis() % 1000;
        let url = format!(
            "https://image.pollinations.ai/prompt/{}?width=512&height=512&nofeed=true&seed={}",
            urlencoding::encode(&enhanced),
            seed
        );
        debug!(%url, "calling Pollinations.ai");

        let response = ureq::get(&url).call().map_err(map_ureq_error)?;
        let bytes = read_image_bytes(response)?;

        Ok(GeneratedImage {
            data_url: to_data_url("image/png", &bytes),
            model: "stable-diffusion".to_string(),
        })
    }
}
