/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Port to listen on. `PORT`, default 5000.
    pub port: u16,
    /// FAL AI credentials. `FAL_AI_API_KEY`; FAL routes are unavailable
    /// without it.
    pub fal_api_key: Option<String>,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);
        let fal_api_key = std::env::var("FAL_AI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self { port, fal_api_key }
    }
}
