use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use ai_gateway::{serve, GatewayConfig, ServiceRegistry};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GatewayConfig::from_env();
    let registry = ServiceRegistry::from_config(&config);

    info!("multi-AI gateway starting");
    info!(
        fal_ai = config.fal_api_key.is_some(),
        pollinations = true,
        port = config.port,
        "service availability"
    );
    if config.fal_api_key.is_none() {
        warn!("FAL AI is not configured - only Pollinations.ai will work (set FAL_AI_API_KEY)");
    }

    if let Err(e) = serve(&config, registry) {
        error!(error = %e, "gateway failed to start");
        std::process::exit(1);
    }
}
