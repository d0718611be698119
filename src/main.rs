//! HTTP server for the salary engine.

use salary_engine::api::{AppState, create_router};
use salary_engine::config::{ConfigLoader, ServerSettings};
use salary_engine::logging::init_logging;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let settings = ServerSettings::from_env()?;
    let config = ConfigLoader::load(&settings.config_dir)?;
    info!(
        config_dir = %settings.config_dir.display(),
        rules = %config.constants().metadata.name,
        presets = config.presets().presets.len(),
        "Loaded tax-year configuration"
    );

    let router = create_router(AppState::new(config));

    info!("Listening on {}", settings.listen_addr);
    let listener = tokio::net::TcpListener::bind(settings.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
