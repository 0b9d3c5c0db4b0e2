use anyhow::Result;
use std::path::Path;
use tracing::info;

use ruen_bridge::observability::init_tracing;
use ruen_bridge::{build_app, AppState, Config};

/// First existing config file wins; no file at all means built-in defaults.
fn load_config() -> Result<Config> {
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    for path in &config_paths {
        if Path::new(path).exists() {
            let config = Config::load(path)?;
            info!("Loaded configuration from: {}", path);
            return Ok(config);
        }
        tracing::debug!("No config at {}", path);
    }

    info!("No config file found (tried {:?}), using defaults", config_paths);
    Ok(Config::default())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    let host = config.system_config.host.clone();
    let port = config.system_config.port;

    let app_state = AppState::new(config)?;
    info!(
        "Pipeline ready: translator={}, tts={}",
        app_state.pipeline.translate_provider(),
        app_state.pipeline.tts_model()
    );

    let app = build_app(app_state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
