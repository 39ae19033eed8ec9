use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use vs_core::SkillConfig;
use vs_server::{app_with_state, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .compact()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = SkillConfig::from_env();
    let addr = config.bind_addr();
    if config.application_id.is_none() {
        tracing::warn!("VS_APPLICATION_ID not set; accepting requests for any skill");
    }

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Voice skill listening on http://{}", addr);

    axum::serve(listener, app_with_state(AppState::with_config(config))).await?;
    Ok(())
}
