use medico_service::config::MedicoConfig;
use medico_service::services::{init_metrics, sink_for};
use medico_service::{AppState, Application};
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = MedicoConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "medico-service",
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    )?;

    init_metrics();

    let state = AppState::new(sink_for(config.output));
    let app = Application::build(config, state).await?;
    app.run_until_stopped().await?;

    Ok(())
}
