// Main entry point - Dependency injection and server setup
use std::sync::Arc;

use dashboard_composer::application::dashboard_service::DashboardService;
use dashboard_composer::application::registry::ComponentRegistry;
use dashboard_composer::infrastructure::components::register_custom_components;
use dashboard_composer::infrastructure::config::{load_app_config, load_custom_data, load_server_config};
use dashboard_composer::presentation::app_state::AppState;
use dashboard_composer::presentation::router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration; an invalid schema stops startup here
    let server_config = load_server_config()?;
    let app_config = load_app_config(&server_config.paths.app_config)?;
    let custom_data = load_custom_data(&server_config.paths.custom_data)?;

    // Populate the registry, then freeze it
    let mut registry = ComponentRegistry::new();
    register_custom_components(&mut registry);
    tracing::info!(
        "Composing {} tabs with {} registered components",
        app_config.tabs().len(),
        registry.len()
    );

    let dashboard_service = DashboardService::new(Arc::new(app_config), Arc::new(registry), Arc::new(custom_data));
    let state = Arc::new(AppState::new(dashboard_service));

    // Start server
    let addr = server_config.server.socket_addr()?;
    tracing::info!("Starting dashboard-composer on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state)).await?;

    Ok(())
}
