mod configuration;
mod error;
mod routes;
mod state;

use seams::systems::SystemRegistry;
use tracing::info;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let settings = configuration::Settings::new()?;

    let registry = SystemRegistry::with_defaults();
    for system in registry.systems() {
        info!(
            system = system.name(),
            tools = system.tools().len(),
            "registered system"
        );
    }

    let app = routes::configure(AppState::new(registry));

    let listener = tokio::net::TcpListener::bind(settings.server.socket_addr()?).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
