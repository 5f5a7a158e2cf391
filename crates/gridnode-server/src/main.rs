//! gridnode — backend worker node for a load-balanced cluster.
//!
//! Announces a synthetic workload profile to the load balancer once, then
//! serves the resource-accounting endpoint until shut down.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use gridnode_accounting::SystemHostname;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = gridnode_core::NodeConfig::from_env()?;

    // The balancer may still be coming up: wait, then announce once.
    // Registration is best-effort; the node serves either way.
    info!(
        "Waiting {}s before registering with {}",
        config.registration_delay.as_secs(),
        config.balancer_addr
    );
    tokio::time::sleep(config.registration_delay).await;

    let vector = gridnode_register::generate_vector(&mut rand::thread_rng());
    match gridnode_register::announce_client() {
        Ok(client) => {
            if let Err(e) =
                gridnode_register::announce(&client, &config.balancer_addr, vector).await
            {
                warn!("Registration failed, serving anyway: {}", e);
            }
        }
        Err(e) => warn!("Registration skipped: {}", e),
    }

    // Build application state and router
    let state = Arc::new(AppState::new(Box::new(SystemHostname)));
    let app = routes::build_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Accounting service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
