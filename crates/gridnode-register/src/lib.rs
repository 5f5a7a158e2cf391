//! Registration client — announces this node's synthetic workload profile
//! to the load balancer once at startup.
//!
//! Best-effort: the caller logs a failure and starts serving regardless.
//! No retries.

use std::time::Duration;

use rand::Rng;
use reqwest::Client;
use tracing::{info, warn};

use gridnode_core::{DemandVector, Error, Result};

/// Bound on the announcement round-trip so an unreachable balancer cannot
/// stall startup past the configured delay.
const ANNOUNCE_TIMEOUT: Duration = Duration::from_secs(5);

/// Draw a registration vector: each component a multiple of 10 in [10, 100].
pub fn generate_vector(rng: &mut impl Rng) -> DemandVector {
    DemandVector {
        compute: rng.gen_range(1..=10u64) * 10,
        storage: rng.gen_range(1..=10u64) * 10,
    }
}

/// Build the HTTP client used for the announcement.
pub fn announce_client() -> Result<Client> {
    Client::builder()
        .timeout(ANNOUNCE_TIMEOUT)
        .build()
        .map_err(|e| Error::Http(format!("failed to build registration client: {}", e)))
}

/// The load balancer's registration endpoint.
pub fn registration_url(balancer_addr: &str) -> String {
    format!("http://{}/", balancer_addr)
}

/// Announce `vector` to the load balancer at `balancer_addr` (`host:port`).
///
/// Sends one GET to the balancer's root path with the vector as a JSON
/// body, then waits for and logs the response status and body.
pub async fn announce(client: &Client, balancer_addr: &str, vector: DemandVector) -> Result<()> {
    let url = registration_url(balancer_addr);
    info!(
        "Registering with load balancer at {} (compute={}, storage={})",
        url, vector.compute, vector.storage
    );

    let response = client
        .get(&url)
        .json(&vector)
        .send()
        .await
        .map_err(|e| Error::Http(format!("registration request failed: {}", e)))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if status.is_success() {
        info!("Load balancer accepted registration {}: {}", status, body.trim());
    } else {
        warn!("Load balancer rejected registration {}: {}", status, body.trim());
    }

    Ok(())
}
