//! Node configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default accounting service port.
const DEFAULT_PORT: u16 = 80;
/// Default load-balancer address for the registration call.
const DEFAULT_BALANCER_ADDR: &str = "load-balancer:9797";
/// Default wait before registering, giving the balancer time to come up.
const DEFAULT_REGISTRATION_DELAY: Duration = Duration::from_secs(10);

/// Top-level node configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// HTTP server port for the accounting service.
    pub port: u16,
    /// Load-balancer address (`host:port`) the node registers with.
    pub balancer_addr: String,
    /// Delay before the one-shot registration attempt.
    pub registration_delay: Duration,
}

impl NodeConfig {
    /// Create configuration from environment and defaults.
    ///
    /// An absent variable takes the default; a variable that is set but
    /// unparseable is a configuration error.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("GRIDNODE_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("invalid GRIDNODE_PORT: {}", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        let balancer_addr = std::env::var("GRIDNODE_BALANCER_ADDR")
            .unwrap_or_else(|_| DEFAULT_BALANCER_ADDR.to_string());

        let registration_delay = match std::env::var("GRIDNODE_REGISTRATION_DELAY_SECS") {
            Ok(raw) => raw.parse().map(Duration::from_secs).map_err(|_| {
                Error::Config(format!("invalid GRIDNODE_REGISTRATION_DELAY_SECS: {}", raw))
            })?,
            Err(_) => DEFAULT_REGISTRATION_DELAY,
        };

        Ok(Self {
            port,
            balancer_addr,
            registration_delay,
        })
    }
}
