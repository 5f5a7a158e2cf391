//! Hostname lookup for the status report.

/// Placeholder reported when resolution fails.
const UNKNOWN_HOSTNAME: &str = "Unknown";

/// Source of this node's hostname. Injected so tests can pin the value.
pub trait HostnameSource: Send + Sync {
    /// Resolve the node's hostname, or `None` if resolution fails.
    fn resolve(&self) -> Option<String>;
}

/// Resolve a hostname for display; failure is swallowed.
pub fn display_hostname(source: &dyn HostnameSource) -> String {
    source
        .resolve()
        .unwrap_or_else(|| UNKNOWN_HOSTNAME.to_string())
}

/// Resolves via the system `hostname` utility.
pub struct SystemHostname;

impl HostnameSource for SystemHostname {
    fn resolve(&self) -> Option<String> {
        #[cfg(unix)]
        {
            use std::process::Command;
            Command::new("hostname")
                .output()
                .ok()
                .and_then(|output| String::from_utf8(output.stdout).ok())
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
        }
        #[cfg(not(unix))]
        {
            None
        }
    }
}
