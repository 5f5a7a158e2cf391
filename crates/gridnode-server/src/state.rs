//! Shared application state.

use gridnode_accounting::{HostnameSource, UsageLedger};

/// Shared state accessible from the accounting handler.
///
/// The ledger is owned here and mutated only through
/// [`UsageLedger::record`]; no other component touches the counters.
pub struct AppState {
    pub ledger: UsageLedger,
    pub hostnames: Box<dyn HostnameSource>,
}

impl AppState {
    /// Build state around the given hostname source.
    pub fn new(hostnames: Box<dyn HostnameSource>) -> Self {
        Self {
            ledger: UsageLedger::new(),
            hostnames,
        }
    }
}
