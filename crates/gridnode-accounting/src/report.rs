//! Status report rendering.
//!
//! The field layout is a data contract with the cluster's operators:
//! hostname, lifetime totals, then the current job's own demand.

use gridnode_core::JobDemand;

use crate::ledger::UsageSnapshot;

/// Render the accounting status document for one handled job.
pub fn render_status(hostname: &str, totals: UsageSnapshot, demand: JobDemand) -> String {
    let mut body = String::from("<html><head><title>Backend Worker Node</title></head>");
    body.push_str(&format!("<p>Backend Server Hostname: {}</p>", hostname));
    body.push_str(&format!("<p>Total Compute used: {}</p>", totals.total_compute));
    body.push_str(&format!("<p>Total Storage used: {}</p>", totals.total_storage));
    body.push_str(&format!("<p>Current Job Compute: {}</p>", demand.compute));
    body.push_str(&format!("<p>Current Job Storage: {}</p>", demand.storage));
    body
}
